use regex::Regex;
use std::sync::LazyLock;

static RE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\[(]\s*)?(\d{1,2}:\d{2}(?::\d{2})?)(?:\s*[\])])?").unwrap()
});
static RE_EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static RE_DUP_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])(?:\s*[.!?])+").unwrap());
static RE_SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());
static RE_MISSING_SPACE_AFTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,;:!?])([^\s\d])").unwrap());
static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Clean a raw transcript for LLM input.
///
/// Passes run in a fixed order and each one sees the output of the last:
/// timestamps, newline runs, duplicate terminal punctuation, punctuation
/// spacing, per-line trim, blank-line pruning, then the printable filter.
pub fn clean_transcript(text: &str) -> String {
    let text = standardize_timestamps(text);
    let text = collapse_blank_lines(&text);
    let text = dedup_terminal_punctuation(&text);
    let text = fix_punctuation_spacing(&text);
    let text = trim_lines(&text);
    let text = prune_blank_lines(&text);
    strip_unprintable(&text)
}

/// `(1:02:03)`, `[5:09]` and bare `12:34` all become `[H:MM(:SS)]`.
fn standardize_timestamps(text: &str) -> String {
    RE_TIMESTAMP.replace_all(text, "[${1}]").into_owned()
}

fn collapse_blank_lines(text: &str) -> String {
    RE_EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}

fn dedup_terminal_punctuation(text: &str) -> String {
    RE_DUP_TERMINAL.replace_all(text, "${1}").into_owned()
}

fn fix_punctuation_spacing(text: &str) -> String {
    let text = RE_SPACE_BEFORE_PUNCT.replace_all(text, "${1}");
    // Digits are exempt so decimals and ratios stay intact.
    RE_MISSING_SPACE_AFTER
        .replace_all(&text, "${1} ${2}")
        .into_owned()
}

fn trim_lines(text: &str) -> String {
    let joined = text
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    RE_MULTI_SPACE.replace_all(&joined, " ").into_owned()
}

/// Drops empty lines unless both neighbours have content.
fn prune_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let has_content = |i: usize| !lines[i].trim().is_empty();

    lines
        .iter()
        .enumerate()
        .filter(|&(i, _)| {
            has_content(i)
                || (i > 0 && i + 1 < lines.len() && has_content(i - 1) && has_content(i + 1))
        })
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_unprintable(text: &str) -> String {
    text.chars().filter(|&c| is_printable(c)).collect()
}

/// ASCII graphic characters plus the whitespace controls a text file may
/// legitimately carry.
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_transcript(""), "");
    }

    #[test]
    fn test_parenthesized_timestamp() {
        let result = clean_transcript("Welcome (1:02:03) let's begin");
        assert_eq!(result, "Welcome [1:02:03] let's begin");
    }

    #[test]
    fn test_bracketed_and_bare_timestamps() {
        assert_eq!(standardize_timestamps("[5:09] hi"), "[5:09] hi");
        assert_eq!(standardize_timestamps("at 12:34 we"), "at [12:34] we");
        assert_eq!(standardize_timestamps("( 0:15 )"), "[0:15]");
    }

    #[test]
    fn test_timestamp_leftmost_match() {
        // Three-digit hours are not a timestamp; the regex takes the tail.
        assert_eq!(standardize_timestamps("123:45"), "1[23:45]");
    }

    #[test]
    fn test_duplicate_punctuation() {
        assert_eq!(clean_transcript("Wait... really??"), "Wait. really?");
        assert_eq!(dedup_terminal_punctuation("no! ? ok"), "no! ok");
    }

    #[test]
    fn test_spaced_punctuation_run() {
        assert_eq!(clean_transcript("Really. . . yes"), "Really. yes");
        assert_eq!(clean_transcript("No! ? . fine"), "No! fine");
    }

    #[test]
    fn test_spaced_punctuation_run_is_stable() {
        for raw in ["Really. . . yes", "No! ? . fine", "end . ! ?\nnext"] {
            let once = clean_transcript(raw);
            assert_eq!(clean_transcript(&once), once);
        }
    }

    #[test]
    fn test_space_before_punctuation() {
        assert_eq!(fix_punctuation_spacing("hello , world !"), "hello, world!");
    }

    #[test]
    fn test_space_after_punctuation() {
        assert_eq!(fix_punctuation_spacing("one,two;three"), "one, two; three");
    }

    #[test]
    fn test_digits_exempt_from_spacing() {
        assert_eq!(clean_transcript("pi is 3.14 and odds 2:1"), "pi is 3.14 and odds 2:1");
    }

    #[test]
    fn test_space_collapse_keeps_tabs() {
        assert_eq!(clean_transcript("a    b\t\tc"), "a b\t\tc");
    }

    #[test]
    fn test_line_trim() {
        assert_eq!(trim_lines("  a  \n\tb\t"), "a\nb");
    }

    #[test]
    fn test_paragraph_break_preserved() {
        assert_eq!(clean_transcript("line1\n\nline2"), "line1\n\nline2");
        assert_eq!(clean_transcript("line1\n\n\n\nline2"), "line1\n\nline2");
    }

    #[test]
    fn test_leading_and_trailing_blanks_dropped() {
        assert_eq!(clean_transcript("\n\nfirst\nsecond\n\n"), "first\nsecond");
    }

    #[test]
    fn test_consecutive_blank_lines_pruned() {
        assert_eq!(prune_blank_lines("a\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_unprintable_stripped() {
        assert_eq!(clean_transcript("caf\u{e9} time \u{1f600}ok"), "caf time ok");
        assert_eq!(clean_transcript("bell\u{7}here"), "bellhere");
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable('a'));
        assert!(is_printable('~'));
        assert!(is_printable('\t'));
        assert!(!is_printable('\u{7f}'));
        assert!(!is_printable('\u{e9}'));
    }

    #[test]
    fn test_second_pass_is_noop() {
        let raw = "Speaker 1 (0:05)\nHello   there ,how are you??\n\n\n\n[1:02:03]  Fine...thanks\n";
        let once = clean_transcript(raw);
        assert_eq!(once, "Speaker 1 [0:05]\nHello there, how are you?\n\n[1:02:03] Fine. thanks");
        assert_eq!(clean_transcript(&once), once);
    }
}
