//! File naming for the transcript downloader that fills the source
//! directory. The batch cleaner does not use these; they are exported so a
//! fetcher can name its output files the same way.

pub const SHARE_PREFIX: &str = "https://www.loom.com/share/";
const TITLE_SUFFIX: &str = " - Loom";

/// Bare video id, safe to embed in a file name.
pub fn clean_video_id(id: &str) -> String {
    id.replace(SHARE_PREFIX, "").replace('/', "_")
}

pub fn share_url(id: &str) -> String {
    if id.contains(SHARE_PREFIX) {
        id.to_string()
    } else {
        format!("{}{}", SHARE_PREFIX, id)
    }
}

pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '/' | '\\' | ':' | '|' => out.push('-'),
            '*' | '?' => {}
            '"' => out.push('\''),
            '<' => out.push('('),
            '>' => out.push(')'),
            _ => out.push(c),
        }
    }
    out
}

/// Page title with the site suffix removed.
pub fn page_title(raw: &str) -> String {
    raw.replace(TITLE_SUFFIX, "").trim().to_string()
}

pub fn transcript_filename(title: Option<&str>, clean_id: &str) -> String {
    let title = title.map(sanitize_filename).unwrap_or_default();
    let name = if title.is_empty() || title == clean_id {
        format!("{}.txt", clean_id)
    } else {
        format!("{} - {}.txt", title, clean_id)
    };
    sanitize_filename(&name)
}
