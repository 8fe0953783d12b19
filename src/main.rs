use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use transcript_prep::config::Config;

#[derive(Parser)]
#[command(name = "transcript-prep", about = "Clean downloaded transcripts for LLM input")]
struct Cli {
    /// Directory containing raw .txt transcripts
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Directory to write cleaned transcripts to (created if missing)
    #[arg(long)]
    target_dir: Option<PathBuf>,

    /// Suffix appended to each file stem (default: _llm.txt)
    #[arg(long)]
    suffix: Option<String>,

    /// Reprocess even if the target file already exists
    #[arg(long)]
    force: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    Config::load(path).unwrap_or_else(|e| die(&e.to_string()))
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = [
            "transcript-prep.config.json",
            "config/transcript-prep.config.json",
        ];
        defaults
            .into_iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
            .map(|p| load_config(&p))
            .unwrap_or_default()
    };

    // CLI overrides
    if let Some(dir) = cli.source_dir {
        config.source_dir = dir;
    }
    if let Some(dir) = cli.target_dir {
        config.target_dir = dir;
    }
    if let Some(suffix) = cli.suffix {
        config.suffix = suffix;
    }
    if cli.force {
        config.force = true;
    }

    let report = transcript_prep::process_dir(&config).unwrap_or_else(|e| die(&e.to_string()));
    if report.total == 0 {
        return;
    }

    println!("\nProcessing complete!");
    println!("Total files: {}", report.total);
    println!("Processed: {}", report.processed);
    println!("Skipped: {}", report.skipped);
    println!("Failed: {}", report.failed);
    println!("Time taken: {:.2} seconds", report.elapsed.as_secs_f64());
}
