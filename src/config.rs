use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = "_llm.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    #[serde(default = "default_suffix")]
    pub suffix: String,

    #[serde(default)]
    pub force: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("transcripts")
}
fn default_target_dir() -> PathBuf {
    PathBuf::from("llm_ready_transcripts")
}
fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
            suffix: default_suffix(),
            force: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("invalid config JSON in {}: {}", path.display(), e)))
    }
}
