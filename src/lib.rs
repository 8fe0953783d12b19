pub mod batch;
pub mod config;
pub mod error;
pub mod ledger;
pub mod naming;
pub mod normalize;

pub use batch::{process_dir, BatchReport, FileOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use normalize::clean_transcript;
