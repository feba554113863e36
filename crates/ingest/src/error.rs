use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("'{0}' is not a .csv file")]
    NotCsv(PathBuf),

    #[error("Failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not look like delimited data: {reason}")]
    SniffFailed { path: PathBuf, reason: String },

    #[error("CSV read error")]
    Csv(#[from] csv::Error),

    #[error("Invalid input settings")]
    Config(#[from] configuration::error::ConfigError),
}
