//! Error type for the outer shell: configuration, storage, terminal.
//!
//! Game logic itself never fails; only the I/O around it does.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Score encoding error: {0}")]
    ScoreEncode(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Terminal too small: need {need_cols}x{need_rows}, have {cols}x{rows}")]
    TerminalTooSmall {
        need_cols: u16,
        need_rows: u16,
        cols: u16,
        rows: u16,
    },

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}
