use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Depth and color listings disagree on frame count.
    #[error("found {depth} depth frames but {color} color frames")]
    InputMismatch { depth: usize, color: usize },

    #[error("no frames found in {}", .0.display())]
    NoFrames(PathBuf),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, FragError>;
