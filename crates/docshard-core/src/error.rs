//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocshardError {
    #[error("SHARD/PARSE: line {line}: {message}")]
    ShardParse { line: usize, message: String },

    #[error("SHARD/PATH/{0}")]
    ShardPath(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("SERIALIZE/{0}")]
    Json(#[from] serde_json::Error),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),
}

impl DocshardError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ShardParse {
            line,
            message: message.into(),
        }
    }
}
