//! Error type shared by the parser, the pipeline and the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TspError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: point id {id} already used")]
    DuplicateId { line: usize, id: u64 },

    /// The MST produced an odd number of odd-degree vertices.
    #[error("odd-degree vertex set has odd size {0}")]
    OddVertexCount(usize),

    #[error("eulerian extraction left {remaining} edge(s) unconsumed")]
    UnconsumedEdges { remaining: usize },

    #[error("eulerian walk is not closed: starts at {start}, ends at {end}")]
    OpenWalk { start: usize, end: usize },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        TspError::Parse { line, message: message.into() }
    }
}
