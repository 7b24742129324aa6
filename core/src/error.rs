use std::io;

use thiserror::Error;

/// Errors surfaced by the index core.
///
/// Unknown query terms are not errors; they resolve to an empty result set.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while writing or reading a snapshot.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Structurally invalid boolean query (empty operand, dangling operator).
    #[error("malformed query: {0}")]
    Query(String),

    /// The file is not a docfind snapshot.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// Snapshot was written by an incompatible schema version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    /// Snapshot body failed to decode.
    #[error("corrupt snapshot: {0}")]
    Decode(#[from] bincode::Error),

    /// Snapshot references a stemmer this build does not know.
    #[error("unknown stemmer algorithm `{0}`")]
    UnknownStemmer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
