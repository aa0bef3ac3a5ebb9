//! Errors raised at the parse and persistence boundaries.
//!
//! Drawing operations never fail: degenerate gestures, undo on an empty
//! history and the like are no-ops. Only host-supplied strings and saved
//! documents can be rejected.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InkError>;

#[derive(Debug, Error)]
pub enum InkError {
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("unknown tool: {0:?}")]
    UnknownTool(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid document: {0}")]
    Document(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("msgpack encode: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("msgpack decode: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}
