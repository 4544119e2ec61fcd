//! Error type for selector operations
//!
//! None of these reach the presentation layer. Gesture entry points log them
//! and abort, so a missing node or a blocked toggle is a silent no-op.

use super::{NodeId, SourceId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Node is not in the current store snapshot (deleted mid-gesture)
    #[error("scene node {0} not found")]
    NodeNotFound(NodeId),

    #[error("source {0} not found")]
    SourceNotFound(SourceId),

    /// Action disallowed by the current lock or session state
    #[error("action blocked: {0}")]
    Blocked(&'static str),

    #[error("no active scene")]
    NoActiveScene,

    /// Store-boundary validation failure
    #[error("malformed scene: {0}")]
    MalformedScene(String),
}

pub type SelectorResult<T> = Result<T, SelectorError>;
