//! Error types for plain-content.
//!
//! The rewrite, digest and index passes over a [`Node`](crate::Node) tree
//! cannot fail. Errors only come from the collaborators around them: the
//! HTML parser adapter and JSON decoding of article records.

/// Error type for plain-content operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input nesting is deeper than `Options::max_depth` allows.
    #[error("document nesting depth {depth} exceeds limit of {limit}")]
    DepthLimitExceeded { depth: usize, limit: usize },

    /// An article record could not be decoded.
    #[error("invalid article JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for plain-content operations.
pub type Result<T> = std::result::Result<T, Error>;
