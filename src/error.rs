use thiserror::Error;

/// Everything here is fatal: a failure aborts the current invocation and
/// propagates to the caller. There is no retry or partial-output path.
#[derive(Debug, Error)]
pub enum Error {
    /// Lowering met a construct with no handler. No fallback exists.
    #[error("unsupported node kind: {0}")]
    UnsupportedNode(String),

    /// A demonstration sequence was requested with a negative length.
    #[error("sequence length must be non-negative, got {0}")]
    InvalidLength(i64),

    #[error("failed to parse source: {0}")]
    Parse(#[from] syn::Error),

    #[error("graphviz rendering failed: {0}")]
    Render(String),
}
