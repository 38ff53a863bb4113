use std::num::ParseIntError;
use thiserror::Error;

/// Errors terminating a parse. Each variant carries the offending line's
/// number (1-based) and content so the caller can locate the defect.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An `end` marker with no open group on the stack: the tree itself is
    /// malformed, distinct from a usage or format problem.
    #[error("line {line_no}: group end tag without corresponding start tag: {line:?}")]
    UnmatchedEnd { line_no: usize, line: String },

    /// A `group` marker whose id payload is not a valid integer.
    #[error("line {line_no}: invalid group id {id_text:?}: {source}")]
    InvalidGroupId {
        line_no: usize,
        id_text: String,
        #[source]
        source: ParseIntError,
    },

    /// I/O failure on the input stream or output sink.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
