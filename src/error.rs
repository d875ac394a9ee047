//! Error types for markup compilation.

use thiserror::Error;

/// Errors from resolving a style against the sequence table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Tag name not present in the sequence table.
    #[error("unknown style tag '{0}'")]
    UnknownStyle(String),

    /// Attribute supplied to a style that does not accept it.
    #[error("style '{style}' does not accept attribute '{attribute}'")]
    UnsupportedAttribute { style: String, attribute: String },

    /// Attribute value outside the style's accepted variant set.
    #[error("unknown '{style}' variant '{variant}'")]
    UnknownVariant { style: String, variant: String },
}

/// Errors that can occur when compiling markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Style resolution failed (unknown tag, attribute, or variant).
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Tag without a terminating `>`.
    #[error("unclosed tag starting at byte {0}")]
    UnclosedTag(usize),

    /// Tag with no name: `<>` or `</>`.
    #[error("empty tag at byte {0}")]
    EmptyTag(usize),

    /// Quoted attribute value without a closing quote.
    #[error("unterminated attribute value in tag starting at byte {0}")]
    UnterminatedValue(usize),

    /// Closing tag with no matching open tag on the stack.
    ///
    /// A well-formed document never triggers this; it is the defense against
    /// markup that closes a style it never opened.
    #[error("closing tag '</{0}>' has no matching open tag")]
    UnmatchedCloseTag(String),
}
