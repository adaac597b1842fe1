//! Error types for platform tag parsing.

/// A string was not one of the canonical platform tag spellings.
///
/// Only the strict parse path produces this; [`normalize`] is total and
/// never fails.
///
/// [`normalize`]: crate::tag::PlatformTag::normalize
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a canonical platform tag: '{raw}'")]
pub struct TagParseError {
    /// The rejected input.
    pub raw: String,
}
