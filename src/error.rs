//! Library error type.
//!
//! The layout core normalizes malformed items and out-of-range zoom requests
//! instead of rejecting them. [`TimelineError`] covers the cases that cannot be
//! normalized: an inverted time window, and string tags that do not name a
//! known variant.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    /// A window whose end precedes its start. No clipping policy makes this well-defined.
    #[error("time window ends before it starts: {start} > {end}")]
    InvertedWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("unknown time unit: {0}")]
    UnknownTimeUnit(String),

    #[error("unknown layout mode: {0}")]
    UnknownLayoutMode(String),

    #[error("unknown packing basis: {0}")]
    UnknownPackingBasis(String),
}

pub type Result<T, E = TimelineError> = std::result::Result<T, E>;
