//! Viewport translation — keeps a card's inner content inside the visible part
//! of a horizontally scrolled container.
//!
//! Ordinary sticky positioning does not work for content nested inside a
//! transformed or scrolled ancestor, so the offset is computed here instead:
//!
//! ```text
//! translate_x = clamp(visible_left - card_left, 0, max(0, card_width - content_width))
//! ```
//!
//! All rectangles are horizontal extents in the scroll container's own
//! coordinate space. [`translate_x`] is the pure contract; [`events`] and
//! [`sticky`] drive it from scroll and resize notifications.

pub mod events;
pub mod sticky;

use serde::{Deserialize, Serialize};

pub use events::{ContainerId, ScrollSource, Subscription, ViewportEvent, ViewportEvents};
pub use sticky::{CardGeometry, StickyContent};

/// Horizontal extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Finite with a non-negative width.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width >= 0.0
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left && other.right() <= self.right()
    }
}

/// Offset to apply to a card's content so it stays in view.
///
/// Returns `0.0` whenever a measurement is missing or unusable, when the card
/// is fully visible, and when the card is no wider than the viewport.
/// Otherwise the result lies in `[0, card.width - content_width]`.
pub fn translate_x(viewport: Option<Rect>, card: Option<Rect>, content_width: Option<f64>) -> f64 {
    let (Some(viewport), Some(card), Some(content_width)) = (viewport, card, content_width) else {
        return 0.0;
    };
    if !viewport.is_measurable()
        || !card.is_measurable()
        || !content_width.is_finite()
        || content_width < 0.0
    {
        return 0.0;
    }
    if viewport.contains(&card) || card.width <= viewport.width {
        return 0.0;
    }

    (viewport.left - card.left).clamp(0.0, max_translate(Some(card), Some(content_width)))
}

/// Upper bound on [`translate_x`] for this card: `max(0, card.width - content_width)`,
/// or `0.0` when a measurement is missing or unusable.
pub fn max_translate(card: Option<Rect>, content_width: Option<f64>) -> f64 {
    match (card, content_width) {
        (Some(card), Some(content_width))
            if card.is_measurable() && content_width.is_finite() && content_width >= 0.0 =>
        {
            (card.width - content_width).max(0.0)
        }
        _ => 0.0,
    }
}
