//! Sticky card content driven by viewport events.

use std::cell::Cell;
use std::rc::Rc;
use tracing::trace;

use super::events::{ScrollSource, Subscription, ViewportEvents};
use super::{max_translate, translate_x, Rect};
use crate::config::ViewportConfig;

/// Live measurements of one card, read on every recomputation.
///
/// Any measurement may be unavailable (unmounted node, zero-size layout);
/// the translation then falls back to `0`.
pub trait CardGeometry {
    /// Visible region of the scroll container, in its own coordinates.
    fn viewport(&self) -> Option<Rect>;
    /// The card's extent in the same coordinates.
    fn card(&self) -> Option<Rect>;
    /// Natural width of the card's inner content.
    fn content_width(&self) -> Option<f64>;

    fn translate_x(&self) -> f64 {
        translate_x(self.viewport(), self.card(), self.content_width())
    }

    fn max_translate(&self) -> f64 {
        max_translate(self.card(), self.content_width())
    }
}

/// A mounted card whose content offset tracks scroll and resize events.
///
/// Mounting subscribes to the hub; dropping (or [`StickyContent::unmount`])
/// releases the subscription.
#[derive(Debug)]
pub struct StickyContent {
    translate: Rc<Cell<f64>>,
    subscription: Subscription,
}

impl StickyContent {
    /// Compute the initial offset and start following `source`.
    ///
    /// A recomputed offset is only published when it moves by at least
    /// `epsilon` pixels, returns to exactly `0`, or the published offset no
    /// longer fits inside the card's current bound.
    pub fn mount<G>(
        events: &ViewportEvents,
        source: ScrollSource,
        geometry: G,
        epsilon: f64,
    ) -> Self
    where
        G: CardGeometry + 'static,
    {
        let epsilon = if epsilon.is_finite() {
            epsilon.max(0.0)
        } else {
            0.0
        };
        let translate = Rc::new(Cell::new(geometry.translate_x()));
        let published = Rc::clone(&translate);
        let subscription = events.subscribe(source, move |event| {
            let next = geometry.translate_x();
            let current = published.get();
            let moved = (next - current).abs() >= epsilon;
            let reset = next == 0.0 && current != 0.0;
            let stale = current > geometry.max_translate();
            if moved || reset || stale {
                trace!(?event, from = current, to = next, "sticky content moved");
                published.set(next);
            }
        });
        Self {
            translate,
            subscription,
        }
    }

    /// [`StickyContent::mount`] with the coalescing threshold from `[viewport]`.
    pub fn mount_with_config<G>(
        events: &ViewportEvents,
        source: ScrollSource,
        geometry: G,
        config: &ViewportConfig,
    ) -> Self
    where
        G: CardGeometry + 'static,
    {
        Self::mount(events, source, geometry, config.anchor_epsilon)
    }

    /// Current content offset in pixels.
    pub fn translate_x(&self) -> f64 {
        self.translate.get()
    }

    pub fn unmount(self) {
        self.subscription.release();
    }
}
