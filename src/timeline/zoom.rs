//! Zoom state machine over `(time unit, lane width)`.
//!
//! Zooming changes lane width in [`ZOOM_STEP`] increments first; only once the
//! width hits a bound does the unit change, re-entering at the opposite bound.
//! The whole state space is one totally ordered chain (see [`ZoomState`]'s
//! `Ord`), so zooming in and out are inverse walks along it.

use tracing::debug;

use crate::error::Result;
use crate::timeline::axis::default_unit;
use crate::timeline::types::{
    TimeUnit, TimeWindow, Timestamp, ZoomState, MAX_LANE_WIDTH, MIN_LANE_WIDTH, ZOOM_STEP,
};

/// Owns the zoom state of one timeline view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomController {
    state: ZoomState,
    window: TimeWindow,
    default_width: u32,
}

impl ZoomController {
    /// Start at `{default_unit(window), default_width}`. The width is clamped into bounds.
    pub fn new(window: TimeWindow, default_width: u32) -> Self {
        Self {
            state: ZoomState::new(default_unit(&window), default_width),
            window,
            default_width,
        }
    }

    /// Start at a caller-chosen unit instead of the window's default.
    pub fn with_unit(window: TimeWindow, time_unit: TimeUnit, default_width: u32) -> Self {
        Self {
            state: ZoomState::new(time_unit, default_width),
            window,
            default_width,
        }
    }

    /// Convenience over [`ZoomController::new`] that validates the window first.
    pub fn for_range(start: Timestamp, end: Timestamp, default_width: u32) -> Result<Self> {
        Ok(Self::new(TimeWindow::new(start, end)?, default_width))
    }

    pub fn state(&self) -> ZoomState {
        self.state
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.state.time_unit()
    }

    pub fn lane_width(&self) -> u32 {
        self.state.lane_width()
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Re-initialize if the caller's window or default width changed since the
    /// last call. Returns `true` when a reset happened.
    pub fn sync(&mut self, window: TimeWindow, default_width: u32) -> bool {
        if window == self.window && default_width == self.default_width {
            return false;
        }
        *self = Self::new(window, default_width);
        debug!(state = %self.state, "zoom reset for new window or default width");
        true
    }

    pub fn can_zoom_in(&self) -> bool {
        !(self.time_unit() == TimeUnit::Hour && self.lane_width() == MAX_LANE_WIDTH)
    }

    pub fn can_zoom_out(&self) -> bool {
        !(self.time_unit() == TimeUnit::Month && self.lane_width() == MIN_LANE_WIDTH)
    }

    /// Widen lanes, or switch to the next finer unit at the narrowest width.
    /// Returns `false` when already fully zoomed in.
    pub fn zoom_in(&mut self) -> bool {
        let before = self.state;
        let (unit, width) = (before.time_unit(), before.lane_width());
        if width < MAX_LANE_WIDTH {
            self.state = ZoomState::new(unit, width + ZOOM_STEP);
        } else if let Some(finer) = unit.finer() {
            self.state = ZoomState::new(finer, MIN_LANE_WIDTH);
        }
        self.log_transition(before)
    }

    /// Narrow lanes, or switch to the next coarser unit at the widest width.
    /// Returns `false` when already fully zoomed out.
    pub fn zoom_out(&mut self) -> bool {
        let before = self.state;
        let (unit, width) = (before.time_unit(), before.lane_width());
        if width > MIN_LANE_WIDTH {
            self.state = ZoomState::new(unit, width.saturating_sub(ZOOM_STEP));
        } else if let Some(coarser) = unit.coarser() {
            self.state = ZoomState::new(coarser, MAX_LANE_WIDTH);
        }
        self.log_transition(before)
    }

    fn log_transition(&self, before: ZoomState) -> bool {
        if before == self.state {
            return false;
        }
        debug!(from = %before, to = %self.state, "zoom changed");
        true
    }
}
