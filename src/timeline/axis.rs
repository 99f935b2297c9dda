//! Time axis — maps instants to pixel offsets for a given zoom state.
//!
//! Steps are real calendar units measured from the axis origin: hours, days,
//! 7-day weeks, and calendar months. A position inside a step is the fraction
//! of that step's true length elapsed, so a month lane always spans exactly one
//! lane width whether the month has 28 or 31 days.

use chrono::{Datelike, Duration, Months};

use crate::timeline::types::{AxisLane, Item, TimeUnit, TimeWindow, Timestamp, ZoomState};

// ── Default unit policy ───────────────────────────────────────────────────────

/// Windows up to this long default to [`TimeUnit::Hour`].
const HOUR_UNIT_MAX_HOURS: i64 = 7 * 24;
/// Windows up to this long default to [`TimeUnit::Day`].
const DAY_UNIT_MAX_DAYS: i64 = 120;
/// Windows up to this long default to [`TimeUnit::Week`]; longer ones use months.
const WEEK_UNIT_MAX_WEEKS: i64 = 52;

/// Pick the finest unit that keeps the window's lane count reasonable.
///
/// Thresholds are inclusive and increase strictly from unit to unit, so a
/// shorter window never defaults to a coarser unit than a longer one.
pub fn default_unit(window: &TimeWindow) -> TimeUnit {
    let span = window.span();
    if span <= Duration::hours(HOUR_UNIT_MAX_HOURS) {
        TimeUnit::Hour
    } else if span <= Duration::days(DAY_UNIT_MAX_DAYS) {
        TimeUnit::Day
    } else if span <= Duration::weeks(WEEK_UNIT_MAX_WEEKS) {
        TimeUnit::Week
    } else {
        TimeUnit::Month
    }
}

// ── Calendar stepping ─────────────────────────────────────────────────────────

/// The instant `n` whole units after `from` (before it, for negative `n`).
///
/// Month steps are always taken from `from` itself, never chained, so a Jan 31
/// origin yields Feb 29/28, Mar 31, Apr 30 rather than drifting to the 28th.
pub fn step(from: Timestamp, unit: TimeUnit, n: i64) -> Timestamp {
    match unit {
        TimeUnit::Hour => from + Duration::hours(n),
        TimeUnit::Day => from + Duration::days(n),
        TimeUnit::Week => from + Duration::weeks(n),
        TimeUnit::Month => {
            let months = Months::new(n.unsigned_abs().min(u32::MAX as u64) as u32);
            let stepped = if n >= 0 {
                from.checked_add_months(months)
            } else {
                from.checked_sub_months(months)
            };
            // Only out-of-range dates fail; approximate with 30-day months there.
            stepped.unwrap_or_else(|| from + Duration::days(30 * n))
        }
    }
}

/// Number of `unit` steps from `from` to `to`, including the fractional
/// position within the last partial step. Negative when `to < from`.
pub fn units_between(from: Timestamp, to: Timestamp, unit: TimeUnit) -> f64 {
    let fixed = match unit {
        TimeUnit::Hour => Some(Duration::hours(1)),
        TimeUnit::Day => Some(Duration::days(1)),
        TimeUnit::Week => Some(Duration::weeks(1)),
        TimeUnit::Month => None,
    };
    if let Some(unit_len) = fixed {
        return (to - from).num_milliseconds() as f64 / unit_len.num_milliseconds() as f64;
    }

    // Calendar months: find n with step(n) <= to < step(n + 1).
    let mut n = (to.year() as i64 - from.year() as i64) * 12 + to.month() as i64
        - from.month() as i64;
    while step(from, TimeUnit::Month, n) > to {
        n -= 1;
    }
    while step(from, TimeUnit::Month, n + 1) <= to {
        n += 1;
    }

    let lo = step(from, TimeUnit::Month, n);
    let hi = step(from, TimeUnit::Month, n + 1);
    let len = (hi - lo).num_milliseconds();
    if len <= 0 {
        return n as f64;
    }
    n as f64 + (to - lo).num_milliseconds() as f64 / len as f64
}

// ── Axis model ────────────────────────────────────────────────────────────────

/// Pixel mapping for one axis origin and zoom state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxisModel {
    origin: Timestamp,
    zoom: ZoomState,
}

impl TimeAxisModel {
    pub fn new(origin: Timestamp, zoom: ZoomState) -> Self {
        Self { origin, zoom }
    }

    pub fn origin(&self) -> Timestamp {
        self.origin
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    /// Pixel offset of `instant` from the axis origin.
    pub fn offset_of(&self, instant: Timestamp) -> f64 {
        units_between(self.origin, instant, self.zoom.time_unit()) * self.zoom.lane_width() as f64
    }

    /// Rendered width of an item, never narrower than its `min_width`.
    pub fn width_of(&self, item: &Item) -> i64 {
        let (start, end) = item.bounds();
        self.span_width(start, end, item.min_width)
    }

    /// `max(min_width, ceil(units) * lane_width)` for the span `[start, end]`.
    /// Zero-duration spans come out at exactly `min_width`.
    pub fn span_width(&self, start: Timestamp, end: Timestamp, min_width: u32) -> i64 {
        let units = units_between(start, end.max(start), self.zoom.time_unit()).ceil();
        let scaled = units as i64 * self.zoom.lane_width() as i64;
        scaled.max(min_width as i64)
    }
}

// ── Headers ───────────────────────────────────────────────────────────────────

/// One [`AxisLane`] per unit step from `window.start()` up to and including
/// `window.end()`.
pub fn generate_lanes(window: &TimeWindow, unit: TimeUnit) -> Vec<AxisLane> {
    let mut lanes = Vec::new();
    let mut n = 0;
    loop {
        let time = step(window.start(), unit, n);
        if time > window.end() {
            break;
        }
        lanes.push(AxisLane {
            time,
            label: format_label(time, unit),
            span_label: format_span_label(time, unit),
        });
        n += 1;
    }
    lanes
}

/// Monday of the week containing `time`, at the same time of day.
fn week_start(time: Timestamp) -> Timestamp {
    time - Duration::days(time.weekday().num_days_from_monday() as i64)
}

/// Short column label.
pub fn format_label(time: Timestamp, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Hour => time.format("%H:%M").to_string(),
        TimeUnit::Day => time.format("%-d").to_string(),
        TimeUnit::Week => week_start(time).format("%-d").to_string(),
        TimeUnit::Month => time.format("%b").to_string(),
    }
}

/// Label for the span a column opens.
pub fn format_span_label(time: Timestamp, unit: TimeUnit) -> String {
    match unit {
        TimeUnit::Hour => time.format("%a %H:%M").to_string(),
        TimeUnit::Day => time.format("%a").to_string(),
        TimeUnit::Week => {
            let monday = week_start(time);
            let sunday = monday + Duration::days(6);
            format!("{} - {}", monday.format("%b %-d"), sunday.format("%b %-d"))
        }
        TimeUnit::Month => time.format("%b %Y").to_string(),
    }
}
