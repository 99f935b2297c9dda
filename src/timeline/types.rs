//! Core timeline type definitions.
//!
//! Defines [`Item`] (a time-ranged card supplied by the caller), [`ItemKind`]
//! (the tag a presentation layer dispatches on), [`TimeUnit`] and [`ZoomState`]
//! (the two axes of zoom), [`TimeWindow`] (the rendered range), and the two
//! outputs of layout: [`AxisLane`] headers and [`PositionedItem`] geometry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::{Result, TimelineError};

/// Instants on the time axis. All layout math runs in UTC.
pub type Timestamp = DateTime<Utc>;

/// Narrowest lane a zoom state may use, in pixels.
pub const MIN_LANE_WIDTH: u32 = 10;
/// Widest lane a zoom state may use, in pixels.
pub const MAX_LANE_WIDTH: u32 = 80;
/// Pixels added or removed per zoom step.
pub const ZOOM_STEP: u32 = 5;

/// What a timeline card represents. The presentation layer picks a renderer by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A goal spanning its planned period.
    Goal,
    /// A single behavior record.
    Record,
    /// A free-form note.
    Note,
    /// A filter control pinned across the whole window.
    Filter,
}

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [Self::Goal, Self::Record, Self::Note, Self::Filter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Record => "record",
            Self::Note => "note",
            Self::Filter => "filter",
        }
    }

    /// Row band this kind occupies when the layout keeps kinds apart.
    pub fn band(&self) -> i32 {
        match self {
            Self::Goal => 0,
            Self::Record => 1,
            Self::Note => 2,
            Self::Filter => 3,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "goal" => Ok(Self::Goal),
            "record" => Ok(Self::Record),
            "note" => Ok(Self::Note),
            "filter" => Ok(Self::Filter),
            _ => Err(TimelineError::UnknownItemKind(s.to_string())),
        }
    }
}

/// Granularity of one axis step, ordered finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeUnit {
    /// All units, finest first.
    pub const ALL: [TimeUnit; 4] = [Self::Hour, Self::Day, Self::Week, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// The next finer unit, or `None` at [`TimeUnit::Hour`].
    pub fn finer(&self) -> Option<TimeUnit> {
        match self {
            Self::Hour => None,
            Self::Day => Some(Self::Hour),
            Self::Week => Some(Self::Day),
            Self::Month => Some(Self::Week),
        }
    }

    /// The next coarser unit, or `None` at [`TimeUnit::Month`].
    pub fn coarser(&self) -> Option<TimeUnit> {
        match self {
            Self::Hour => Some(Self::Day),
            Self::Day => Some(Self::Week),
            Self::Week => Some(Self::Month),
            Self::Month => None,
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeUnit {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(TimelineError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Composite zoom level: pixel width of one lane plus the time unit it spans.
///
/// Ordered from most zoomed-out (`Month`, [`MIN_LANE_WIDTH`]) to most
/// zoomed-in (`Hour`, [`MAX_LANE_WIDTH`]): finer units rank above coarser
/// ones, and within a unit wider lanes rank higher.
///
/// Every constructor clamps the lane width, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ZoomStateRecord")]
pub struct ZoomState {
    time_unit: TimeUnit,
    lane_width: u32,
}

impl ZoomState {
    /// Build a zoom state, clamping `lane_width` into `[MIN_LANE_WIDTH, MAX_LANE_WIDTH]`.
    pub fn new(time_unit: TimeUnit, lane_width: u32) -> Self {
        Self {
            time_unit,
            lane_width: lane_width.clamp(MIN_LANE_WIDTH, MAX_LANE_WIDTH),
        }
    }

    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    pub fn lane_width(&self) -> u32 {
        self.lane_width
    }
}

#[derive(Deserialize)]
struct ZoomStateRecord {
    time_unit: TimeUnit,
    lane_width: u32,
}

impl From<ZoomStateRecord> for ZoomState {
    fn from(record: ZoomStateRecord) -> Self {
        Self::new(record.time_unit, record.lane_width)
    }
}

impl Ord for ZoomState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time_unit
            .cmp(&self.time_unit)
            .then(self.lane_width.cmp(&other.lane_width))
    }
}

impl PartialOrd for ZoomState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ZoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}px", self.time_unit, self.lane_width)
    }
}

/// The rendered range of the timeline. Construction rejects inverted windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self> {
        if end < start {
            return Err(TimelineError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn span(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// A time-ranged card supplied by the caller. Never mutated by layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque handle chosen by the caller (typically the upstream record id).
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub start: Timestamp,
    /// May precede `start` in raw input; see [`Item::bounds`].
    pub end: Timestamp,
    /// Card height in pixels.
    pub height: u32,
    /// Smallest width the card is ever drawn at, in pixels.
    pub min_width: u32,
    /// Row group. Items in different groups never compete for a row.
    #[serde(default)]
    pub block_offset: i32,
}

impl Item {
    /// Default card height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 60;
    /// Default minimum card width in pixels.
    pub const DEFAULT_MIN_WIDTH: u32 = 60;

    /// Create an item with default height, min width, and block offset.
    /// An `end` before `start` is normalized to a zero-duration item.
    pub fn new(id: impl Into<String>, kind: ItemKind, start: Timestamp, end: Timestamp) -> Self {
        Self {
            id: id.into(),
            kind,
            start,
            end: end.max(start),
            height: Self::DEFAULT_HEIGHT,
            min_width: Self::DEFAULT_MIN_WIDTH,
            block_offset: 0,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_block_offset(mut self, block_offset: i32) -> Self {
        self.block_offset = block_offset;
        self
    }

    /// `(start, end)` with `end` raised to `start` when the raw input is inverted.
    pub fn bounds(&self) -> (Timestamp, Timestamp) {
        (self.start, self.end.max(self.start))
    }

    /// This item with `end` raised to `start` if it was built inverted.
    pub fn normalized(mut self) -> Self {
        self.end = self.end.max(self.start);
        self
    }
}

/// One column header: the instant a unit step begins, with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLane {
    pub time: Timestamp,
    /// Short label, e.g. `10:00`, `15`, `Jan`.
    pub label: String,
    /// Label for the span the lane opens, e.g. `Mon 10:00`, `Jan 15 - Jan 21`.
    pub span_label: String,
}

/// An item with its computed geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedItem {
    #[serde(flatten)]
    pub item: Item,
    /// Start after clipping to the window.
    pub effective_start: Timestamp,
    /// End after clipping to the window.
    pub effective_end: Timestamp,
    /// Horizontal offset from the axis origin, in pixels.
    pub x: i64,
    /// Row index within the item's block-offset group.
    pub y: usize,
    /// Row index once all groups are stacked, see [`crate::timeline::layout::Band`].
    pub band_row: usize,
    pub calculated_width: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn inverted_item_becomes_zero_duration() {
        let item = Item::new("a", ItemKind::Note, ts(5), ts(3));
        assert_eq!(item.start, ts(5));
        assert_eq!(item.end, ts(5));
    }

    #[test]
    fn bounds_normalize_raw_inverted_input() {
        let mut item = Item::new("a", ItemKind::Note, ts(5), ts(6));
        item.end = ts(1);
        assert_eq!(item.bounds(), (ts(5), ts(5)));
        assert_eq!(item.normalized().end, ts(5));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = TimeWindow::new(ts(10), ts(2)).unwrap_err();
        assert!(matches!(err, TimelineError::InvertedWindow { .. }));
        assert!(TimeWindow::new(ts(2), ts(2)).is_ok());
    }

    #[test]
    fn zoom_state_clamps_width() {
        assert_eq!(ZoomState::new(TimeUnit::Day, 3).lane_width(), MIN_LANE_WIDTH);
        assert_eq!(ZoomState::new(TimeUnit::Day, 500).lane_width(), MAX_LANE_WIDTH);
    }

    #[test]
    fn deserialized_zoom_state_is_clamped() {
        let wide: ZoomState =
            serde_json::from_str(r#"{"time_unit": "day", "lane_width": 500}"#).unwrap();
        assert_eq!(wide, ZoomState::new(TimeUnit::Day, MAX_LANE_WIDTH));

        let narrow: ZoomState =
            serde_json::from_str(r#"{"time_unit": "hour", "lane_width": 0}"#).unwrap();
        assert_eq!(narrow.lane_width(), MIN_LANE_WIDTH);
    }

    #[test]
    fn zoom_state_total_order() {
        let month_max = ZoomState::new(TimeUnit::Month, MAX_LANE_WIDTH);
        let week_min = ZoomState::new(TimeUnit::Week, MIN_LANE_WIDTH);
        let day_40 = ZoomState::new(TimeUnit::Day, 40);
        let day_45 = ZoomState::new(TimeUnit::Day, 45);
        assert!(month_max < week_min);
        assert!(week_min < day_40);
        assert!(day_40 < day_45);
    }

    #[test]
    fn tags_round_trip_through_strings() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>().unwrap(), kind);
        }
        for unit in TimeUnit::ALL {
            assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        }
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn item_deserializes_with_default_block_offset() {
        let json = r#"{
            "id": "r1",
            "type": "record",
            "start": "2024-01-01T10:00:00Z",
            "end": "2024-01-01T11:00:00Z",
            "height": 60,
            "min_width": 40
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ItemKind::Record);
        assert_eq!(item.block_offset, 0);
    }
}
