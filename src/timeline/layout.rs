//! Layout engine — clip, group, pack, and map items into render geometry.
//!
//! [`LayoutEngine::layout`] is the single entry point. For one window and zoom
//! state it:
//!
//! 1. clips every item to the window, dropping those entirely outside it,
//! 2. groups survivors by block offset (chosen by [`LayoutMode`]),
//! 3. packs each group into rows with the lane allocator,
//! 4. maps clipped bounds to pixels through the time axis,
//! 5. generates one header lane per unit step.
//!
//! The result depends only on the inputs, so repeated calls are identical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::error::{Result, TimelineError};
use crate::timeline::axis::{generate_lanes, TimeAxisModel};
use crate::timeline::lanes::allocate;
use crate::timeline::types::{AxisLane, Item, PositionedItem, TimeWindow, Timestamp, ZoomState};

// ── Options ───────────────────────────────────────────────────────────────────

/// How items are assigned to row groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One band per item kind; kinds never share rows.
    #[default]
    Split,
    /// A single band; all kinds pack together.
    Merge,
    /// Use each item's own `block_offset`.
    Preassigned,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Merge => "merge",
            Self::Preassigned => "preassigned",
        }
    }

    /// Row group for `item` under this mode.
    pub fn block_offset(&self, item: &Item) -> i32 {
        match self {
            Self::Split => item.kind.band(),
            Self::Merge => 0,
            Self::Preassigned => item.block_offset,
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "split" => Ok(Self::Split),
            "merge" => Ok(Self::Merge),
            "preassigned" => Ok(Self::Preassigned),
            _ => Err(TimelineError::UnknownLayoutMode(s.to_string())),
        }
    }
}

/// What "overlap" means when packing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingBasis {
    /// Clipped `[start, end)` time intervals.
    #[default]
    Time,
    /// Rendered `[x, x + width)` extents, so minimum-width cards never collide.
    Pixels,
}

impl PackingBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Pixels => "pixels",
        }
    }
}

impl std::fmt::Display for PackingBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PackingBasis {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "time" => Ok(Self::Time),
            "pixels" => Ok(Self::Pixels),
            _ => Err(TimelineError::UnknownPackingBasis(s.to_string())),
        }
    }
}

/// Layout knobs chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub mode: LayoutMode,
    pub packing: PackingBasis,
    /// Empty rows between stacked bands.
    pub band_gap: usize,
    /// Height of one row in pixels.
    pub lane_height: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Split,
            packing: PackingBasis::Time,
            band_gap: 1,
            lane_height: 80,
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// One row group once stacked vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Band {
    pub block_offset: i32,
    /// First stacked row of the band.
    pub first_row: usize,
    pub row_count: usize,
}

/// Full render geometry for one window and zoom state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub window: TimeWindow,
    pub zoom: ZoomState,
    pub lanes: Vec<AxisLane>,
    /// Bands in ascending block offset; items within a band in packing order.
    pub items: Vec<PositionedItem>,
    pub bands: Vec<Band>,
    /// `lanes.len() * lane_width`.
    pub total_width: i64,
    /// Stacked rows including gaps between bands.
    pub total_rows: usize,
    pub content_height: u64,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// An item after clipping, before packing.
struct Clipped<'a> {
    item: &'a Item,
    start: Timestamp,
    end: Timestamp,
    x: i64,
    width: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Validate `[start, end]` and lay out `items` in it.
    pub fn layout_range(
        &self,
        start: Timestamp,
        end: Timestamp,
        zoom: ZoomState,
        items: &[Item],
    ) -> Result<Layout> {
        let window = TimeWindow::new(start, end)?;
        Ok(self.layout(&window, zoom, items))
    }

    pub fn layout(&self, window: &TimeWindow, zoom: ZoomState, items: &[Item]) -> Layout {
        let axis = TimeAxisModel::new(window.start(), zoom);

        // 1. Clip, then 2. group by block offset (BTreeMap keeps bands ascending).
        let mut groups: BTreeMap<i32, Vec<Clipped<'_>>> = BTreeMap::new();
        let mut dropped = 0usize;
        for item in items {
            let Some(clipped) = clip(item, window, &axis) else {
                dropped += 1;
                continue;
            };
            groups
                .entry(self.options.mode.block_offset(item))
                .or_default()
                .push(clipped);
        }

        // 3. Pack each group and 4. emit geometry in packing order.
        let mut positioned = Vec::with_capacity(items.len() - dropped);
        let mut bands = Vec::with_capacity(groups.len());
        let mut next_row = 0usize;
        for (block_offset, group) in &groups {
            let allocation = match self.options.packing {
                PackingBasis::Time => {
                    let spans: Vec<_> = group.iter().map(|c| (c.start, c.end)).collect();
                    allocate(&spans)
                }
                PackingBasis::Pixels => {
                    let spans: Vec<_> = group.iter().map(|c| (c.x, c.x + c.width)).collect();
                    allocate(&spans)
                }
            };

            let band = Band {
                block_offset: *block_offset,
                first_row: next_row,
                row_count: allocation.row_count,
            };
            for &i in &allocation.order {
                let clipped = &group[i];
                let y = allocation.rows[i];
                trace!(
                    id = %clipped.item.id,
                    x = clipped.x,
                    y,
                    width = clipped.width,
                    "placed item"
                );
                positioned.push(PositionedItem {
                    item: clipped.item.clone().normalized(),
                    effective_start: clipped.start,
                    effective_end: clipped.end,
                    x: clipped.x,
                    y,
                    band_row: band.first_row + y,
                    calculated_width: clipped.width,
                });
            }
            debug!(block_offset, rows = band.row_count, items = group.len(), "packed band");

            next_row = band.first_row + band.row_count.max(1) + self.options.band_gap;
            bands.push(band);
        }

        // 5. Headers.
        let lanes = generate_lanes(window, zoom.time_unit());
        let total_rows = bands
            .last()
            .map(|b| b.first_row + b.row_count.max(1))
            .unwrap_or(0);
        let total_width = lanes.len() as i64 * zoom.lane_width() as i64;
        let content_height = total_rows.max(1) as u64 * self.options.lane_height as u64;

        debug!(
            input = items.len(),
            dropped,
            bands = bands.len(),
            lanes = lanes.len(),
            zoom = %zoom,
            "timeline laid out"
        );

        Layout {
            window: *window,
            zoom,
            lanes,
            items: positioned,
            bands,
            total_width,
            total_rows,
            content_height,
        }
    }
}

/// Clip `item` to `window`, or `None` when it lies entirely outside.
fn clip<'a>(item: &'a Item, window: &TimeWindow, axis: &TimeAxisModel) -> Option<Clipped<'a>> {
    let (start, end) = item.bounds();
    if end < window.start() || start > window.end() {
        return None;
    }
    let start = start.max(window.start());
    let end = end.min(window.end());
    Some(Clipped {
        item,
        start,
        end,
        x: axis.offset_of(start).round() as i64,
        width: axis.span_width(start, end, item.min_width),
    })
}
