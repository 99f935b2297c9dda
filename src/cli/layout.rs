use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use timelane::config::TimelaneConfig;
use timelane::timeline::{
    Item, ItemKind, LayoutEngine, LayoutMode, PackingBasis, TimeUnit, TimeWindow, Timestamp,
    ZoomController,
};

#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// JSON file holding an array of items
    #[arg(long)]
    pub items: PathBuf,
    /// Window start (RFC 3339, or YYYY-MM-DD for start of day)
    #[arg(long, value_parser = super::parse_start)]
    pub start: Timestamp,
    /// Window end (RFC 3339, or YYYY-MM-DD for end of day)
    #[arg(long, value_parser = super::parse_end)]
    pub end: Timestamp,
    /// Time unit to start from instead of the window's default
    #[arg(long)]
    pub unit: Option<TimeUnit>,
    /// Default lane width in pixels
    #[arg(long)]
    pub lane_width: Option<u32>,
    /// Zoom in this many steps before laying out
    #[arg(long, default_value_t = 0)]
    pub zoom_in: u32,
    /// Zoom out this many steps before laying out
    #[arg(long, default_value_t = 0)]
    pub zoom_out: u32,
    /// split, merge, or preassigned
    #[arg(long)]
    pub mode: Option<LayoutMode>,
    /// time or pixels
    #[arg(long)]
    pub packing: Option<PackingBasis>,
}

/// One item as written in the input file. Only `kind` and `start` are required.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: Option<String>,
    #[serde(alias = "type")]
    kind: ItemKind,
    start: Timestamp,
    /// Missing means a zero-duration item.
    end: Option<Timestamp>,
    height: Option<u32>,
    min_width: Option<u32>,
    #[serde(default)]
    block_offset: i32,
}

impl ItemRecord {
    fn into_item(self, default_min_width: u32) -> Item {
        let id = self
            .id
            .unwrap_or_else(|| uuid::Uuid::now_v7().to_string());
        Item::new(id, self.kind, self.start, self.end.unwrap_or(self.start))
            .with_height(self.height.unwrap_or(Item::DEFAULT_HEIGHT))
            .with_min_width(self.min_width.unwrap_or(default_min_width))
            .with_block_offset(self.block_offset)
    }
}

/// Read items from a JSON array file.
fn load_items(path: &Path, default_min_width: u32) -> Result<Vec<Item>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items file: {}", path.display()))?;
    parse_items(&json, default_min_width)
}

fn parse_items(json: &str, default_min_width: u32) -> Result<Vec<Item>> {
    let records: Vec<ItemRecord> =
        serde_json::from_str(json).context("failed to parse items JSON")?;
    Ok(records
        .into_iter()
        .map(|r| r.into_item(default_min_width))
        .collect())
}

/// Lay out items and print the geometry as JSON to stdout.
pub fn layout(config: &TimelaneConfig, args: &LayoutArgs) -> Result<()> {
    let items = load_items(&args.items, config.layout.min_item_width)?;
    let window = TimeWindow::new(args.start, args.end)?;

    let default_width = args.lane_width.unwrap_or(config.layout.default_lane_width);
    let mut zoom = match args.unit {
        Some(unit) => ZoomController::with_unit(window, unit, default_width),
        None => ZoomController::new(window, default_width),
    };
    for _ in 0..args.zoom_in {
        zoom.zoom_in();
    }
    for _ in 0..args.zoom_out {
        zoom.zoom_out();
    }

    let mut options = config.layout.options();
    if let Some(mode) = args.mode {
        options.mode = mode;
    }
    if let Some(packing) = args.packing {
        options.packing = packing;
    }

    let layout = LayoutEngine::new(options).layout(&window, zoom.state(), &items);

    let json = serde_json::to_string_pretty(&layout)?;
    println!("{json}");

    eprintln!(
        "Laid out {} of {} items in {} bands across {} lanes ({}).",
        layout.items.len(),
        items.len(),
        layout.bands.len(),
        layout.lanes.len(),
        layout.zoom
    );

    Ok(())
}
