use anyhow::Result;
use clap::{Args, ValueEnum};

use timelane::config::TimelaneConfig;
use timelane::timeline::{TimeWindow, Timestamp, ZoomController};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ZoomStep {
    In,
    Out,
}

#[derive(Args, Debug)]
pub struct ZoomArgs {
    /// Window start (RFC 3339, or YYYY-MM-DD for start of day)
    #[arg(long, value_parser = super::parse_start)]
    pub start: Timestamp,
    /// Window end (RFC 3339, or YYYY-MM-DD for end of day)
    #[arg(long, value_parser = super::parse_end)]
    pub end: Timestamp,
    /// Default lane width in pixels
    #[arg(long)]
    pub lane_width: Option<u32>,
    /// Steps to apply in order
    #[arg(value_enum)]
    pub steps: Vec<ZoomStep>,
}

/// Print the zoom state before and after each step.
pub fn zoom(config: &TimelaneConfig, args: &ZoomArgs) -> Result<()> {
    let window = TimeWindow::new(args.start, args.end)?;
    let default_width = args.lane_width.unwrap_or(config.layout.default_lane_width);
    let mut zoom = ZoomController::new(window, default_width);

    print_state("start", &zoom);
    for step in &args.steps {
        let changed = match step {
            ZoomStep::In => zoom.zoom_in(),
            ZoomStep::Out => zoom.zoom_out(),
        };
        let label = match (step, changed) {
            (ZoomStep::In, true) => "in",
            (ZoomStep::Out, true) => "out",
            (_, false) => "no-op",
        };
        print_state(label, &zoom);
    }

    Ok(())
}

fn print_state(label: &str, zoom: &ZoomController) {
    println!(
        "  {:<6} {:<6} {:>3}px  can_zoom_in={:<5} can_zoom_out={}",
        label,
        zoom.time_unit(),
        zoom.lane_width(),
        zoom.can_zoom_in(),
        zoom.can_zoom_out()
    );
}
