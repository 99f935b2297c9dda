use anyhow::Result;
use clap::Args;

use timelane::timeline::{default_unit, generate_lanes, TimeUnit, TimeWindow, Timestamp};

#[derive(Args, Debug)]
pub struct HeadersArgs {
    /// Window start (RFC 3339, or YYYY-MM-DD for start of day)
    #[arg(long, value_parser = super::parse_start)]
    pub start: Timestamp,
    /// Window end (RFC 3339, or YYYY-MM-DD for end of day)
    #[arg(long, value_parser = super::parse_end)]
    pub end: Timestamp,
    /// Time unit; defaults to the finest unit that suits the window
    #[arg(long)]
    pub unit: Option<TimeUnit>,
}

/// Print one line per header lane.
pub fn headers(args: &HeadersArgs) -> Result<()> {
    let window = TimeWindow::new(args.start, args.end)?;
    let unit = args.unit.unwrap_or_else(|| default_unit(&window));
    let lanes = generate_lanes(&window, unit);

    println!("{} lanes ({unit})", lanes.len());
    println!("{}", "=".repeat(40));
    for (i, lane) in lanes.iter().enumerate() {
        println!(
            "  {:>4}  {}  {:<6} {}",
            i,
            lane.time.format("%Y-%m-%d %H:%M"),
            lane.label,
            lane.span_label
        );
    }

    Ok(())
}
