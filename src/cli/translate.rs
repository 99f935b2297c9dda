use clap::Args;
use std::cell::Cell;
use std::rc::Rc;

use timelane::config::TimelaneConfig;
use timelane::viewport::{
    translate_x, CardGeometry, Rect, ScrollSource, StickyContent, ViewportEvent, ViewportEvents,
};

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Left edge of the visible region (the container's scroll offset)
    #[arg(long, allow_negative_numbers = true)]
    pub viewport_left: f64,
    /// Width of the visible region
    #[arg(long)]
    pub viewport_width: f64,
    /// Left edge of the card in container coordinates
    #[arg(long, allow_negative_numbers = true)]
    pub card_left: f64,
    /// Width of the card
    #[arg(long)]
    pub card_width: f64,
    /// Natural width of the card's content
    #[arg(long)]
    pub content_width: f64,
    /// Further scroll offsets to replay through a mounted card
    #[arg(long = "scroll-to", allow_negative_numbers = true, num_args = 1..)]
    pub scroll_to: Vec<f64>,
}

/// A card with fixed geometry inside a container whose scroll offset moves.
struct ReplayCard {
    scroll_left: Rc<Cell<f64>>,
    viewport_width: f64,
    card: Rect,
    content_width: f64,
}

impl CardGeometry for ReplayCard {
    fn viewport(&self) -> Option<Rect> {
        Some(Rect::new(self.scroll_left.get(), self.viewport_width))
    }

    fn card(&self) -> Option<Rect> {
        Some(self.card)
    }

    fn content_width(&self) -> Option<f64> {
        Some(self.content_width)
    }
}

/// Print the content offset for one card. With `--scroll-to`, also print the
/// offset published after each replayed scroll.
pub fn translate(config: &TimelaneConfig, args: &TranslateArgs) {
    let card = Rect::new(args.card_left, args.card_width);
    let value = translate_x(
        Some(Rect::new(args.viewport_left, args.viewport_width)),
        Some(card),
        Some(args.content_width),
    );
    println!("{value}");

    if args.scroll_to.is_empty() {
        return;
    }

    let events = ViewportEvents::new();
    let scroll_left = Rc::new(Cell::new(args.viewport_left));
    let geometry = ReplayCard {
        scroll_left: Rc::clone(&scroll_left),
        viewport_width: args.viewport_width,
        card,
        content_width: args.content_width,
    };
    let sticky =
        StickyContent::mount_with_config(&events, ScrollSource::Window, geometry, &config.viewport);
    for &left in &args.scroll_to {
        scroll_left.set(left);
        events.dispatch(ViewportEvent::Scroll(ScrollSource::Window));
        println!("{left}\t{}", sticky.translate_x());
    }
    sticky.unmount();
}
