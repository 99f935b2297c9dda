mod helpers;

use helpers::Rng;
use std::cell::Cell;
use std::rc::Rc;
use timelane::viewport::{
    translate_x, CardGeometry, ContainerId, Rect, ScrollSource, StickyContent, ViewportEvent,
    ViewportEvents,
};

#[test]
fn zero_when_content_fits_and_card_is_in_view() {
    let viewport = Rect::new(0.0, 1200.0);
    let cases = [
        (0.0, 400.0, 400.0),
        (100.0, 1000.0, 250.0),
        (0.0, 1200.0, 10.0),
    ];
    for (left, width, content) in cases {
        let card = Rect::new(left, width);
        assert_eq!(translate_x(Some(viewport), Some(card), Some(content)), 0.0);
    }
}

#[test]
fn stays_within_bounds_under_arbitrary_scroll() {
    let mut rng = Rng::new(31);
    for _ in 0..2000 {
        let card = Rect::new(rng.range(-500, 3000) as f64, rng.range(0, 5000) as f64);
        let viewport = Rect::new(rng.range(-1000, 6000) as f64, rng.range(1, 1500) as f64);
        let content = rng.range(0, 2000) as f64;

        let value = translate_x(Some(viewport), Some(card), Some(content));
        assert!(value >= 0.0);
        assert!(value <= (card.width - content).max(0.0));
    }
}

struct Card {
    scroll_left: Rc<Cell<f64>>,
    viewport_width: Rc<Cell<f64>>,
    mounted: Rc<Cell<bool>>,
}

impl CardGeometry for Card {
    fn viewport(&self) -> Option<Rect> {
        Some(Rect::new(self.scroll_left.get(), self.viewport_width.get()))
    }

    fn card(&self) -> Option<Rect> {
        self.mounted.get().then(|| Rect::new(200.0, 4000.0))
    }

    fn content_width(&self) -> Option<f64> {
        Some(500.0)
    }
}

#[test]
fn sticky_content_tracks_its_container_only() {
    let events = ViewportEvents::new();
    let pane = ScrollSource::Container(ContainerId(3));
    let scroll_left = Rc::new(Cell::new(0.0));
    let viewport_width = Rc::new(Cell::new(800.0));
    let mounted = Rc::new(Cell::new(true));
    let card = Card {
        scroll_left: Rc::clone(&scroll_left),
        viewport_width: Rc::clone(&viewport_width),
        mounted: Rc::clone(&mounted),
    };
    let sticky = StickyContent::mount(&events, pane, card, 0.5);

    scroll_left.set(1000.0);
    events.dispatch(ViewportEvent::Scroll(ScrollSource::Window));
    assert_eq!(sticky.translate_x(), 0.0, "window scroll is not our container");

    events.dispatch(ViewportEvent::Scroll(pane));
    assert_eq!(sticky.translate_x(), 800.0);

    scroll_left.set(9000.0);
    events.dispatch(ViewportEvent::Resize);
    assert_eq!(sticky.translate_x(), 3500.0);

    // Card geometry disappears: fail open to zero.
    mounted.set(false);
    events.dispatch(ViewportEvent::Scroll(pane));
    assert_eq!(sticky.translate_x(), 0.0);
}

#[test]
fn teardown_releases_listener_even_on_panic() {
    let events = ViewportEvents::new();
    let hub = events.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let card = Card {
            scroll_left: Rc::new(Cell::new(0.0)),
            viewport_width: Rc::new(Cell::new(800.0)),
            mounted: Rc::new(Cell::new(true)),
        };
        let _sticky = StickyContent::mount(&hub, ScrollSource::Window, card, 0.5);
        assert_eq!(hub.listener_count(), 1);
        panic!("view torn down mid-computation");
    }));
    assert!(result.is_err());
    assert_eq!(events.listener_count(), 0);
}
