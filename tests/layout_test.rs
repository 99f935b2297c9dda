mod helpers;

use helpers::{date, hour, max_overlap, note, overlaps, random_items, Rng};
use timelane::timeline::{
    Item, ItemKind, LayoutEngine, LayoutMode, LayoutOptions, TimeUnit, TimeWindow, ZoomState,
};

fn day_zoom() -> ZoomState {
    ZoomState::new(TimeUnit::Day, 40)
}

#[test]
fn clips_long_item_to_window() {
    let window = TimeWindow::new(date(2024, 1, 15), date(2024, 1, 20)).unwrap();
    let goal = Item::new("g", ItemKind::Goal, date(2024, 1, 1), date(2024, 2, 1));

    let layout = LayoutEngine::default().layout(&window, day_zoom(), &[goal]);

    let placed = &layout.items[0];
    assert_eq!(placed.effective_start, date(2024, 1, 15));
    assert_eq!(placed.effective_end, date(2024, 1, 20));
    assert_eq!(placed.x, 0);
    assert_eq!(placed.calculated_width, 5 * 40);
    // Unclipped bounds travel with the item untouched.
    assert_eq!(placed.item.start, date(2024, 1, 1));
}

#[test]
fn identical_inputs_give_identical_layouts() {
    let window = TimeWindow::new(hour(0), hour(400)).unwrap();
    let mut rng = Rng::new(5);
    let mut items = random_items(&mut rng, 50);
    for (i, item) in items.iter_mut().enumerate() {
        item.kind = ItemKind::ALL[i % ItemKind::ALL.len()];
    }
    let engine = LayoutEngine::default();

    let first = engine.layout(&window, day_zoom(), &items);
    let second = engine.layout(&window, day_zoom(), &items);
    assert_eq!(first, second);
}

#[test]
fn output_follows_packing_order() {
    let window = TimeWindow::new(hour(0), hour(100)).unwrap();
    let items = vec![
        note("late", 20, 30),
        note("early-long", 0, 50),
        note("early-short", 0, 5),
    ];
    let layout = LayoutEngine::default().layout(&window, day_zoom(), &items);
    let ids: Vec<_> = layout.items.iter().map(|p| p.item.id.as_str()).collect();
    assert_eq!(ids, vec!["early-short", "early-long", "late"]);
}

#[test]
fn groups_pack_independently() {
    let window = TimeWindow::new(hour(0), hour(100)).unwrap();
    let options = LayoutOptions {
        mode: LayoutMode::Preassigned,
        ..LayoutOptions::default()
    };
    let items = vec![
        note("a", 0, 10).with_block_offset(0),
        note("b", 0, 10).with_block_offset(1),
        note("c", 0, 10).with_block_offset(1),
    ];
    let layout = LayoutEngine::new(options).layout(&window, day_zoom(), &items);

    let rows: Vec<_> = layout.items.iter().map(|p| (p.item.id.as_str(), p.y)).collect();
    assert_eq!(rows, vec![("a", 0), ("b", 0), ("c", 1)]);
    assert_eq!(layout.bands[1].first_row, 2);
    assert_eq!(layout.bands[1].row_count, 2);
}

#[test]
fn clipped_rows_satisfy_packing_invariants() {
    let window = TimeWindow::new(hour(50), hour(200)).unwrap();
    let options = LayoutOptions {
        mode: LayoutMode::Merge,
        ..LayoutOptions::default()
    };
    let mut rng = Rng::new(11);
    for _ in 0..30 {
        let items = random_items(&mut rng, 40);
        let layout = LayoutEngine::new(options).layout(&window, day_zoom(), &items);

        let spans: Vec<_> = layout
            .items
            .iter()
            .map(|p| (p.effective_start, p.effective_end))
            .collect();
        for a in 0..spans.len() {
            for b in (a + 1)..spans.len() {
                if layout.items[a].y == layout.items[b].y {
                    assert!(!overlaps(spans[a], spans[b]));
                }
            }
        }
        let rows = layout.bands.first().map(|b| b.row_count).unwrap_or(0);
        assert_eq!(rows, max_overlap(&spans));
    }
}

#[test]
fn headers_span_window_with_labels() {
    let window = TimeWindow::new(date(2024, 1, 1), date(2024, 4, 1)).unwrap();
    let zoom = ZoomState::new(TimeUnit::Month, 60);
    let layout = LayoutEngine::default().layout(&window, zoom, &[]);

    let spans: Vec<_> = layout.lanes.iter().map(|l| l.span_label.as_str()).collect();
    assert_eq!(spans, vec!["Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024"]);
    assert_eq!(layout.total_width, 4 * 60);
}

#[test]
fn month_offsets_follow_calendar() {
    let window = TimeWindow::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    let zoom = ZoomState::new(TimeUnit::Month, 40);
    let items = vec![Item::new("m", ItemKind::Goal, date(2024, 3, 1), date(2024, 5, 1))];
    let layout = LayoutEngine::default().layout(&window, zoom, &items);

    assert_eq!(layout.items[0].x, 80);
    assert_eq!(layout.items[0].calculated_width, 80);
}

#[test]
fn inverted_item_is_laid_out_as_point() {
    let window = TimeWindow::new(hour(0), hour(48)).unwrap();
    let mut item = note("flip", 10, 12).with_min_width(33);
    item.end = hour(2);
    let layout = LayoutEngine::default().layout(&window, day_zoom(), &[item]);

    let placed = &layout.items[0];
    assert_eq!(placed.effective_start, hour(10));
    assert_eq!(placed.effective_end, hour(10));
    assert_eq!(placed.calculated_width, 33);
    assert_eq!(placed.item.start, hour(10));
    assert_eq!(placed.item.end, hour(10));
}
