#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use timelane::timeline::{Item, ItemKind, Timestamp};

/// Midnight UTC on the given date.
pub fn date(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// `hours` after 2024-01-01T00:00Z.
pub fn hour(hours: i64) -> Timestamp {
    date(2024, 1, 1) + Duration::hours(hours)
}

/// A note item spanning `[hour(start), hour(end))`.
pub fn note(id: &str, start: i64, end: i64) -> Item {
    Item::new(id, ItemKind::Note, hour(start), hour(end))
}

/// Deterministic xorshift generator so randomized cases are reproducible.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Value in `[lo, hi)`.
    pub fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next() % (hi - lo) as u64) as i64
    }
}

/// `count` notes scattered over about two weeks. Roughly one in six is a
/// zero-duration point.
pub fn random_items(rng: &mut Rng, count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let start = rng.range(0, 300);
            let len = if rng.range(0, 6) == 0 {
                0
            } else {
                rng.range(1, 48)
            };
            note(&format!("n{i}"), start, start + len)
        })
        .collect()
}

/// Whether `span` occupies `instant`. A span with `end <= start` is a point
/// occupying only its start.
pub fn occupies<K: Ord + Copy>(span: (K, K), instant: K) -> bool {
    let (start, end) = span;
    if end > start {
        start <= instant && instant < end
    } else {
        start == instant
    }
}

/// Largest number of spans and points occupying any single instant.
/// Brute force: the maximum is always reached at some span's start.
pub fn max_overlap<K: Ord + Copy>(spans: &[(K, K)]) -> usize {
    spans
        .iter()
        .map(|&(t, _)| spans.iter().filter(|&&span| occupies(span, t)).count())
        .max()
        .unwrap_or(0)
}

/// Whether two spans share any instant.
pub fn overlaps<K: Ord + Copy>(a: (K, K), b: (K, K)) -> bool {
    occupies(a, b.0) || occupies(b, a.0)
}
