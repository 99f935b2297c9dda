//! Timeline layout and viewport engine.
//!
//! Turns time-ranged items (goals, behavior records, notes) into on-screen
//! geometry under an adjustable zoom, and keeps a card's inner content in view
//! while its container scrolls. Everything here is pure, synchronous, and
//! deterministic: the same inputs always produce the same geometry.
//!
//! | Stage | What it decides |
//! |-------|-----------------|
//! | **Time axis** | Pixel offset and width of an instant or span at a zoom state |
//! | **Zoom** | Lane width in 5px steps, switching unit at the 10px / 80px bounds |
//! | **Lanes** | Minimal rows so no two overlapping items share one |
//! | **Layout** | Clipping, grouping, packing, and header lanes for a window |
//! | **Viewport** | Horizontal offset keeping card content inside the visible region |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`error`] — The library error type
//! - [`timeline`] — Time axis, zoom controller, lane allocator, and layout engine
//! - [`viewport`] — Sticky content translation and scroll/resize subscriptions

pub mod config;
pub mod error;
pub mod timeline;
pub mod viewport;
