//! Core types and primitives for the game event feed.
//!
//! This crate defines the foundational model shared by the feed decoder and
//! any presentation layer:
//!
//! - [`Schedule`] — the five-variant descriptor a decoded schedule segment
//!   produces (monthly days, time windows, date periods, weekly blocks,
//!   date blocks).
//! - [`format`] — pure, total formatting primitives for packed feed values
//!   (times, dates, weekday bitmasks, version integers).
//! - [`render`] — the deterministic projection of a descriptor into display
//!   lines, plus event labeling against a caller-supplied name table.
//! - [`validate_schedule`] — a non-failing field-range validator for data
//!   quality gating.
//!
//! Everything here is synchronous, allocation-light, and free of shared
//! state; all functions are safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use gamefeed_core::{Schedule, validate_schedule};
//! use gamefeed_core::types::TimeWindow;
//!
//! let schedule = Schedule::TimeWindows {
//!     windows: vec![TimeWindow::new(800, 1000)],
//! };
//!
//! assert_eq!(schedule.render(), "08:00~10:00");
//! assert!(validate_schedule(&schedule).is_empty());
//! ```

pub mod format;
pub mod render;
pub mod types;
mod validate;

pub use types::{
    DatePeriod, DayBlock, SEGMENT_SENTINEL, Schedule, TimeWindow, WeekdayBlock, is_event_id,
};
pub use validate::{ValidationError, validate_schedule};
