//! Per-instrument limit order book with price-time priority matching.
//!
//! Core features:
//! - Price-time priority matching (best price first, then earliest timestamp)
//! - Partial fills, immediate execution, and O(log n) cancel
//! - A strictly monotonic process-wide clock and an ordered event sink,
//!   so callers get a total order over everything the book emits

pub mod book;
pub mod clock;
pub mod event;
pub mod types;

pub use book::OrderBook;
pub use clock::{Clock, MonotonicClock};
pub use event::{Event, EventSink, RecordingSink};
pub use types::{NewOrder, OrderId, RestingOrder};
