//! Emitted events (C2) and the sink trait that serializes them.

use crate::types::OrderId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Added {
        order_id: OrderId,
        instrument: String,
        price: u32,
        count: u32,
        is_sell: bool,
        ts: u64,
    },
    Executed {
        resting_id: OrderId,
        incoming_id: OrderId,
        exec_id: u32,
        price: u32,
        count: u32,
        ts: u64,
    },
    Deleted {
        order_id: OrderId,
        accepted: bool,
        ts: u64,
    },
}

/// A thin ordered writer: no logic, just serialization in call order.
///
/// Implementations must make each call atomic with respect to the others —
/// two threads calling into the same sink concurrently must not interleave
/// a single event's output.
pub trait EventSink: Send + Sync {
    fn added(&self, order_id: OrderId, instrument: &str, price: u32, count: u32, is_sell: bool, ts: u64);
    fn executed(&self, resting_id: OrderId, incoming_id: OrderId, exec_id: u32, price: u32, count: u32, ts: u64);
    fn deleted(&self, order_id: OrderId, accepted: bool, ts: u64);
}

/// Test-oriented sink that records every event into a shared `Vec` in
/// emission order, for asserting against §8 scenarios directly.
#[derive(Default)]
pub struct RecordingSink {
    events: std::sync::Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn added(&self, order_id: OrderId, instrument: &str, price: u32, count: u32, is_sell: bool, ts: u64) {
        self.events.lock().unwrap().push(Event::Added {
            order_id,
            instrument: instrument.to_string(),
            price,
            count,
            is_sell,
            ts,
        });
    }

    fn executed(&self, resting_id: OrderId, incoming_id: OrderId, exec_id: u32, price: u32, count: u32, ts: u64) {
        self.events.lock().unwrap().push(Event::Executed {
            resting_id,
            incoming_id,
            exec_id,
            price,
            count,
            ts,
        });
    }

    fn deleted(&self, order_id: OrderId, accepted: bool, ts: u64) {
        self.events.lock().unwrap().push(Event::Deleted {
            order_id,
            accepted,
            ts,
        });
    }
}
