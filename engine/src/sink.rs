//! Concrete `EventSink` (C2): one JSON line per event, written under a
//! single mutex so the "atomic w.r.t. other sink calls" contract is a
//! literal critical section around the underlying writer.

use std::io::Write;
use std::sync::Mutex;

use orderbook::{Event, EventSink, OrderId};

pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    fn write_event(&self, event: Event) {
        let mut guard = self.writer.lock().unwrap();
        if let Ok(line) = serde_json::to_string(&event) {
            let _ = writeln!(guard, "{line}");
        }
    }
}

impl<W: Write + Send> EventSink for JsonLinesSink<W> {
    fn added(&self, order_id: OrderId, instrument: &str, price: u32, count: u32, is_sell: bool, ts: u64) {
        self.write_event(Event::Added {
            order_id,
            instrument: instrument.to_string(),
            price,
            count,
            is_sell,
            ts,
        });
    }

    fn executed(&self, resting_id: OrderId, incoming_id: OrderId, exec_id: u32, price: u32, count: u32, ts: u64) {
        self.write_event(Event::Executed { resting_id, incoming_id, exec_id, price, count, ts });
    }

    fn deleted(&self, order_id: OrderId, accepted: bool, ts: u64) {
        self.write_event(Event::Deleted { order_id, accepted, ts });
    }
}
