//! Book registry (C4): two independently guarded concurrent maps routing
//! symbols and order ids to the book that owns them.
//!
//! Each map is a sharded concurrent hash map (`DashMap`), not a single
//! `Mutex<HashMap<..>>` — unrelated instruments must never serialize
//! against each other through a shared lock.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use orderbook::{OrderBook, OrderId};

pub type BookHandle = Arc<Mutex<OrderBook>>;

#[derive(Default)]
pub struct Registry {
    symbol_index: DashMap<String, BookHandle>,
    id_index: DashMap<OrderId, BookHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the book for `instrument`, creating it if this is the first
    /// time the symbol has been referenced.
    pub fn get_or_create(&self, instrument: &str) -> BookHandle {
        self.symbol_index
            .entry(instrument.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(OrderBook::new(instrument))))
            .clone()
    }

    pub fn index_insert(&self, order_id: OrderId, book: BookHandle) {
        self.id_index.insert(order_id, book);
    }

    pub fn index_remove(&self, order_id: OrderId) {
        self.id_index.remove(&order_id);
    }

    pub fn index_lookup(&self, order_id: OrderId) -> Option<BookHandle> {
        self.id_index.get(&order_id).map(|entry| entry.value().clone())
    }

    /// Single critical section: removes the entry and returns its book, if
    /// present. Used by the cancel path so two racing cancels for the same
    /// id can never both observe it as present.
    pub fn index_lookup_and_remove(&self, order_id: OrderId) -> Option<BookHandle> {
        self.id_index.remove(&order_id).map(|(_, book)| book)
    }
}
