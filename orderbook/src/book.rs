//! Per-instrument order book: resting sides, matching, and cancel (C3).
//!
//! Each side is a single `BTreeMap` keyed by `(price priority, timestamp)`,
//! plus an `order_id -> key` index for O(log n) cancel. Because timestamps
//! are globally unique (the clock guarantees it), one key maps to exactly
//! one resting order — there is no need for the teacher's per-price-level
//! FIFO queue, since `(price, timestamp)` alone already total-orders the
//! side correctly.

use std::collections::{BTreeMap, HashMap};

use crate::clock::Clock;
use crate::event::EventSink;
use crate::types::{NewOrder, OrderId, RestingOrder};

/// Ordering key for one side of the book. `Ord` encodes price-time
/// priority for that side: best price first, earliest timestamp breaks
/// ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BookKey {
    price: u32,
    timestamp: u64,
}

/// Wraps `BookKey` so buys and sells can share the generic `BTreeMap`
/// machinery below while ordering in opposite price directions.
trait PriceOrder {
    fn cmp_key(a: &BookKey, b: &BookKey) -> std::cmp::Ordering;
}

struct BuyOrdering;
impl PriceOrder for BuyOrdering {
    fn cmp_key(a: &BookKey, b: &BookKey) -> std::cmp::Ordering {
        // Highest price first, then earliest timestamp first.
        b.price.cmp(&a.price).then(a.timestamp.cmp(&b.timestamp))
    }
}

struct SellOrdering;
impl PriceOrder for SellOrdering {
    fn cmp_key(a: &BookKey, b: &BookKey) -> std::cmp::Ordering {
        // Lowest price first, then earliest timestamp first.
        a.price.cmp(&b.price).then(a.timestamp.cmp(&b.timestamp))
    }
}

/// A `BTreeMap` wrapper ordered by `O::cmp_key`, with an order-id index for
/// direct lookup. The sort key is a newtype so its `Ord` impl can encode
/// the side-specific price direction without duplicating the map logic.
struct BookSide<O: PriceOrder> {
    entries: BTreeMap<SideKey<O>, RestingOrder>,
    index: HashMap<OrderId, BookKey>,
}

struct SideKey<O: PriceOrder>(BookKey, std::marker::PhantomData<O>);

impl<O: PriceOrder> Clone for SideKey<O> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<O: PriceOrder> Copy for SideKey<O> {}

impl<O: PriceOrder> PartialEq for SideKey<O> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<O: PriceOrder> Eq for SideKey<O> {}
impl<O: PriceOrder> PartialOrd for SideKey<O> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<O: PriceOrder> Ord for SideKey<O> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        O::cmp_key(&self.0, &other.0)
    }
}

impl<O: PriceOrder> BookSide<O> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    fn insert(&mut self, order: RestingOrder) {
        let key = BookKey {
            price: order.price,
            timestamp: order.timestamp,
        };
        self.index.insert(order.order_id, key);
        self.entries.insert(SideKey(key, std::marker::PhantomData), order);
    }

    /// The best resting order, if any — the head of this side's priority.
    fn best(&self) -> Option<&RestingOrder> {
        self.entries.values().next()
    }

    fn best_mut(&mut self) -> Option<&mut RestingOrder> {
        self.entries.values_mut().next()
    }

    /// Removes the current best entry outright; caller reinserts if it
    /// still has remaining count.
    fn pop_best(&mut self) -> Option<RestingOrder> {
        let key = *self.entries.keys().next()?;
        let order = self.entries.remove(&key)?;
        self.index.remove(&order.order_id);
        Some(order)
    }

    fn cancel(&mut self, order_id: OrderId) -> bool {
        match self.index.remove(&order_id) {
            Some(key) => {
                self.entries.remove(&SideKey(key, std::marker::PhantomData));
                true
            }
            None => false,
        }
    }
}

/// Per-instrument order book. Callers are responsible for serializing all
/// access (the spec's "mutual-exclusion guard"); this type holds no lock
/// of its own so registries can choose how to share it (e.g. `Mutex<OrderBook>`).
pub struct OrderBook {
    instrument: String,
    bids: BookSide<BuyOrdering>,
    asks: BookSide<SellOrdering>,
}

impl OrderBook {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            bids: BookSide::new(),
            asks: BookSide::new(),
        }
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn best_bid(&self) -> Option<u32> {
        self.bids.best().map(|o| o.price)
    }

    pub fn best_ask(&self) -> Option<u32> {
        self.asks.best().map(|o| o.price)
    }

    /// Matches an incoming buy against resting sells, resting any
    /// remainder. Returns ids whose index entry must be updated: the
    /// incoming id if it came to rest, plus any resting id fully consumed.
    pub fn submit_buy(&mut self, mut cmd: NewOrder, clock: &dyn Clock, sink: &dyn EventSink) -> Vec<OrderId> {
        let mut affected = Vec::new();

        while cmd.count > 0 {
            let crosses = matches!(self.asks.best(), Some(top) if top.price <= cmd.price);
            if !crosses {
                break;
            }
            let resting = self.asks.best_mut().expect("crosses implies Some");
            let traded = resting.count.min(cmd.count);
            resting.exec_id += 1;
            sink.executed(resting.order_id, cmd.order_id, resting.exec_id, resting.price, traded, clock.now());

            resting.count -= traded;
            cmd.count -= traded;

            if resting.count == 0 {
                let filled = self.asks.pop_best().expect("just matched against it");
                affected.push(filled.order_id);
            }
        }

        if cmd.count > 0 {
            let ts = clock.now();
            self.bids.insert(RestingOrder {
                order_id: cmd.order_id,
                price: cmd.price,
                count: cmd.count,
                exec_id: 0,
                timestamp: ts,
            });
            sink.added(cmd.order_id, &self.instrument, cmd.price, cmd.count, false, ts);
            affected.push(cmd.order_id);
        }

        affected
    }

    /// Symmetric to `submit_buy` against `bids`.
    pub fn submit_sell(&mut self, mut cmd: NewOrder, clock: &dyn Clock, sink: &dyn EventSink) -> Vec<OrderId> {
        let mut affected = Vec::new();

        while cmd.count > 0 {
            let crosses = matches!(self.bids.best(), Some(top) if top.price >= cmd.price);
            if !crosses {
                break;
            }
            let resting = self.bids.best_mut().expect("crosses implies Some");
            let traded = resting.count.min(cmd.count);
            resting.exec_id += 1;
            sink.executed(resting.order_id, cmd.order_id, resting.exec_id, resting.price, traded, clock.now());

            resting.count -= traded;
            cmd.count -= traded;

            if resting.count == 0 {
                let filled = self.bids.pop_best().expect("just matched against it");
                affected.push(filled.order_id);
            }
        }

        if cmd.count > 0 {
            let ts = clock.now();
            self.asks.insert(RestingOrder {
                order_id: cmd.order_id,
                price: cmd.price,
                count: cmd.count,
                exec_id: 0,
                timestamp: ts,
            });
            sink.added(cmd.order_id, &self.instrument, cmd.price, cmd.count, true, ts);
            affected.push(cmd.order_id);
        }

        affected
    }

    /// Removes `order_id` from whichever side holds it and emits the
    /// matching `Deleted` event. Returns whether it was found resting.
    pub fn cancel(&mut self, order_id: OrderId, clock: &dyn Clock, sink: &dyn EventSink) -> bool {
        let found = self.bids.cancel(order_id) || self.asks.cancel(order_id);
        sink.deleted(order_id, found, clock.now());
        found
    }
}
