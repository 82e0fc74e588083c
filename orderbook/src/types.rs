//! Core wire-agnostic types shared by the order book and its callers.

/// Client-assigned, globally unique order identifier.
pub type OrderId = u32;

/// A new order as handed to the book. Instrument routing happens one
/// level up, in the registry — the book itself only ever sees orders for
/// the single instrument it represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub price: u32,
    pub count: u32,
}

/// An order resting in one side of the book, awaiting a counterparty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub price: u32,
    pub count: u32,
    pub exec_id: u32,
    pub timestamp: u64,
}
