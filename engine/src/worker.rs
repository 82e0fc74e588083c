//! Connection worker (C5): one per-connection loop, dispatching commands
//! against the shared registry and applying the cross-index consistency
//! rule after every submit.

use std::sync::Arc;

use orderbook::{Clock, EventSink};

use crate::registry::Registry;
use crate::wire::{Command, Connection, ReadResult};

pub fn run<C: Connection>(mut conn: C, registry: &Registry, clock: &dyn Clock, sink: &dyn EventSink) {
    loop {
        match conn.read_command() {
            ReadResult::EndOfFile => {
                tracing::info!("connection closed");
                return;
            }
            ReadResult::Error(reason) => {
                tracing::warn!(%reason, "transport error, terminating worker");
                return;
            }
            ReadResult::Success(cmd) => {
                tracing::debug!(?cmd, "dispatching command");
                dispatch(cmd, registry, clock, sink);
            }
        }
    }
}

fn dispatch(cmd: Command, registry: &Registry, clock: &dyn Clock, sink: &dyn EventSink) {
    match cmd {
        Command::Cancel { order_id } => {
            // Removal from the id index happens before the book operation,
            // so a concurrent matcher on the same book cannot re-insert
            // this id into the index after the fact.
            match registry.index_lookup_and_remove(order_id) {
                Some(book) => {
                    let mut book = book.lock().unwrap();
                    book.cancel(order_id, clock, sink);
                }
                None => {
                    sink.deleted(order_id, false, clock.now());
                }
            }
        }
        Command::Buy { order_id, instrument, price, count } => {
            submit(registry, &instrument, order_id, price, count, clock, sink, true);
        }
        Command::Sell { order_id, instrument, price, count } => {
            submit(registry, &instrument, order_id, price, count, clock, sink, false);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn submit(
    registry: &Registry,
    instrument: &str,
    order_id: orderbook::OrderId,
    price: u32,
    count: u32,
    clock: &dyn Clock,
    sink: &dyn EventSink,
    is_buy: bool,
) {
    let book = registry.get_or_create(instrument);
    let affected = {
        let mut book = book.lock().unwrap();
        let cmd = orderbook::NewOrder { order_id, price, count };
        if is_buy {
            book.submit_buy(cmd, clock, sink)
        } else {
            book.submit_sell(cmd, clock, sink)
        }
    };

    for id in affected {
        if id == order_id {
            registry.index_insert(id, Arc::clone(&book));
        } else {
            registry.index_remove(id);
        }
    }
}
