//! Matching engine performance lab.
//!
//! Runs the `orderbook` crate's latency/throughput suite followed by a
//! basic trading demo showing order placement, matching, and cancel,
//! directly against `OrderBook` (no network, no registry) for a quick
//! smoke check of the core crate.

use orderbook::{Event, MonotonicClock, NewOrder, OrderBook, RecordingSink};

mod latency_test;

fn main() {
    tracing_subscriber::fmt::init();
    println!("=== HFT Ledger Performance Lab ===");

    latency_test::run_latency_tests();
    latency_test::run_throughput_test();

    println!("\n=== 1-Minute Sustained Throughput Test ===");
    latency_test::run_throughput_test_1min();

    println!("\n=== Basic Demo ===");
    run_basic_demo();
}

/// Demonstrates basic order book functionality with trade execution.
fn run_basic_demo() {
    let clock = MonotonicClock::new();
    let sink = RecordingSink::new();
    let mut ob = OrderBook::new("AAPL");

    println!("HFT Ledger - Order Book Demo");

    let ask = NewOrder { order_id: 1, price: 15_000, count: 100 };
    println!("Submitting ask order: {} @ {}", ask.count, ask.price);
    ob.submit_sell(ask, &clock, &sink);

    let bid = NewOrder { order_id: 2, price: 14_950, count: 50 };
    println!("Submitting bid order: {} @ {}", bid.count, bid.price);
    ob.submit_buy(bid, &clock, &sink);

    println!("Best bid: {:?}", ob.best_bid());
    println!("Best ask: {:?}", ob.best_ask());

    let crossing_bid = NewOrder { order_id: 3, price: 15_000, count: 75 };
    println!("Submitting crossing bid: {} @ {}", crossing_bid.count, crossing_bid.price);
    ob.submit_buy(crossing_bid, &clock, &sink);

    let fills: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::Executed { .. }))
        .collect();
    println!("Trades executed: {}", fills.len());
    for fill in fills {
        if let Event::Executed { resting_id, incoming_id, price, count, .. } = fill {
            println!("  Trade: {count} shares @ {price} ticks (resting={resting_id}, incoming={incoming_id})");
        }
    }

    println!("Final best bid: {:?}", ob.best_bid());
    println!("Final best ask: {:?}", ob.best_ask());
}
