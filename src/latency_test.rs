//! Performance testing suite for the order book.
//!
//! Measures latency and throughput under various scenarios:
//! - Market data access, order submission, matching, cancellation
//! - Sustained throughput testing with mixed workloads
//! - Statistical analysis with multiple iterations

use orderbook::{Clock, EventSink, MonotonicClock, NewOrder, OrderBook, OrderId};
use std::time::Instant;

/// A sink that discards every event; latency tests care about the book's
/// own cost, not serialization cost.
struct NullSink;

impl EventSink for NullSink {
    fn added(&self, _order_id: OrderId, _instrument: &str, _price: u32, _count: u32, _is_sell: bool, _ts: u64) {}
    fn executed(&self, _resting_id: OrderId, _incoming_id: OrderId, _exec_id: u32, _price: u32, _count: u32, _ts: u64) {}
    fn deleted(&self, _order_id: OrderId, _accepted: bool, _ts: u64) {}
}

/// Runs complete latency test suite.
pub fn run_latency_tests() {
    println!("HFT Ledger - Real-time Latency Tests\n");

    test_market_data_latency();
    test_order_submission_latency();
    test_order_matching_latency();
    test_cancellation_latency();
}

fn order(order_id: OrderId, price: u32, count: u32) -> NewOrder {
    NewOrder { order_id, price, count }
}

/// Tests best bid/ask lookup performance.
fn test_market_data_latency() {
    println!("Market Data Latency Test");

    let clock = MonotonicClock::new();
    let sink = NullSink;
    let mut ob = OrderBook::new("AAPL");

    for i in 0..100u32 {
        ob.submit_sell(order(i, 10_000 + i, 100), &clock, &sink);
        ob.submit_buy(order(i + 100, 9_999 - i, 100), &clock, &sink);
    }

    let iterations = 1_000_000;

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(ob.best_bid());
    }
    let bid_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..iterations {
        std::hint::black_box(ob.best_ask());
    }
    let ask_duration = start.elapsed();

    println!("  Best bid lookup: {:.2} ns/call", bid_duration.as_nanos() as f64 / iterations as f64);
    println!("  Best ask lookup: {:.2} ns/call", ask_duration.as_nanos() as f64 / iterations as f64);
    println!(
        "  Combined latency: {:.2} ns\n",
        (bid_duration.as_nanos() + ask_duration.as_nanos()) as f64 / iterations as f64
    );
}

/// Tests order submission latency for non-crossing orders.
fn test_order_submission_latency() {
    println!("Order Submission Latency Test");

    let clock = MonotonicClock::new();
    let sink = NullSink;
    let iterations = 10_000u32;
    let mut total_time = 0u128;

    for i in 0..iterations {
        let mut ob = OrderBook::new("AAPL");
        let start = Instant::now();
        ob.submit_buy(order(i, 10_000 - i, 100), &clock, &sink);
        total_time += start.elapsed().as_nanos();
    }

    let avg_latency = total_time as f64 / iterations as f64;
    println!("  Average order submission: {:.2} ns", avg_latency);
    println!("  Throughput: {:.0} orders/second\n", 1_000_000_000.0 / avg_latency);
}

/// Tests order matching latency for crossing orders.
fn test_order_matching_latency() {
    println!("Order Matching Latency Test");

    let clock = MonotonicClock::new();
    let sink = NullSink;
    let iterations = 1_000u32;
    let mut total_setup_time = 0u128;
    let mut total_match_time = 0u128;

    for i in 0..iterations {
        let setup_start = Instant::now();
        let mut ob = OrderBook::new("AAPL");

        for j in 0..10u32 {
            ob.submit_sell(order(j, 10_000 + j, 100), &clock, &sink);
        }
        total_setup_time += setup_start.elapsed().as_nanos();

        let crossing_order = order(1_000 + i, 10_005, 500);

        let match_start = Instant::now();
        let affected = ob.submit_buy(crossing_order, &clock, &sink);
        total_match_time += match_start.elapsed().as_nanos();

        std::hint::black_box(affected);
    }

    println!("  Setup (10 resting orders): {:.2} ns", total_setup_time as f64 / iterations as f64);
    println!("  Crossing order execution: {:.2} ns", total_match_time as f64 / iterations as f64);
    println!(
        "  Total order-to-trade: {:.2} ns\n",
        (total_setup_time + total_match_time) as f64 / iterations as f64
    );
}

/// Measures cancel latency against the order-id-indexed book.
fn test_cancellation_latency() {
    println!("Cancellation Latency Test");

    let clock = MonotonicClock::new();
    let sink = NullSink;
    let iterations = 1_000u32;
    let orders_per_test = 100u32;

    let mut total_time = 0u128;
    for i in 0..iterations {
        let mut ob = OrderBook::new("AAPL");
        let mut order_ids = Vec::new();

        for j in 0..orders_per_test {
            let id = i * orders_per_test + j;
            ob.submit_buy(order(id, 10_000, 100), &clock, &sink);
            order_ids.push(id);
        }

        let start = Instant::now();
        for (idx, &id) in order_ids.iter().enumerate() {
            if idx % 2 == 0 {
                ob.cancel(id, &clock, &sink);
            }
        }
        total_time += start.elapsed().as_nanos();
    }

    println!(
        "  Indexed cancel: {:.2} ns per order\n",
        total_time as f64 / (iterations * orders_per_test / 2) as f64
    );
}

/// Runs sustained throughput test with mixed workload for `duration`.
fn run_throughput_test_for(duration: std::time::Duration) {
    let clock = MonotonicClock::new();
    let sink = NullSink;
    let mut ob = OrderBook::new("AAPL");
    let mut order_id = 1u32;
    let mut orders_processed = 0u64;
    let mut matches_observed = 0u64;

    let start_time = Instant::now();

    while start_time.elapsed() < duration {
        match order_id % 4 {
            0 => {
                ob.submit_buy(order(order_id, 9_999 - (order_id % 100), 100), &clock, &sink);
            }
            1 => {
                ob.submit_sell(order(order_id, 10_001 + (order_id % 100), 100), &clock, &sink);
            }
            2 => {
                let affected = ob.submit_buy(order(order_id, 10_001, 50), &clock, &sink);
                matches_observed += affected.len() as u64;
            }
            3 => {
                let affected = ob.submit_sell(order(order_id, 9_999, 50), &clock, &sink);
                matches_observed += affected.len() as u64;
            }
            _ => unreachable!(),
        }

        order_id = order_id.wrapping_add(1);
        orders_processed += 1;

        if order_id % 100 == 0 {
            std::hint::black_box(ob.best_bid());
            std::hint::black_box(ob.best_ask());
        }
    }

    let elapsed = start_time.elapsed();
    let orders_per_sec = orders_processed as f64 / elapsed.as_secs_f64();

    println!("  Duration: {:.1} seconds", elapsed.as_secs_f64());
    println!("  Orders processed: {}", orders_processed);
    println!("  Ids affected by matches: {}", matches_observed);
    println!("  Order throughput: {:.0} orders/second", orders_per_sec);
    println!("  Final book state: bid={:?}, ask={:?}", ob.best_bid(), ob.best_ask());
}

/// Runs a 10-second sustained throughput test with mixed workload.
pub fn run_throughput_test() {
    println!("Sustained Throughput Test (10 seconds)");
    run_throughput_test_for(std::time::Duration::from_secs(10));
}

/// Runs a 1-minute sustained throughput test with mixed workload.
pub fn run_throughput_test_1min() {
    println!("Sustained Throughput Test (60 seconds)");
    run_throughput_test_for(std::time::Duration::from_secs(60));
}
