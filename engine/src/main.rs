//! Matching engine entrypoint: binds a TCP listener and spawns one worker
//! thread per accepted connection. No async runtime — suspension is via
//! blocking reads and lock acquisition only.

use std::net::TcpListener;
use std::sync::Arc;

use clap::Parser;
use orderbook::MonotonicClock;

use engine::frontend::Engine;
use engine::sink::JsonLinesSink;
use engine::wire::LineCodec;

/// A matching engine that accepts line-protocol TCP connections.
#[derive(Parser, Debug)]
#[command(name = "engine")]
struct Args {
    /// Address to bind the listening socket to, e.g. "0.0.0.0:7878".
    bind_addr: String,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Err(err) = run(&args.bind_addr) {
        tracing::error!(%err, "engine exited with an error");
        std::process::exit(1);
    }
}

fn run(bind_addr: &str) -> Result<(), BindError> {
    let listener = TcpListener::bind(bind_addr).map_err(|source| BindError { addr: bind_addr.to_string(), source })?;
    tracing::info!(%bind_addr, "engine listening");

    let clock = Arc::new(MonotonicClock::new());
    let sink = Arc::new(JsonLinesSink::new(std::io::stdout()));
    let engine = Engine::new(clock, sink);

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "failed to accept connection");
                continue;
            }
        };
        tracing::info!(peer = ?stream.peer_addr().ok(), "accepted connection");

        match LineCodec::new(stream) {
            Ok(conn) => engine.accept(conn),
            Err(e) => tracing::warn!(error = %e, "failed to wrap accepted stream"),
        }
    }

    Ok(())
}

#[derive(Debug)]
struct BindError {
    addr: String,
    source: std::io::Error,
}

impl std::fmt::Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to bind {}: {}", self.addr, self.source)
    }
}

impl std::error::Error for BindError {}
