//! Line-oriented wire codec (C7, ambient). The core only depends on the
//! `Connection` trait; `LineCodec` is one concrete implementation of it.

use std::io::{BufRead, BufReader};
use std::net::TcpStream;

use orderbook::OrderId;

/// A command parsed off the wire, ready for the worker to dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Buy { order_id: OrderId, instrument: String, price: u32, count: u32 },
    Sell { order_id: OrderId, instrument: String, price: u32, count: u32 },
    Cancel { order_id: OrderId },
}

/// Outcome of one `read_command` call.
pub enum ReadResult {
    Success(Command),
    EndOfFile,
    Error(String),
}

/// Abstract boundary between the core and whatever transport feeds it.
pub trait Connection {
    fn read_command(&mut self) -> ReadResult;
}

/// Parses `BUY/SELL/CANCEL` lines off a buffered `TcpStream`, one command
/// per newline-terminated line.
pub struct LineCodec {
    reader: BufReader<TcpStream>,
}

impl LineCodec {
    pub fn new(stream: TcpStream) -> std::io::Result<Self> {
        Ok(Self { reader: BufReader::new(stream) })
    }
}

impl Connection for LineCodec {
    fn read_command(&mut self) -> ReadResult {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => ReadResult::EndOfFile,
            Ok(_) => match parse_line(line.trim()) {
                Some(cmd) => ReadResult::Success(cmd),
                None => ReadResult::Error(format!("malformed command: {}", line.trim())),
            },
            Err(e) => ReadResult::Error(e.to_string()),
        }
    }
}

fn parse_line(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "BUY" | "SELL" => {
            let order_id: OrderId = parts.next()?.parse().ok()?;
            let instrument = parts.next()?.to_string();
            let price: u32 = parts.next()?.parse().ok()?;
            let count: u32 = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Some(if line.starts_with("BUY") {
                Command::Buy { order_id, instrument, price, count }
            } else {
                Command::Sell { order_id, instrument, price, count }
            })
        }
        "CANCEL" => {
            let order_id: OrderId = parts.next()?.parse().ok()?;
            if parts.next().is_some() {
                return None;
            }
            Some(Command::Cancel { order_id })
        }
        _ => None,
    }
}
