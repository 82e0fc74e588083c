//! A developer tool for manually driving a running engine over its line
//! protocol from a terminal. Not part of the core — removing it would not
//! change engine behavior.

use std::io::Write;
use std::net::TcpStream;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ordermatch-cli")]
#[command(about = "Manual test client for a running matching engine")]
struct Cli {
    #[arg(short, long, default_value = "127.0.0.1:7878")]
    server: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a resting or crossing buy order.
    Buy { order_id: u32, instrument: String, price: u32, count: u32 },
    /// Submit a resting or crossing sell order.
    Sell { order_id: u32, instrument: String, price: u32, count: u32 },
    /// Cancel a previously submitted order by id.
    Cancel { order_id: u32 },
    /// Replay a small scripted scenario against the server.
    Demo { instrument: String },
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let mut writer = TcpStream::connect(&cli.server)?;

    match cli.command {
        Commands::Buy { order_id, instrument, price, count } => {
            send_line(&mut writer, &format!("BUY {order_id} {instrument} {price} {count}"))?;
        }
        Commands::Sell { order_id, instrument, price, count } => {
            send_line(&mut writer, &format!("SELL {order_id} {instrument} {price} {count}"))?;
        }
        Commands::Cancel { order_id } => {
            send_line(&mut writer, &format!("CANCEL {order_id}"))?;
        }
        Commands::Demo { instrument } => {
            send_line(&mut writer, &format!("SELL 1 {instrument} 100 50"))?;
            send_line(&mut writer, &format!("BUY 2 {instrument} 100 50"))?;
            send_line(&mut writer, &format!("BUY 3 {instrument} 99 10"))?;
            send_line(&mut writer, "CANCEL 3")?;
        }
    }

    writer.flush()?;
    println!("sent; watch the engine's event stream for the outcome");
    Ok(())
}

fn send_line(writer: &mut TcpStream, line: &str) -> std::io::Result<()> {
    println!("> {line}");
    writeln!(writer, "{line}")
}
