//! kvsock CLI Client
//!
//! One-shot client: sends a single command line and prints the reply.
//!
//! ```text
//! kvsock-cli "SET name Rojalin"
//! kvsock-cli "GET name"
//! ```

use clap::Parser;
use kvsock::Client;

/// kvsock CLI
#[derive(Parser, Debug)]
#[command(name = "kvsock-cli")]
#[command(about = "CLI for the kvsock key-value store")]
#[command(version)]
struct Args {
    /// Unix socket path
    #[arg(short, long, default_value = "/tmp/kvstore.sock")]
    socket: String,

    /// Full command line to send, e.g. "SET name Rojalin" or "GET name"
    command: String,
}

fn main() {
    let args = Args::parse();

    let client = Client::new(&args.socket);
    match client.send(&args.command) {
        Ok(reply) => println!("Server reply: {reply}"),
        Err(e) => {
            eprintln!("kvsock-cli: {e}");
            std::process::exit(1);
        }
    }
}
