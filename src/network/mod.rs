//! Network Module
//!
//! Unix-domain-socket server, connection handling, and the one-shot client.
//!
//! ## Architecture
//! - Single-threaded sequential accept loop
//! - One transaction per connection: read line, apply, reply, close
//! - Endpoint socket file removed on every exit path

mod server;
mod connection;
mod client;

pub use server::{Server, ShutdownHandle};
pub use connection::Connection;
pub use client::Client;
