//! # kvsock
//!
//! A minimal in-memory key-value store served over a Unix domain socket:
//! - Line-oriented `SET`/`GET` protocol, one request per connection
//! - Bounded store (distinct-key capacity ceiling, fixed key/value lengths)
//! - Strictly sequential connection handling, no locking required
//! - Scoped endpoint cleanup on every exit path (normal, signal, fatal)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   one command line   ┌──────────────────────────┐
//! │  kvsock-cli  ├─────────────────────▶│       Server Loop        │
//! │  (one-shot)  │◀─────────────────────┤   (sequential accepts)   │
//! └──────────────┘    one reply line    └────────────┬─────────────┘
//!                                                    │
//!                                       ┌────────────▼─────────────┐
//!                                       │    Connection Handler    │
//!                                       │ (one transaction/close)  │
//!                                       └────────────┬─────────────┘
//!                                                    │
//!                                  ┌─────────────────┴────────────────┐
//!                                  ▼                                  ▼
//!                          ┌──────────────┐                  ┌──────────────┐
//!                          │    Codec     │                  │    Store     │
//!                          │ (parse/fmt)  │                  │  (HashMap)   │
//!                          └──────────────┘                  └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::Store;
pub use network::{Client, Server, ShutdownHandle};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvsock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
