//! Configuration for kvsock
//!
//! Centralized configuration with sensible defaults. The defaults mirror the
//! fixed bounds the wire protocol was designed around: 63-byte keys, 255-byte
//! values, 100 distinct keys, 1 KiB request lines.

use std::path::PathBuf;

/// Main configuration for a kvsock server or client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Filesystem path of the Unix domain socket. Removed and recreated on
    /// server start, removed again on shutdown.
    pub socket_path: PathBuf,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of distinct keys the store may hold
    pub capacity: usize,

    /// Maximum key length in bytes; longer keys are silently truncated
    pub max_key_len: usize,

    /// Maximum value length in bytes; longer values are silently truncated
    pub max_value_len: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Maximum request line length in bytes (including the newline)
    pub max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from("/tmp/kvstore.sock"),
            capacity: 100,
            max_key_len: 63,
            max_value_len: 255,
            max_line_len: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the Unix socket path
    pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.socket_path = path.into();
        self
    }

    /// Set the store capacity (distinct keys)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the maximum key length in bytes
    pub fn max_key_len(mut self, len: usize) -> Self {
        self.config.max_key_len = len;
        self
    }

    /// Set the maximum value length in bytes
    pub fn max_value_len(mut self, len: usize) -> Self {
        self.config.max_value_len = len;
        self
    }

    /// Set the maximum request line length in bytes
    pub fn max_line_len(mut self, len: usize) -> Self {
        self.config.max_line_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
