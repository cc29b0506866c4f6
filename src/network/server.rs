//! Unix socket server
//!
//! Owns the listening endpoint and the store, accepting connections
//! sequentially. The socket file is removed by a scoped guard on every exit
//! path: normal loop exit, signal-triggered shutdown, and fatal errors.

use std::fs;
use std::io::ErrorKind;
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::network::Connection;
use crate::store::Store;

/// How long to sleep between shutdown-flag polls when no client is waiting
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Cloneable handle that requests server shutdown
///
/// Handed to the signal handler and to tests. The server notices the flag
/// within one accept-poll interval.
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    /// Ask the server loop to stop after the in-flight connection, if any
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether shutdown has been requested
    pub fn is_shutdown(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Removes the endpoint socket file when dropped
struct EndpointGuard {
    path: PathBuf,
}

impl Drop for EndpointGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Failed to remove socket file {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Unix-domain-socket server for kvsock
///
/// Owns the store and passes it by reference into each connection handler,
/// so at most one handler mutates it at a time.
pub struct Server {
    config: Config,
    store: Store,
    listener: UnixListener,
    endpoint: EndpointGuard,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Bind the listening endpoint
    ///
    /// A stale socket file left by an unclean shutdown is removed first, so
    /// a restart at the same path always succeeds. Bind failure is fatal to
    /// the caller.
    pub fn bind(config: Config) -> Result<Self> {
        match fs::remove_file(&config.socket_path) {
            Ok(()) => tracing::debug!(
                "Removed stale socket file {}",
                config.socket_path.display()
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let listener = UnixListener::bind(&config.socket_path)?;
        // Guard first: any failure past this point must still remove the file
        let endpoint = EndpointGuard {
            path: config.socket_path.clone(),
        };
        listener.set_nonblocking(true)?;
        let store = Store::new(config.capacity);

        Ok(Self {
            config,
            store,
            listener,
            endpoint,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get a handle that can stop the serving loop
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Serve connections until shutdown is requested (blocking)
    ///
    /// Connections are accepted and handled strictly sequentially: the next
    /// accept happens only after the current handler has run to completion.
    /// Transient accept failures are retried; per-connection failures are
    /// logged and do not stop the loop.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Listening on {}", self.endpoint.path.display());

        while !self.shutdown.load(Ordering::Relaxed) {
            match self.listener.accept() {
                Ok((stream, _addr)) => {
                    // The listener is non-blocking for shutdown polling;
                    // accepted streams must block for the transaction.
                    if let Err(e) = stream.set_nonblocking(false) {
                        tracing::warn!("Failed to configure connection: {}", e);
                        continue;
                    }
                    match Connection::new(stream) {
                        Ok(conn) => {
                            if let Err(e) = conn.handle(&mut self.store, &self.config) {
                                tracing::debug!("Connection abandoned: {}", e);
                            }
                        }
                        Err(e) => tracing::warn!("Failed to set up connection: {}", e),
                    }
                }
                Err(e) if e.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => tracing::warn!("Accept failed: {}", e),
            }
        }

        tracing::info!("Shutdown requested, closing endpoint");
        Ok(())
    }
}
