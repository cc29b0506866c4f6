//! One-shot client
//!
//! Connection-per-request: connect, send one command line, read one reply
//! line, disconnect.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};

use crate::error::{KvError, Result};

/// Client for a kvsock server
#[derive(Debug, Clone)]
pub struct Client {
    socket_path: PathBuf,
}

impl Client {
    /// Create a client for the given socket path
    pub fn new(socket_path: impl AsRef<Path>) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
        }
    }

    /// Get the socket path
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Send one command line and return the reply line
    ///
    /// A trailing newline is appended to the command if missing. The reply
    /// is returned without its trailing newline. A server that closes the
    /// connection without replying is a protocol error.
    pub fn send(&self, command: &str) -> Result<String> {
        let stream = UnixStream::connect(&self.socket_path)?;
        let mut writer = BufWriter::new(stream.try_clone()?);
        let mut reader = BufReader::new(stream);

        tracing::debug!("Sending command to {}", self.socket_path.display());

        writer.write_all(command.as_bytes())?;
        if !command.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        let mut reply = String::new();
        let n = reader.read_line(&mut reply)?;
        if n == 0 {
            return Err(KvError::Protocol(
                "server closed the connection without replying".to_string(),
            ));
        }

        if reply.ends_with('\n') {
            reply.pop();
        }
        Ok(reply)
    }
}
