//! Connection Handler
//!
//! Handles one client connection as a closed transaction: read exactly one
//! request line, apply it to the store, write exactly one reply, close.

use std::io::{BufReader, BufWriter};
use std::os::unix::net::UnixStream;

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::protocol::{parse_request, read_request_line, write_response, Request, Response};
use crate::store::Store;

/// Handles a single client connection
pub struct Connection {
    /// Stream reader (buffered for line reads)
    reader: BufReader<UnixStream>,

    /// Stream writer (buffered, flushed once per reply)
    writer: BufWriter<UnixStream>,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: UnixStream) -> Result<Self> {
        // Clone the stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
        })
    }

    /// Run the transaction to completion
    ///
    /// A client that closes without sending anything gets no reply. A line
    /// longer than `max_line_len` is processed as-is, without its newline.
    /// The stream closes when `self` drops, on success and failure alike.
    pub fn handle(mut self, store: &mut Store, config: &Config) -> Result<()> {
        let line = match read_request_line(&mut self.reader, config.max_line_len)? {
            Some(line) => line,
            None => {
                tracing::debug!("Client closed before sending a request");
                return Ok(());
            }
        };

        let request = parse_request(&line, config);
        tracing::trace!("Received request: {:?}", request);

        let response = Self::apply(request, store);

        write_response(&mut self.writer, &response)
    }

    /// Apply a request to the store and pick the reply
    fn apply(request: Request, store: &mut Store) -> Response {
        match request {
            Request::Get { key } => match store.lookup(&key) {
                Some(value) => Response::Value(value.to_string()),
                None => Response::NotFound,
            },
            Request::Set { key, value } => match store.upsert(key, value) {
                Ok(()) => Response::Ok,
                Err(KvError::StoreFull) => Response::StoreFull,
                Err(e) => {
                    tracing::warn!("Unexpected store error: {}", e);
                    Response::Invalid
                }
            },
            Request::Invalid => Response::Invalid,
        }
    }
}
