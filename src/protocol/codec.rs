//! Protocol codec
//!
//! Parsing and formatting for the line protocol, plus stream I/O helpers.
//!
//! ## Parsing Rules
//! - The line splits into a command token, a key token, and the remainder.
//! - Fewer than two tokens make the request invalid.
//! - `SET` needs a non-empty remainder as its value; the value keeps internal
//!   and trailing whitespace, only leading whitespace is stripped.
//! - `GET` ignores any text after the key.
//! - Oversized keys and values are truncated to their configured bounds.

use std::io::{BufRead, Read, Write};

use crate::config::Config;
use crate::error::Result;
use super::{Request, Response};

// =============================================================================
// Request Parsing
// =============================================================================

/// Parse one request line into a Request
///
/// Never fails: anything that does not form a valid SET or GET becomes
/// `Request::Invalid`. The trailing newline, if present, is ignored.
pub fn parse_request(line: &str, config: &Config) -> Request {
    let line = line.strip_suffix('\n').unwrap_or(line);

    let Some((command, rest)) = split_token(line) else {
        return Request::Invalid;
    };
    let Some((key, rest)) = split_token(rest) else {
        return Request::Invalid;
    };
    let key = truncate_to(key, config.max_key_len);

    if command.eq_ignore_ascii_case("GET") {
        // Trailing text after the key is ignored for GET.
        return Request::Get {
            key: key.to_string(),
        };
    }

    if command.eq_ignore_ascii_case("SET") {
        let value = rest.trim_start();
        if value.is_empty() {
            // SET without a value token is malformed.
            return Request::Invalid;
        }
        let value = truncate_to(value, config.max_value_len);
        return Request::Set {
            key: key.to_string(),
            value: value.to_string(),
        };
    }

    Request::Invalid
}

/// Split the next whitespace-delimited token off the front of `input`
///
/// Returns the token and the unconsumed remainder, or None if only
/// whitespace is left.
fn split_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(idx) => Some((&input[..idx], &input[idx..])),
        None => Some((input, "")),
    }
}

/// Truncate `input` to at most `max_len` bytes on a character boundary
fn truncate_to(input: &str, max_len: usize) -> &str {
    if input.len() <= max_len {
        return input;
    }
    let mut end = max_len;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read one request line from a stream, bounded by `max_len` bytes
///
/// Blocks until a newline arrives, `max_len` bytes have been read, or the
/// stream ends. Returns `None` when the stream ends before any byte arrives
/// (the client connected and closed without sending a request). Interrupted
/// reads are retried inside `read_until`.
pub fn read_request_line<R: BufRead>(reader: &mut R, max_len: usize) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let n = reader
        .by_ref()
        .take(max_len as u64)
        .read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Write one reply line to a stream and flush it
///
/// `write_all` retries interrupted writes; any other failure surfaces to the
/// caller, which abandons the connection.
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(response.to_line().as_bytes())?;
    writer.flush()?;
    Ok(())
}
