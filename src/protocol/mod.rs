//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (line-oriented, one request/reply per connection)
//!
//! ### Request Line
//! ```text
//! SET <key> <value...>\n
//! GET <key>\n
//! ```
//! The command word is case-insensitive. The value is the remainder of the
//! line after the key and may contain internal whitespace. Keys longer than
//! the configured bound (63 bytes) and values longer than theirs (255 bytes)
//! are silently truncated.
//!
//! ### Reply Line
//! ```text
//! OK                                        (SET accepted)
//! ERROR: Store full                         (SET rejected, capacity reached)
//! <value>                                   (GET hit)
//! NOT FOUND                                 (GET miss)
//! ERROR: Invalid command. Use SET or GET.   (anything else)
//! ```
//! Every reply is exactly one line terminated by a single `\n`.

mod command;
mod response;
mod codec;

pub use command::Request;
pub use response::Response;
pub use codec::{parse_request, read_request_line, write_response};
