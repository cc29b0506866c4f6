//! Response definitions
//!
//! Represents one reply line to a client.

/// A reply to send to the client
///
/// Ephemeral: produced once per connection, discarded after transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// SET accepted
    Ok,

    /// GET hit, carrying the stored value
    Value(String),

    /// GET miss
    NotFound,

    /// SET rejected because the capacity ceiling was reached
    StoreFull,

    /// Malformed or unknown command
    Invalid,
}

impl Response {
    /// Render the reply as one newline-terminated line
    pub fn to_line(&self) -> String {
        match self {
            Response::Ok => "OK\n".to_string(),
            Response::Value(value) => format!("{value}\n"),
            Response::NotFound => "NOT FOUND\n".to_string(),
            Response::StoreFull => "ERROR: Store full\n".to_string(),
            Response::Invalid => "ERROR: Invalid command. Use SET or GET.\n".to_string(),
        }
    }
}
