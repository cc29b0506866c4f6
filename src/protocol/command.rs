//! Request definitions
//!
//! Represents one parsed request line from a client.

/// A parsed request
///
/// Ephemeral: produced once per connection, discarded after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Store a key-value pair
    Set { key: String, value: String },

    /// Fetch a value by key
    Get { key: String },

    /// Anything that is not a well-formed SET or GET
    Invalid,
}
