//! Store Module
//!
//! In-memory key-value state owned by the server loop.
//!
//! ## Responsibilities
//! - Exact-equality lookup
//! - Upsert with overwrite-in-place semantics for existing keys
//! - Enforce the distinct-key capacity ceiling
//!
//! ## Data Structure Choice
//! HashMap keyed by the (already length-bounded) key string:
//! - O(1) average lookup/insert
//! - Key uniqueness holds by construction
//! - The capacity ceiling is checked before insert, so a rejected upsert
//!   never mutates state

mod table;

pub use table::Store;
