//! Subscriber session storage
//!
//! Sessions live in process memory, keyed by phone number, and are evicted
//! after sitting idle past the configured TTL.

mod locks;
mod store;

pub use locks::KeyedLocks;
pub use store::{InMemorySessionStore, SessionStore, StoreError};
