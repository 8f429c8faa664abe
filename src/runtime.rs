//! Runtime for handling gateway requests
//!
//! Loads the subscriber's session, drives the state machine, and executes
//! the effects it asks for: recipe lookups, session writes, and the reply.

mod controller;

#[cfg(test)]
pub mod testing;

pub use controller::SessionController;
