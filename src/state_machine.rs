//! Subscriber session state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions.
//! The runtime feeds events in, executes the returned effects, and feeds
//! any resulting events back until a reply is produced.

mod effect;
mod error;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use error::{Boundary, SessionError};
pub use event::{Command, Event};
pub use state::{SessionContext, SessionState, SubscriberSession};
pub use transition::transition;
