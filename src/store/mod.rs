//! Event-driven session store.
//!
//! The store is the single owner of [`crate::state::SessionState`]. UI code
//! dispatches typed [`Event`]s; the reducer applies them synchronously and
//! bumps a revision counter. There is no queue and no concurrency: all
//! transitions are serialized on the event-loop thread.

mod event;
mod session_store;

pub use event::Event;
pub use session_store::Store;
