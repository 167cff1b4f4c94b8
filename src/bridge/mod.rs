//! Effect bridges: the one-way state-to-widget channel.
//!
//! A bridge owns the subscription bindings for one widget and translates
//! accepted derived-view changes into imperative calls on it. The reverse
//! channel (widget/UI interaction back into state) goes through the store's
//! event dispatch, never through a bridge.

mod registry;
mod transfer_function;

pub use registry::MountRegistry;
pub use transfer_function::TransferFunctionBridge;
