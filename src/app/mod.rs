//! Application-level coordinators for the RVIV viewer GUI.

mod demo_session;
mod playback;

pub use demo_session::build_demo_session;
pub use playback::ScrollPlayback;
