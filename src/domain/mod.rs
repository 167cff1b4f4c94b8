//! Core policy logic for the RVIV viewer (no UI concerns):
//! - Plane policy (visibility/scroll transitions, playback stepping)
//! - Color range math (normalized range computation)
//! - Control liveness (which controls are live per view mode)

pub mod color_range;
pub mod controls;
pub mod plane_policy;
