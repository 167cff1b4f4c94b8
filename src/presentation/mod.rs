//! Presentation data separated from domain logic.

pub mod lut_presets;
