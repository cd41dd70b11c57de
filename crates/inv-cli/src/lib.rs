//! CLI library components for the inventory toolkit.

pub mod logging;
pub mod render;
