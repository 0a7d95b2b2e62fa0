//! CLI library components for the top-picks pipeline.

pub mod logging;
pub mod pipeline;
