//! CLI library components for the ACA load review checklist generator.

pub mod logging;
pub mod pipeline;
