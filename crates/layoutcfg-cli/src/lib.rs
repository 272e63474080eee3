//! CLI library components for layoutcfg.

pub mod logging;
pub mod report;
