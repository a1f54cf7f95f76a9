//! Application handlers, grouped by capability.

pub mod report;
