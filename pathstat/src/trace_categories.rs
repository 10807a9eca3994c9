//! Trace utilities

/// Trace category for filesystem metadata queries.
pub const QUERIES: &str = "queries";
