//! Observability module
//!
//! Structured logging for registry loading, lookups, and validation.

pub mod logging;

pub use logging::{LogFormat, init_logging};
