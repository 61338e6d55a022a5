//! Library components of the unifier CLI: logging setup and batch processing.

pub mod logging;
pub mod processor;
pub mod types;
