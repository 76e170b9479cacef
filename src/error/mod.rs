//! Error handling for premock
//!
//! This module provides the error handling system for the premock tool,
//! including error types, result aliases, and error context utilities.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, PremockError, Result};
