#![feature(error_generic_member_access)]
//! premock - preload export analyzer and mock generator
//!
//! This library statically analyzes the export surface of a preload entry
//! module (TypeScript or JavaScript), generates a browser-safe auto-mock
//! module, a one-time user-editable mock scaffold, and an ambient type
//! declaration file describing that surface. A second pass purifies a
//! compiled CommonJS bundle into flat global-namespace assignments.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod output;
pub mod purifier;

// Re-export commonly used types
pub use analyzer::analyze;
pub use error::{ErrorSeverity, OptionExt, PremockError, Result, ResultExt};
pub use models::{AnalysisResult, ExportEntity, ExportMap, UNRESOLVED_VALUE};
pub use purifier::{purify, PurifiedBundle};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
