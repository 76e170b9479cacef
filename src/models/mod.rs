//! Data models and structures for premock

pub mod exports;

pub use exports::{AnalysisResult, ExportEntity, ExportMap, UNRESOLVED_VALUE};
