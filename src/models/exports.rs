//! Export-surface data model
//!
//! The analyzer classifies every exported name into an [`ExportEntity`] and
//! collects them into an [`AnalysisResult`]. All maps preserve insertion
//! order so that generated output is deterministic and diff-friendly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder expression used whenever a value or type cannot be determined
/// statically. Usable in generated TypeScript without a type error.
pub const UNRESOLVED_VALUE: &str = "undefined as any";

/// Ordered mapping from export name to its classified entity
pub type ExportMap = IndexMap<String, ExportEntity>;

/// Classified description of one exported name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExportEntity {
    /// A function-like export: parameter names plus a placeholder return
    /// expression inferred from its written return-type annotation
    Function {
        params: Vec<String>,
        mock_return_value: String,
    },
    /// A constant export, serialized to canonical expression text
    Constant { value: String },
    /// An object-literal export, one entity per property, recursively
    Object { props: ExportMap },
}

impl ExportEntity {
    /// Constant entity carrying the opaque-unknown placeholder
    pub fn unresolved() -> Self {
        ExportEntity::Constant {
            value: UNRESOLVED_VALUE.to_string(),
        }
    }

    /// Check whether this entity is the unresolved placeholder
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ExportEntity::Constant { value } if value == UNRESOLVED_VALUE)
    }
}

/// Complete export surface of one module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Named exports, insertion order preserved, names unique per module
    pub named_exports: ExportMap,

    /// Default export, present only when expressed as an object literal,
    /// a named default function, or a bare identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_export: Option<ExportMap>,

    /// Non-fatal diagnostics accumulated during analysis
    pub errors: Vec<String>,
}

impl AnalysisResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the module has a default export
    pub fn has_default_export(&self) -> bool {
        self.default_export.is_some()
    }

    /// Append a diagnostic message
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}
