//! Export resolution
//!
//! Classifies an exported identifier into an [`ExportEntity`], consulting the
//! declaration table, the literal serializer and the mock-value inferencer.
//! Identifiers that originate in another module trigger a nested analysis of
//! that module's contents; a visited-set guards the recursion against
//! re-export cycles, resolving a revisit as unresolved instead of recursing
//! again.

use super::declarations::{Declared, DeclarationTable};
use super::literal::serialize_literal;
use super::mock_value::{infer_mock_return, parameter_names};
use super::source::SourceParser;
use crate::models::{AnalysisResult, ExportEntity, ExportMap};
use oxc_ast::ast::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-module resolution context. Holds the module's declaration table and
/// everything the cross-module recursion needs.
pub struct ExportResolver<'a, 'p> {
    source: &'a str,
    path: &'a Path,
    table: DeclarationTable<'a>,
    parser: &'p SourceParser,
    visited: &'p mut Vec<PathBuf>,
}

impl<'a, 'p> ExportResolver<'a, 'p> {
    pub fn new(
        source: &'a str,
        path: &'a Path,
        table: DeclarationTable<'a>,
        parser: &'p SourceParser,
        visited: &'p mut Vec<PathBuf>,
    ) -> Self {
        Self {
            source,
            path,
            table,
            parser,
            visited,
        }
    }

    /// The module's source text
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The module's declaration table
    pub fn table(&self) -> &DeclarationTable<'a> {
        &self.table
    }

    /// Resolve one exported identifier to its classified entity.
    ///
    /// With `from` set, the identifier is re-exported from another module:
    /// that module is analyzed in full and the entity looked up in its named
    /// exports (`default` maps to its default export wrapped as an object).
    /// Without `from`, the identifier resolves against the local declaration
    /// table. Unresolvable references degrade to the unresolved placeholder;
    /// they are never an error.
    pub fn resolve_export(&mut self, identifier: &str, from: Option<&str>) -> ExportEntity {
        if let Some(specifier) = from {
            if let Some(external) = self.analyze_external(specifier) {
                if let Some(entity) = external.named_exports.get(identifier) {
                    return entity.clone();
                }
                if identifier == "default" {
                    if let Some(default) = external.default_export {
                        return ExportEntity::Object { props: default };
                    }
                }
            }
            return ExportEntity::unresolved();
        }

        let Some(declared) = self.table.get(identifier) else {
            return ExportEntity::unresolved();
        };

        match declared {
            Declared::Variable(declarator) => {
                if let Some(init) = &declarator.init {
                    match init {
                        Expression::ArrowFunctionExpression(arrow) => {
                            return self.arrow_entity(arrow)
                        }
                        Expression::FunctionExpression(func) => {
                            return self.function_expr_entity(func)
                        }
                        _ => {}
                    }
                    if let Some(value) = serialize_literal(init, &self.table, self.source) {
                        return ExportEntity::Constant { value };
                    }
                    if let Expression::Identifier(ident) = init {
                        return self.resolve_export(ident.name.as_str(), None);
                    }
                }
                ExportEntity::unresolved()
            }
            Declared::Function(func) => self.function_decl_entity(func),
            Declared::ImportNamed { source, imported } => self.resolve_export(imported, Some(source)),
            Declared::ImportDefault { source } => {
                if let Some(external) = self.analyze_external(source) {
                    if let Some(default) = external.default_export {
                        return ExportEntity::Object { props: default };
                    }
                }
                ExportEntity::unresolved()
            }
            Declared::ImportNamespace { source } => {
                if let Some(external) = self.analyze_external(source) {
                    return ExportEntity::Object {
                        props: namespace_props(external),
                    };
                }
                ExportEntity::unresolved()
            }
        }
    }

    /// Expand an object-literal export property-by-property. Function-valued
    /// properties and method shorthand become function entities, nested
    /// object literals recurse, shorthand identifier properties go through
    /// export resolution, and anything that fails to serialize is skipped.
    pub fn object_entity(&mut self, object: &'a ObjectExpression<'a>) -> ExportMap {
        let mut props = ExportMap::new();
        for property in &object.properties {
            let ObjectPropertyKind::ObjectProperty(prop) = property else {
                continue;
            };
            if prop.computed {
                continue;
            }
            let key = match &prop.key {
                PropertyKey::StaticIdentifier(id) => id.name.to_string(),
                PropertyKey::StringLiteral(lit) => lit.value.to_string(),
                _ => continue,
            };
            if prop.shorthand {
                let entity = self.resolve_export(&key, None);
                props.insert(key, entity);
                continue;
            }
            match &prop.value {
                Expression::FunctionExpression(func) => {
                    let entity = self.function_expr_entity(func);
                    props.insert(key, entity);
                }
                Expression::ArrowFunctionExpression(arrow) => {
                    let entity = self.arrow_entity(arrow);
                    props.insert(key, entity);
                }
                Expression::ObjectExpression(nested) => {
                    let nested = self.object_entity(nested);
                    props.insert(key, ExportEntity::Object { props: nested });
                }
                value => {
                    if let Some(text) = serialize_literal(value, &self.table, self.source) {
                        props.insert(key, ExportEntity::Constant { value: text });
                    }
                }
            }
        }
        props
    }

    /// Function entity for a function declaration or expression
    pub fn function_decl_entity(&self, func: &'a Function<'a>) -> ExportEntity {
        ExportEntity::Function {
            params: parameter_names(&func.params, self.source),
            mock_return_value: infer_mock_return(
                func.r#async,
                func.return_type.as_deref().map(|t| &t.type_annotation),
            ),
        }
    }

    /// Function entity for a function expression
    pub fn function_expr_entity(&self, func: &'a Function<'a>) -> ExportEntity {
        self.function_decl_entity(func)
    }

    /// Function entity for an arrow function
    pub fn arrow_entity(&self, arrow: &'a ArrowFunctionExpression<'a>) -> ExportEntity {
        ExportEntity::Function {
            params: parameter_names(&arrow.params, self.source),
            mock_return_value: infer_mock_return(
                arrow.r#async,
                arrow.return_type.as_deref().map(|t| &t.type_annotation),
            ),
        }
    }

    /// Analyze another module referenced by specifier, relative to the
    /// current module's directory. Tries the literal path, then `.ts`, then
    /// `.js`. Returns `None` for unreadable targets, parse failures, and
    /// modules already on the resolution stack (cycle guard).
    pub fn analyze_external(&mut self, specifier: &str) -> Option<AnalysisResult> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut candidate = dir.join(specifier).to_string_lossy().into_owned();
        if !candidate.ends_with(".ts") && !candidate.ends_with(".js") {
            candidate.push_str(".ts");
        }

        let (text, candidate) = match fs::read_to_string(&candidate) {
            Ok(text) => (text, PathBuf::from(candidate)),
            Err(_) => {
                let fallback = format!("{}.js", candidate.strip_suffix(".ts")?);
                let text = fs::read_to_string(&fallback).ok()?;
                (text, PathBuf::from(fallback))
            }
        };

        let canonical = candidate.canonicalize().unwrap_or_else(|_| candidate.clone());
        if self.visited.contains(&canonical) {
            return None;
        }
        self.visited.push(canonical);
        let result = super::analyze_module(self.parser, &text, &candidate, self.visited).ok();
        self.visited.pop();
        result
    }
}

/// Wrap a module's full export surface as namespace-object properties: the
/// named exports plus, when present, the default export under `default`.
pub fn namespace_props(external: AnalysisResult) -> ExportMap {
    let mut props = external.named_exports;
    if let Some(default) = external.default_export {
        props.insert("default".to_string(), ExportEntity::Object { props: default });
    }
    props
}
