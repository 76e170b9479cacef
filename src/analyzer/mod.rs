//! Export-surface analyzer
//!
//! Walks a module's top-level statements and resolves every export form —
//! direct declarations, named re-export lists, namespace and wildcard
//! re-exports, and default exports — into an [`AnalysisResult`]. Analysis is
//! a pure function of the source text plus the file system reachable through
//! re-export specifiers; nothing is cached between invocations.

pub mod declarations;
pub mod literal;
pub mod mock_value;
pub mod resolver;
pub mod source;

use crate::error::{PremockError, Result};
use crate::models::{AnalysisResult, ExportEntity, ExportMap};
use declarations::DeclarationTable;
use literal::serialize_literal;
use oxc_ast::ast::*;
use oxc_parser::Parser;
use resolver::{namespace_props, ExportResolver};
use source::{render_diagnostics, source_type_for, SourceParser};
use std::path::{Path, PathBuf};

/// Analyze a module's export surface.
///
/// `file_path` is used to resolve relative re-export targets and need not
/// exist on disk for the entry call. Unresolvable references degrade to
/// placeholder entities or diagnostics in `errors`; only an unparseable
/// entry text is an error.
pub fn analyze(source_text: &str, file_path: &Path) -> Result<AnalysisResult> {
    let parser = SourceParser::new();
    let canonical = file_path
        .canonicalize()
        .unwrap_or_else(|_| file_path.to_path_buf());
    let mut visited = vec![canonical];
    analyze_module(&parser, source_text, file_path, &mut visited)
}

/// Analyze one module in an ongoing (possibly recursive) invocation.
/// `visited` holds the canonical paths currently on the resolution stack;
/// re-entering one of them resolves as unreferencable instead of recursing.
pub(crate) fn analyze_module(
    parser: &SourceParser,
    source_text: &str,
    file_path: &Path,
    visited: &mut Vec<PathBuf>,
) -> Result<AnalysisResult> {
    let allocator = parser.take_allocator();
    let source_type = source_type_for(file_path);

    let ret = Parser::new(&allocator, source_text, source_type)
        .with_options(parser.options())
        .parse();

    if ret.panicked {
        let message = render_diagnostics(&ret.errors).join("; ");
        return Err(PremockError::parse_error(file_path, message));
    }

    let mut result = AnalysisResult::new();
    result.errors = render_diagnostics(&ret.errors);

    // Two passes: collect every declaration first, then resolve exports
    {
        let program = &ret.program;
        let table = DeclarationTable::build(program);
        let mut resolver = ExportResolver::new(source_text, file_path, table, parser, visited);
        collect_exports(program, &mut resolver, &mut result);
    }

    drop(ret);
    parser.return_allocator(allocator);
    Ok(result)
}

fn collect_exports<'a>(
    program: &'a Program<'a>,
    resolver: &mut ExportResolver<'a, '_>,
    result: &mut AnalysisResult,
) {
    for stmt in &program.body {
        match stmt {
            Statement::ExportNamedDeclaration(decl) => {
                collect_named_export(decl, resolver, result)
            }
            Statement::ExportDefaultDeclaration(decl) => {
                collect_default_export(decl, resolver, result)
            }
            Statement::ExportAllDeclaration(decl) => {
                collect_reexport_all(decl, resolver, result)
            }
            _ => {}
        }
    }
}

/// `export const x = ...`, `export function f() {}`, and named re-export
/// lists with or without a source module
fn collect_named_export<'a>(
    decl: &'a ExportNamedDeclaration<'a>,
    resolver: &mut ExportResolver<'a, '_>,
    result: &mut AnalysisResult,
) {
    if let Some(declaration) = &decl.declaration {
        match declaration {
            Declaration::VariableDeclaration(var_decl) => {
                for declarator in &var_decl.declarations {
                    let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind else {
                        continue;
                    };
                    let name = id.name.to_string();
                    let Some(init) = &declarator.init else {
                        continue;
                    };
                    let entity = match init {
                        Expression::ArrowFunctionExpression(arrow) => resolver.arrow_entity(arrow),
                        Expression::FunctionExpression(func) => resolver.function_expr_entity(func),
                        Expression::ObjectExpression(object) => ExportEntity::Object {
                            props: resolver.object_entity(object),
                        },
                        other => match serialize_literal(other, resolver.table(), resolver.source())
                        {
                            Some(value) => ExportEntity::Constant { value },
                            None => resolver.resolve_export(&name, None),
                        },
                    };
                    result.named_exports.insert(name, entity);
                }
            }
            Declaration::FunctionDeclaration(func) => {
                if let Some(id) = &func.id {
                    result
                        .named_exports
                        .insert(id.name.to_string(), resolver.function_decl_entity(func));
                }
            }
            _ => {}
        }
    }

    let source = decl.source.as_ref().map(|s| s.value.as_str());
    for specifier in &decl.specifiers {
        let original = specifier.local.name();
        let exported = specifier.exported.name();
        let entity = resolver.resolve_export(original.as_str(), source);
        result.named_exports.insert(exported.to_string(), entity);
    }
}

/// `export default ...` of a named function, an object literal, or a bare
/// identifier. Anything else appends a diagnostic. The first default export
/// wins; later ones append a diagnostic.
fn collect_default_export<'a>(
    decl: &'a ExportDefaultDeclaration<'a>,
    resolver: &mut ExportResolver<'a, '_>,
    result: &mut AnalysisResult,
) {
    match &decl.declaration {
        ExportDefaultDeclarationKind::FunctionDeclaration(func) => match &func.id {
            Some(id) => {
                let entity = resolver.function_decl_entity(func);
                result
                    .named_exports
                    .insert(id.name.to_string(), entity.clone());
                let mut props = ExportMap::new();
                props.insert(id.name.to_string(), entity);
                set_default_export(result, props);
            }
            None => result.add_error("Anonymous default exports are not supported"),
        },
        ExportDefaultDeclarationKind::ObjectExpression(object) => {
            let props = resolver.object_entity(object);
            set_default_export(result, props);
        }
        ExportDefaultDeclarationKind::Identifier(ident) => {
            let name = ident.name.to_string();
            let entity = resolver.resolve_export(&name, None);
            let mut props = ExportMap::new();
            props.insert(name, entity);
            set_default_export(result, props);
        }
        _ => result.add_error(
            "Unsupported default export expression; use an object literal or identifier",
        ),
    }
}

/// `export * from 'mod'` merges the target's named exports in place;
/// `export * as ns from 'mod'` nests the target's full surface under `ns`.
/// Unreadable targets are skipped.
fn collect_reexport_all<'a>(
    decl: &'a ExportAllDeclaration<'a>,
    resolver: &mut ExportResolver<'a, '_>,
    result: &mut AnalysisResult,
) {
    let specifier = decl.source.value.as_str();
    match &decl.exported {
        Some(ns) => {
            if let Some(external) = resolver.analyze_external(specifier) {
                result.named_exports.insert(
                    ns.name().to_string(),
                    ExportEntity::Object {
                        props: namespace_props(external),
                    },
                );
            }
        }
        None => {
            if let Some(external) = resolver.analyze_external(specifier) {
                for (name, entity) in external.named_exports {
                    result.named_exports.insert(name, entity);
                }
            }
        }
    }
}

fn set_default_export(result: &mut AnalysisResult, props: ExportMap) {
    if result.default_export.is_some() {
        result.add_error("Duplicate default export ignored; the first one wins");
    } else {
        result.default_export = Some(props);
    }
}
