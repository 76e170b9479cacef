//! Placeholder return value inference
//!
//! Derives a mock return expression for a function-like declaration from its
//! async modifier and written return-type annotation. This is a syntactic
//! switch over the annotation's surface shape, not type resolution: a
//! `Promise`-named type reference matches by name.

use crate::models::UNRESOLVED_VALUE;
use oxc_ast::ast::*;
use oxc_span::GetSpan;

/// Infer the placeholder return expression for a function-like declaration.
///
/// Precedence: async modifier, then missing annotation, then the
/// annotation's shape.
pub fn infer_mock_return(is_async: bool, return_type: Option<&TSType>) -> String {
    if is_async {
        return "Promise.resolve()".to_string();
    }
    let Some(annotation) = return_type else {
        return UNRESOLVED_VALUE.to_string();
    };
    match annotation {
        TSType::TSStringKeyword(_) => "''".to_string(),
        TSType::TSNumberKeyword(_) => "0".to_string(),
        TSType::TSBooleanKeyword(_) => "false".to_string(),
        TSType::TSVoidKeyword(_) | TSType::TSUndefinedKeyword(_) => "undefined".to_string(),
        TSType::TSNullKeyword(_) => "null".to_string(),
        TSType::TSAnyKeyword(_) | TSType::TSUnknownKeyword(_) => "{}".to_string(),
        TSType::TSTypeReference(reference) => {
            if let TSTypeName::IdentifierReference(ident) = &reference.type_name {
                if ident.name == "Promise" {
                    return "Promise.resolve()".to_string();
                }
            }
            // Interface references, generics and the like all mock as an
            // empty object
            "{}".to_string()
        }
        _ => "{}".to_string(),
    }
}

/// Extract the written parameter names of a function-like declaration.
/// Destructuring patterns keep their source text verbatim.
pub fn parameter_names(params: &FormalParameters, source: &str) -> Vec<String> {
    let mut names: Vec<String> = params
        .items
        .iter()
        .map(|param| binding_text(&param.pattern, source))
        .collect();
    if let Some(rest) = &params.rest {
        names.push(binding_text(&rest.argument, source));
    }
    names
}

fn binding_text(pattern: &BindingPattern, source: &str) -> String {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(id) => id.name.to_string(),
        other => other.span().source_text(source).to_string(),
    }
}
