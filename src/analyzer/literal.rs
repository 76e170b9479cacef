//! Literal expression serialization
//!
//! Converts initializer expressions into canonical TypeScript expression
//! text. Unrecognized shapes yield `None` so that callers can fall back to
//! full export resolution.

use super::declarations::{Declared, DeclarationTable};
use oxc_ast::ast::*;
use oxc_span::GetSpan;

/// Serialize a literal expression to canonical text, or `None` when the
/// expression is not a recognized literal shape.
///
/// Bare identifiers chain through the declaration table: an identifier
/// referring to a local variable serializes as that variable's initializer.
pub fn serialize_literal<'a>(
    expr: &'a Expression<'a>,
    table: &DeclarationTable<'a>,
    source: &'a str,
) -> Option<String> {
    match expr {
        Expression::StringLiteral(lit) => Some(format!("'{}'", lit.value)),
        Expression::TemplateLiteral(lit) if lit.expressions.is_empty() => {
            let quasi = lit.quasis.first()?;
            let text = quasi
                .value
                .cooked
                .as_ref()
                .map(|c| c.as_str())
                .unwrap_or_else(|| quasi.value.raw.as_str());
            Some(format!("'{}'", text))
        }
        // Numeric text is kept verbatim from the source
        Expression::NumericLiteral(lit) => Some(lit.span.source_text(source).to_string()),
        Expression::BooleanLiteral(lit) => Some(if lit.value { "true" } else { "false" }.to_string()),
        Expression::ArrayExpression(array) => {
            let elements: Vec<String> = array
                .elements
                .iter()
                .map(|element| {
                    element
                        .as_expression()
                        .and_then(|e| serialize_literal(e, table, source))
                        .unwrap_or_else(|| "undefined".to_string())
                })
                .collect();
            Some(format!("[{}]", elements.join(", ")))
        }
        Expression::ObjectExpression(object) => {
            Some(serialize_object_literal(object, table, source))
        }
        Expression::Identifier(ident) => resolve_identifier_text(ident.name.as_str(), table, source),
        _ => None,
    }
}

/// Serialize an object literal property-by-property. Computed keys are
/// skipped; values that fail to serialize degrade to `undefined`; shorthand
/// properties resolve through the declaration table, keeping the bare name
/// when the identifier does not resolve.
fn serialize_object_literal<'a>(
    object: &'a ObjectExpression<'a>,
    table: &DeclarationTable<'a>,
    source: &'a str,
) -> String {
    let mut pairs: Vec<String> = Vec::new();
    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = property else {
            continue;
        };
        if prop.computed {
            continue;
        }
        let key = match &prop.key {
            PropertyKey::StaticIdentifier(_) | PropertyKey::StringLiteral(_) => {
                prop.key.span().source_text(source)
            }
            _ => continue,
        };
        if prop.shorthand {
            match resolve_identifier_text(key, table, source) {
                Some(value) => pairs.push(format!("{}: {}", key, value)),
                None => pairs.push(key.to_string()),
            }
            continue;
        }
        let value = serialize_literal(&prop.value, table, source)
            .unwrap_or_else(|| "undefined".to_string());
        pairs.push(format!("{}: {}", key, value));
    }
    format!("{{{}}}", pairs.join(", "))
}

/// Resolve an identifier to the serialized text of its local variable
/// initializer (chained resolution). Import bindings and functions do not
/// serialize.
fn resolve_identifier_text<'a>(
    name: &str,
    table: &DeclarationTable<'a>,
    source: &'a str,
) -> Option<String> {
    match table.get(name)? {
        Declared::Variable(declarator) => {
            let init = declarator.init.as_ref()?;
            serialize_literal(init, table, source)
        }
        _ => None,
    }
}
