//! Compiled-bundle purifier
//!
//! Rewrites a compiled CommonJS bundle into flat global-namespace form: the
//! module-convention boilerplate is deleted and `exports.*` assignments
//! become plain bindings or a window merge. A single scan over the top-level
//! statements collects span edits; everything unmatched survives byte-for-
//! byte in its original order.

use crate::error::{PremockError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};
use oxc_syntax::operator::{AssignmentOperator, UnaryOperator};

/// Result of purifying one compiled bundle
#[derive(Debug, Clone, PartialEq)]
pub struct PurifiedBundle {
    /// The cleaned source text
    pub code: String,
    /// Whether the bundle assigned `exports.default`
    pub has_default_export: bool,
}

/// One span rewrite; an empty replacement deletes the statement
struct Edit {
    span: Span,
    replacement: String,
}

/// Purify a compiled CommonJS bundle.
///
/// Handles exactly five top-level statement shapes: `Object.defineProperty` /
/// `Object.defineProperties` calls on `exports`, `module.exports`
/// assignments, `exports.default` assignments (rewritten to a window merge),
/// and other `exports.<name>` assignments (dropped when they are
/// initialization noise or self-referential passthroughs, otherwise turned
/// into `const <name> = ...;`).
pub fn purify(compiled_text: &str) -> Result<PurifiedBundle> {
    let allocator = Allocator::default();
    let source_type = SourceType::cjs();
    let ret = Parser::new(&allocator, compiled_text, source_type).parse();

    if ret.panicked {
        let message = crate::analyzer::source::render_diagnostics(&ret.errors).join("; ");
        return Err(PremockError::parse_error("bundle", message));
    }

    let mut edits: Vec<Edit> = Vec::new();
    let mut has_default_export = false;

    for stmt in &ret.program.body {
        let Statement::ExpressionStatement(expr_stmt) = stmt else {
            continue;
        };
        match &expr_stmt.expression {
            Expression::CallExpression(call) => {
                if is_define_property_on_exports(call, compiled_text) {
                    edits.push(Edit {
                        span: expr_stmt.span,
                        replacement: String::new(),
                    });
                }
            }
            Expression::AssignmentExpression(assign)
                if assign.operator == AssignmentOperator::Assign =>
            {
                if let Some(edit) =
                    rewrite_exports_assignment(assign, expr_stmt.span, compiled_text, &mut has_default_export)
                {
                    edits.push(edit);
                }
            }
            _ => {}
        }
    }

    Ok(PurifiedBundle {
        code: apply_edits(compiled_text, &edits),
        has_default_export,
    })
}

/// `Object.defineProperty(exports, ...)` / `Object.defineProperties(exports, ...)`
fn is_define_property_on_exports(call: &CallExpression, source: &str) -> bool {
    let Expression::StaticMemberExpression(member) = &call.callee else {
        return false;
    };
    let Expression::Identifier(object) = &member.object else {
        return false;
    };
    if object.name != "Object" {
        return false;
    }
    if member.property.name != "defineProperty" && member.property.name != "defineProperties" {
        return false;
    }
    call.arguments
        .first()
        .and_then(|arg| arg.as_expression())
        .map(|arg| arg.span().source_text(source) == "exports")
        .unwrap_or(false)
}

/// Classify an assignment whose left side targets `module.exports` or a
/// property of `exports`, producing the matching edit
fn rewrite_exports_assignment(
    assign: &AssignmentExpression,
    stmt_span: Span,
    source: &str,
    has_default_export: &mut bool,
) -> Option<Edit> {
    let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
        return None;
    };
    let Expression::Identifier(object) = &member.object else {
        return None;
    };

    // module.exports = ...
    if object.name == "module" && member.property.name == "exports" {
        return Some(Edit {
            span: stmt_span,
            replacement: String::new(),
        });
    }

    if object.name != "exports" {
        return None;
    }

    let name = member.property.name.as_str();
    let value_text = assign.right.span().source_text(source);

    if name == "default" {
        *has_default_export = true;
        return Some(Edit {
            span: stmt_span,
            replacement: format!("Object.assign(window, {});", value_text),
        });
    }

    // Initialization noise: exports.x = void 0;
    if matches!(&assign.right, Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::Void)
        || value_text == "undefined"
    {
        return Some(Edit {
            span: stmt_span,
            replacement: String::new(),
        });
    }

    // Chained initializer noise: exports.a = exports.b = ...
    if let Expression::AssignmentExpression(inner) = &assign.right {
        if let AssignmentTarget::StaticMemberExpression(inner_member) = &inner.left {
            if let Expression::Identifier(inner_object) = &inner_member.object {
                if inner_object.name == "exports" {
                    return Some(Edit {
                        span: stmt_span,
                        replacement: String::new(),
                    });
                }
            }
        }
    }

    // Self-referential passthrough: exports.hello = hello;
    if name == value_text.trim() {
        return Some(Edit {
            span: stmt_span,
            replacement: String::new(),
        });
    }

    Some(Edit {
        span: stmt_span,
        replacement: format!("const {} = {};", name, value_text),
    })
}

/// Splice the collected edits into the original text. Edits arrive in
/// statement order and never overlap.
fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in edits {
        let start = edit.span.start as usize;
        let end = edit.span.end as usize;
        out.push_str(&source[cursor..start]);
        out.push_str(&edit.replacement);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}
