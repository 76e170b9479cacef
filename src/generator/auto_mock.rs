//! Auto-mock module generation
//!
//! Renders an [`AnalysisResult`] into a TypeScript module exporting one
//! `autoMock` object: an optional `window` section mirroring the default
//! export and one mount-point section mirroring the named exports. Output is
//! a pure function of its inputs, so regeneration is byte-stable.

use crate::models::{AnalysisResult, ExportEntity, ExportMap};

/// Generate the auto-mock module for an analyzed export surface.
///
/// `mount_name` is the configured global the named exports mount under;
/// `module_id` is the entry file's stem, used to reference the sibling
/// ambient declaration file.
pub fn generate(mount_name: &str, module_id: &str, analysis: &AnalysisResult) -> String {
    let default_body = analysis
        .default_export
        .as_ref()
        .map(|props| render_entries(props, 2))
        .unwrap_or_default();
    let named_body = render_entries(&analysis.named_exports, 2);

    let mut out = String::new();
    out.push_str("// Do not edit this file directly; it is overwritten on every build.\n");
    out.push_str("// Generated by premock.\n");
    out.push_str(&format!(
        "import type {{ ExportsTypesForMock }} from './_{}.d';\n\n",
        module_id
    ));
    out.push_str("export const autoMock: ExportsTypesForMock = {");
    if !default_body.is_empty() {
        out.push_str("\n\t// Generated implementations mounted directly on window\n");
        out.push_str(&format!("\twindow:{{\n{}}},", default_body));
    }
    if !named_body.is_empty() {
        out.push_str("\n\t// Generated implementations mounted on the configured global\n");
        out.push_str(&format!("\t{}: {{\n{}\n\t}}", mount_name, named_body));
    }
    out.push_str("\n}\n");
    out
}

/// Render one export map as tab-indented object members, preserving
/// insertion order
fn render_entries(exports: &ExportMap, indent_level: usize) -> String {
    let indent = "\t".repeat(indent_level);
    let mut members: Vec<String> = Vec::new();

    for (name, entity) in exports {
        let mut definition = indent.clone();
        match entity {
            ExportEntity::Object { props } => {
                definition.push_str(&format!(
                    "{}: {{\n{}\n{}}}",
                    name,
                    render_entries(props, indent_level + 1),
                    indent
                ));
            }
            ExportEntity::Constant { value } => {
                definition.push_str(&format!("{}: {}", name, value));
            }
            ExportEntity::Function {
                params,
                mock_return_value,
            } => {
                definition.push_str(&format!(
                    "{}({}) {{\n{}return {};\n{}}}",
                    name,
                    params.join(", "),
                    "\t".repeat(indent_level + 1),
                    mock_return_value,
                    indent
                ));
            }
        }
        members.push(definition);
    }

    members.join(",\n")
}
