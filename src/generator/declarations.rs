//! Ambient declaration generation
//!
//! Emits the type-only declaration file describing an entry module's export
//! surface: the named-export type, optionally the default-export type, the
//! `ExportsTypesForMock` interface consumed by the auto-mock module, and a
//! global augmentation declaring the configured mount point on `Window`.

/// Generate the ambient declaration file contents.
///
/// The presence of a default export switches on the default-type import, its
/// alias, and the `Window` inheritance clause.
pub fn generate(mount_name: &str, module_id: &str, has_default_export: bool) -> String {
    let mut out = String::new();
    out.push_str("// Generated by premock. Do not edit this file.\n");
    if has_default_export {
        out.push_str(&format!("import type defaultExport from './{}'\n", module_id));
    }
    out.push_str(&format!("import type * as namedExports from './{}'\n\n", module_id));

    if has_default_export {
        out.push_str("export type PreloadDefaultType = typeof defaultExport\n");
    }
    out.push_str("export type PreloadNamedExportsType = typeof namedExports\n\n");

    out.push_str("export interface ExportsTypesForMock {\n");
    if has_default_export {
        out.push_str("\twindow: PreloadDefaultType,\n");
    }
    out.push_str(&format!(
        "\t{}: Omit<PreloadNamedExportsType, 'default'>,\n",
        mount_name
    ));
    out.push_str("}\n\n");

    out.push_str("declare global {\n");
    if has_default_export {
        out.push_str("\tinterface Window extends PreloadDefaultType {\n");
    } else {
        out.push_str("\tinterface Window {\n");
    }
    out.push_str(&format!("\t\t{}: PreloadNamedExportsType;\n", mount_name));
    out.push_str("\t}\n");
    out.push_str("}\n");
    out
}
