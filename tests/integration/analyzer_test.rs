use premock::{analyze, ExportEntity, UNRESOLVED_VALUE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_module(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn analyze_file(path: &Path) -> premock::AnalysisResult {
    let source = fs::read_to_string(path).unwrap();
    analyze(&source, path).unwrap()
}

#[test]
fn test_reexport_chain_resolves_across_files() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "values.ts", "export const X = 'v';\n");
    let entry = write_module(&dir, "preload.ts", "export { X } from './values';\n");

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["X"],
        ExportEntity::Constant { value: "'v'".into() }
    );
}

#[test]
fn test_reexport_with_alias_keeps_exported_name() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "values.ts", "export const original = 7;\n");
    let entry = write_module(
        &dir,
        "preload.ts",
        "export { original as renamed } from './values';\n",
    );

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["renamed"],
        ExportEntity::Constant { value: "7".into() }
    );
    assert!(!result.named_exports.contains_key("original"));
}

#[test]
fn test_imported_then_exported_binding() {
    let dir = TempDir::new().unwrap();
    write_module(
        &dir,
        "helpers.ts",
        "export function greet(name): string { return name; }\n",
    );
    let entry = write_module(
        &dir,
        "preload.ts",
        "import { greet } from './helpers';\nexport { greet };\n",
    );

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["greet"],
        ExportEntity::Function {
            params: vec!["name".into()],
            mock_return_value: "''".into(),
        }
    );
}

#[test]
fn test_wildcard_reexport_merges_named_exports() {
    let dir = TempDir::new().unwrap();
    write_module(
        &dir,
        "extra.ts",
        "export const a = 1;\nexport const b = 'two';\n",
    );
    let entry = write_module(
        &dir,
        "preload.ts",
        "export const local = true;\nexport * from './extra';\n",
    );

    let result = analyze_file(&entry);
    assert_eq!(result.named_exports.len(), 3);
    assert_eq!(
        result.named_exports["a"],
        ExportEntity::Constant { value: "1".into() }
    );
    assert_eq!(
        result.named_exports["b"],
        ExportEntity::Constant { value: "'two'".into() }
    );
}

#[test]
fn test_wildcard_reexport_later_merge_overwrites() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "first.ts", "export const shared = 'first';\n");
    write_module(&dir, "second.ts", "export const shared = 'second';\n");
    let entry = write_module(
        &dir,
        "preload.ts",
        "export * from './first';\nexport * from './second';\n",
    );

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["shared"],
        ExportEntity::Constant { value: "'second'".into() }
    );
}

#[test]
fn test_namespace_reexport_nests_under_key() {
    let dir = TempDir::new().unwrap();
    write_module(
        &dir,
        "ns.ts",
        "export const inner = 5;\nexport default { flag: true };\n",
    );
    let entry = write_module(&dir, "preload.ts", "export * as ns from './ns';\n");

    let result = analyze_file(&entry);
    let ExportEntity::Object { props } = &result.named_exports["ns"] else {
        panic!("expected namespace object entity");
    };
    assert_eq!(
        props["inner"],
        ExportEntity::Constant { value: "5".into() }
    );
    let ExportEntity::Object { props: default } = &props["default"] else {
        panic!("expected nested default object");
    };
    assert_eq!(
        default["flag"],
        ExportEntity::Constant { value: "true".into() }
    );
}

#[test]
fn test_default_reexport_wraps_target_default() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "settings.ts", "export default { debug: false };\n");
    let entry = write_module(
        &dir,
        "preload.ts",
        "export { default as settings } from './settings';\n",
    );

    let result = analyze_file(&entry);
    let ExportEntity::Object { props } = &result.named_exports["settings"] else {
        panic!("expected object entity for re-exported default");
    };
    assert_eq!(
        props["debug"],
        ExportEntity::Constant { value: "false".into() }
    );
}

#[test]
fn test_unreadable_reexport_target_degrades_to_placeholder() {
    let dir = TempDir::new().unwrap();
    let entry = write_module(
        &dir,
        "preload.ts",
        "export { gone } from './never-written';\n",
    );

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["gone"],
        ExportEntity::Constant {
            value: UNRESOLVED_VALUE.into()
        }
    );
}

#[test]
fn test_js_extension_fallback() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "legacy.js", "export const old = 'js';\n");
    let entry = write_module(&dir, "preload.ts", "export { old } from './legacy';\n");

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["old"],
        ExportEntity::Constant { value: "'js'".into() }
    );
}

#[test]
fn test_default_import_reexported_as_named() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "api.ts", "export default { ping: 'pong' };\n");
    let entry = write_module(
        &dir,
        "preload.ts",
        "import api from './api';\nexport { api };\n",
    );

    let result = analyze_file(&entry);
    let ExportEntity::Object { props } = &result.named_exports["api"] else {
        panic!("expected object entity");
    };
    assert_eq!(
        props["ping"],
        ExportEntity::Constant { value: "'pong'".into() }
    );
}

#[test]
fn test_reexport_cycle_terminates() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "a.ts", "export { fromB } from './b';\nexport const hereA = 1;\n");
    write_module(&dir, "b.ts", "export { hereA as fromB } from './a';\n");
    let entry = write_module(&dir, "preload.ts", "export { fromB } from './a';\n");

    // Must terminate; the cycle resolves as the placeholder rather than
    // recursing forever
    let result = analyze_file(&entry);
    assert!(result.named_exports.contains_key("fromB"));
}

#[test]
fn test_nested_reexport_chain_of_three_modules() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "deep.ts", "export const leaf = [1, 2, 3];\n");
    write_module(&dir, "middle.ts", "export { leaf } from './deep';\n");
    let entry = write_module(&dir, "preload.ts", "export { leaf } from './middle';\n");

    let result = analyze_file(&entry);
    assert_eq!(
        result.named_exports["leaf"],
        ExportEntity::Constant { value: "[1, 2, 3]".into() }
    );
}

#[test]
fn test_entry_path_need_not_exist() {
    // The entry call takes in-memory text; only re-export targets touch disk
    let result = analyze("export const x = 1;", Path::new("/nonexistent/preload.ts")).unwrap();
    assert_eq!(
        result.named_exports["x"],
        ExportEntity::Constant { value: "1".into() }
    );
}
