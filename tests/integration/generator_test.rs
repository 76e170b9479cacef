use premock::analyze;
use premock::generator::{auto_mock, declarations, user_mock};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PRELOAD_FIXTURE: &str = r#"
export const VERSION = '1.2.3';
export function readFile(path): string { return ''; }
export const helpers = {
    retries: 3,
    delay(ms): Promise<void> { return new Promise(() => {}); },
};
export default { badge: true };
"#;

#[test]
fn test_generated_mock_mirrors_surface() {
    let analysis = analyze(PRELOAD_FIXTURE, Path::new("preload.ts")).unwrap();
    let code = auto_mock::generate("preload", "preload", &analysis);

    // Named section mirrors each export at depth two
    assert!(code.contains("\t\tVERSION: '1.2.3',"));
    assert!(code.contains("\t\treadFile(path) {"));
    assert!(code.contains("\t\t\treturn '';"));
    assert!(code.contains("\t\thelpers: {"));
    assert!(code.contains("\t\t\tretries: 3,"));
    assert!(code.contains("\t\t\tdelay(ms) {"));
    assert!(code.contains("\t\t\t\treturn Promise.resolve();"));

    // Default export mirrors into the window section
    assert!(code.contains("window:{"));
    assert!(code.contains("badge: true"));
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let analysis = analyze(PRELOAD_FIXTURE, Path::new("preload.ts")).unwrap();

    let first = auto_mock::generate("preload", "preload", &analysis);
    let second = auto_mock::generate("preload", "preload", &analysis);
    assert_eq!(first, second);

    let reanalyzed = analyze(PRELOAD_FIXTURE, Path::new("preload.ts")).unwrap();
    let third = auto_mock::generate("preload", "preload", &reanalyzed);
    assert_eq!(first, third);
}

#[test]
fn test_declarations_follow_default_export_flag() {
    let analysis = analyze(PRELOAD_FIXTURE, Path::new("preload.ts")).unwrap();
    assert!(analysis.has_default_export());

    let with_default = declarations::generate("preload", "preload", true);
    assert!(with_default.contains("interface Window extends PreloadDefaultType {"));

    let without_default = declarations::generate("preload", "preload", false);
    assert!(without_default.contains("\tinterface Window {\n"));
    assert!(!without_default.contains("PreloadDefaultType"));
}

#[test]
fn test_scaffold_written_only_when_absent() {
    let dir = TempDir::new().unwrap();
    let scaffold_path = dir.path().join("preload.mock.ts");

    // Caller-side idempotence contract: seed once, never overwrite
    if !scaffold_path.exists() {
        fs::write(&scaffold_path, user_mock::generate("preload")).unwrap();
    }
    let seeded = fs::read_to_string(&scaffold_path).unwrap();
    assert!(seeded.contains("export default autoMock;"));

    let user_edited = "// my custom mocks\nexport default {};\n";
    fs::write(&scaffold_path, user_edited).unwrap();

    if !scaffold_path.exists() {
        fs::write(&scaffold_path, user_mock::generate("preload")).unwrap();
    }
    assert_eq!(fs::read_to_string(&scaffold_path).unwrap(), user_edited);
}

#[test]
fn test_mock_references_declaration_sibling() {
    let analysis = analyze("export const x = 1;", Path::new("bridge.ts")).unwrap();
    let code = auto_mock::generate("bridge", "bridge", &analysis);
    assert!(code.contains("import type { ExportsTypesForMock } from './_bridge.d';"));
}
