use premock::purify;

const COMPILED_BUNDLE: &str = r#""use strict";
Object.defineProperty(exports, "__esModule", { value: true });
exports.VERSION = exports.readFile = void 0;
function readFile(path) {
    return require('fs').readFileSync(path, 'utf-8');
}
const VERSION = '1.2.3';
const api = { readFile, VERSION };
exports.readFile = readFile;
exports.VERSION = VERSION;
exports.default = api;
"#;

#[test]
fn test_full_bundle_cleanup() {
    let purified = purify(COMPILED_BUNDLE).unwrap();

    // No module-convention references survive
    assert!(!purified.code.contains("exports."));
    assert!(!purified.code.contains("defineProperty"));

    // Local declarations are untouched
    assert!(purified.code.contains("function readFile(path) {"));
    assert!(purified.code.contains("const VERSION = '1.2.3';"));
    assert!(purified.code.contains("const api = { readFile, VERSION };"));

    // The default export becomes a window merge and raises the flag
    assert!(purified.code.contains("Object.assign(window, api)"));
    assert!(purified.has_default_export);
}

#[test]
fn test_bundle_without_default_export() {
    let bundle = "\"use strict\";\nconst n = 1;\nexports.n = n;\n";
    let purified = purify(bundle).unwrap();

    assert!(!purified.has_default_export);
    assert!(!purified.code.contains("exports."));
    assert!(purified.code.contains("const n = 1;"));
}

#[test]
fn test_renamed_export_rewritten_to_binding() {
    let bundle = "const impl = () => 1;\nexports.publicName = impl;\n";
    let purified = purify(bundle).unwrap();

    assert!(purified.code.contains("const publicName = impl;"));
    assert!(purified.code.contains("const impl = () => 1;"));
}

#[test]
fn test_purify_is_stable_on_already_clean_code() {
    let clean = "const a = 1;\nfunction f() { return a; }\nconsole.log(f());\n";
    let purified = purify(clean).unwrap();

    assert_eq!(purified.code, clean);
    assert!(!purified.has_default_export);
}

#[test]
fn test_module_exports_object_literal_removed() {
    let bundle = "const lib = {};\nmodule.exports = lib;\nmodule.exports.extra = 1;\n";
    let purified = purify(bundle).unwrap();

    assert!(!purified.code.contains("module.exports = lib;"));
    assert!(purified.code.contains("const lib = {};"));
}
