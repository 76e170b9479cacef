use premock::cli::{commands, CliCommand};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PRELOAD: &str = r#"
export const VERSION = '0.1.0';
export function ping(): string { return 'pong'; }
"#;

fn scaffold_project(dir: &TempDir) -> PathBuf {
    fs::write(dir.path().join("logo.png"), b"png").unwrap();
    fs::write(dir.path().join("preload.ts"), PRELOAD).unwrap();
    let manifest = dir.path().join("plugin.json");
    fs::write(
        &manifest,
        r#"{ "name": "demo", "logo": "logo.png", "preload": "preload.ts" }"#,
    )
    .unwrap();
    manifest
}

fn generate_command(manifest: PathBuf) -> CliCommand {
    CliCommand::Generate {
        manifest: Some(manifest),
        name: None,
        config: None,
        no_mock: false,
        quiet: true,
    }
}

#[test]
fn test_generate_writes_all_outputs() {
    let dir = TempDir::new().unwrap();
    let manifest = scaffold_project(&dir);

    commands::execute(&generate_command(manifest)).unwrap();

    let auto_mock = fs::read_to_string(dir.path().join("_mock.auto.ts")).unwrap();
    assert!(auto_mock.contains("VERSION: '0.1.0'"));
    assert!(auto_mock.contains("ping() {"));
    assert!(auto_mock.contains("return '';"));

    let scaffold = fs::read_to_string(dir.path().join("preload.mock.ts")).unwrap();
    assert!(scaffold.contains("export default autoMock;"));

    let declarations = fs::read_to_string(dir.path().join("_preload.d.ts")).unwrap();
    assert!(declarations.contains("preload: Omit<PreloadNamedExportsType, 'default'>,"));
    assert!(!declarations.contains("PreloadDefaultType"));
}

#[test]
fn test_generate_never_overwrites_user_scaffold() {
    let dir = TempDir::new().unwrap();
    let manifest = scaffold_project(&dir);
    let scaffold_path = dir.path().join("preload.mock.ts");

    commands::execute(&generate_command(manifest.clone())).unwrap();
    let user_edited = "// hand-written mocks\nexport default {};\n";
    fs::write(&scaffold_path, user_edited).unwrap();

    commands::execute(&generate_command(manifest)).unwrap();
    assert_eq!(fs::read_to_string(&scaffold_path).unwrap(), user_edited);
}

#[test]
fn test_generate_regenerates_auto_mock_on_change() {
    let dir = TempDir::new().unwrap();
    let manifest = scaffold_project(&dir);

    commands::execute(&generate_command(manifest.clone())).unwrap();

    fs::write(
        dir.path().join("preload.ts"),
        "export const VERSION = '0.2.0';\n",
    )
    .unwrap();
    commands::execute(&generate_command(manifest)).unwrap();

    let auto_mock = fs::read_to_string(dir.path().join("_mock.auto.ts")).unwrap();
    assert!(auto_mock.contains("VERSION: '0.2.0'"));
    assert!(!auto_mock.contains("ping"));
}

#[test]
fn test_generate_with_no_mock_skips_scaffold() {
    let dir = TempDir::new().unwrap();
    let manifest = scaffold_project(&dir);

    commands::execute(&CliCommand::Generate {
        manifest: Some(manifest),
        name: None,
        config: None,
        no_mock: true,
        quiet: true,
    })
    .unwrap();

    assert!(dir.path().join("_mock.auto.ts").exists());
    assert!(!dir.path().join("preload.mock.ts").exists());
}

#[test]
fn test_generate_with_custom_mount_name() {
    let dir = TempDir::new().unwrap();
    let manifest = scaffold_project(&dir);

    commands::execute(&CliCommand::Generate {
        manifest: Some(manifest),
        name: Some("bridge".to_string()),
        config: None,
        no_mock: false,
        quiet: true,
    })
    .unwrap();

    let auto_mock = fs::read_to_string(dir.path().join("_mock.auto.ts")).unwrap();
    assert!(auto_mock.contains("\tbridge: {"));

    let declarations = fs::read_to_string(dir.path().join("_preload.d.ts")).unwrap();
    assert!(declarations.contains("\t\tbridge: PreloadNamedExportsType;"));
}

#[test]
fn test_generate_fails_on_invalid_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("plugin.json");
    fs::write(&manifest, r#"{ "name": "demo" }"#).unwrap();

    let err = commands::execute(&generate_command(manifest)).unwrap_err();
    assert!(err.is_critical());
}
