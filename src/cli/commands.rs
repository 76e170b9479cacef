//! Command implementations

use super::args::{CliCommand, OutputFormat};
use crate::analyzer;
use crate::config::{self, PluginManifest, Settings};
use crate::error::{PremockError, Result};
use crate::generator::{auto_mock, declarations, user_mock};
use crate::output;
use crate::purifier;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute a parsed command
pub fn execute(command: &CliCommand) -> Result<()> {
    match command {
        CliCommand::Generate {
            manifest,
            name,
            config,
            no_mock,
            quiet,
        } => {
            let settings = resolve_settings(
                manifest.clone(),
                name.clone(),
                config.as_deref(),
                *no_mock,
            )?;
            run_generate(&settings, *quiet)
        }
        CliCommand::Analyze {
            entry,
            output,
            output_file,
            no_colors,
        } => run_analyze(entry, *output, output_file.as_deref(), *no_colors),
        CliCommand::Purify {
            bundle,
            output_file,
            quiet,
        } => run_purify(bundle, output_file.as_deref(), *quiet),
        CliCommand::Init => run_init(),
    }
}

/// Merge settings from defaults, the optional config file and CLI flags
fn resolve_settings(
    manifest: Option<PathBuf>,
    name: Option<String>,
    config: Option<&Path>,
    no_mock: bool,
) -> Result<Settings> {
    let mut partial = match config {
        Some(path) => {
            if !path.exists() {
                return Err(PremockError::ConfigNotFound {
                    path: path.to_path_buf(),
                    #[cfg(not(tarpaulin_include))]
                    backtrace: std::backtrace::Backtrace::capture(),
                });
            }
            config::parse_config_file(path)?
        }
        None => config::find_default_config().unwrap_or_default(),
    };

    // CLI flags take precedence over the config file
    partial.merge_from(config::PartialSettings {
        manifest,
        name,
        mock: if no_mock { Some(false) } else { None },
    });

    Ok(partial.into_settings())
}

/// Analyze the preload entry and write the generated files next to it
fn run_generate(settings: &Settings, quiet: bool) -> Result<()> {
    let manifest = PluginManifest::load(&settings.manifest_path)?;
    let preload_path = manifest.preload.clone();
    let module_id = manifest.module_id();
    let out_dir = preload_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let source_text = fs::read_to_string(&preload_path)
        .map_err(|source| PremockError::source_read(&preload_path, source))?;
    let analysis = analyzer::analyze(&source_text, &preload_path)?;

    for error in &analysis.errors {
        eprintln!("Warning: {}", error);
    }

    // 1. The auto-mock module is regenerated on every run
    let auto_mock_path = out_dir.join(format!("{}.ts", user_mock::AUTO_MOCK_ID));
    let auto_mock_code = auto_mock::generate(&settings.mount_name, &module_id, &analysis);
    fs::write(&auto_mock_path, auto_mock_code)
        .map_err(|source| PremockError::output_write(&auto_mock_path, source))?;
    if !quiet {
        println!("Updated {}", auto_mock_path.display());
    }

    // 2. The user scaffold is seeded once and never overwritten
    if settings.mock_enabled {
        let scaffold_path = out_dir.join(format!("{}.mock.ts", module_id));
        if !scaffold_path.exists() {
            let scaffold_code = user_mock::generate(&settings.mount_name);
            fs::write(&scaffold_path, scaffold_code)
                .map_err(|source| PremockError::output_write(&scaffold_path, source))?;
            if !quiet {
                println!("Created {}", scaffold_path.display());
            }
        }
    }

    // 3. Ambient declarations
    let declaration_path = out_dir.join(format!("_{}.d.ts", module_id));
    let declaration_code = declarations::generate(
        &settings.mount_name,
        &module_id,
        analysis.has_default_export(),
    );
    fs::write(&declaration_path, declaration_code)
        .map_err(|source| PremockError::output_write(&declaration_path, source))?;
    if !quiet {
        println!("Updated {}", declaration_path.display());
    }

    Ok(())
}

/// Analyze one module and print its export surface
fn run_analyze(
    entry: &Path,
    format: OutputFormat,
    output_file: Option<&Path>,
    no_colors: bool,
) -> Result<()> {
    if !entry.exists() {
        return Err(PremockError::InvalidPath {
            path: entry.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let source_text =
        fs::read_to_string(entry).map_err(|source| PremockError::source_read(entry, source))?;
    let analysis = analyzer::analyze(&source_text, entry)?;

    let use_colors = !no_colors && output_file.is_none();
    let content = match format {
        OutputFormat::Text => output::format_analysis_text(&analysis, use_colors),
        OutputFormat::Json => output::format_analysis_json(&analysis)?,
    };
    output::write_output(&content, output_file)
}

/// Purify a compiled bundle and report the default-export flag
fn run_purify(bundle: &Path, output_file: Option<&Path>, quiet: bool) -> Result<()> {
    let compiled_text =
        fs::read_to_string(bundle).map_err(|source| PremockError::source_read(bundle, source))?;
    let purified = purifier::purify(&compiled_text)?;

    output::write_output(&purified.code, output_file)?;
    if !quiet {
        eprintln!(
            "Default export: {}",
            if purified.has_default_export { "yes" } else { "no" }
        );
    }
    Ok(())
}

/// Create a default configuration file in the current directory
fn run_init() -> Result<()> {
    let config_path = PathBuf::from(config::DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;
    println!("Created default configuration file at: {}", config_path.display());
    Ok(())
}
