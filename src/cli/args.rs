//! Command-line argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// premock - preload export analyzer and mock generator
#[derive(Parser, Debug)]
#[command(name = "premock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze a preload module's export surface and generate mock, scaffold and declaration files")]
#[command(long_about = "premock statically analyzes the export surface of a preload entry module \
(TypeScript or JavaScript) and generates a browser-safe auto-mock module, a one-time user-editable \
mock scaffold, and an ambient type declaration file. It can also purify a compiled CommonJS bundle \
into flat global-namespace assignments for browser loading.")]
#[command(after_help = "EXAMPLES:

Generation:
    # Generate mock and declaration files next to the preload entry
    premock generate

    # Use a specific manifest and mount the named exports under window.bridge
    premock generate --manifest ./conf/plugin.json --name bridge

Inspection:
    # Print the analyzed export surface
    premock analyze ./src/preload.ts

    # Machine-readable output
    premock analyze ./src/preload.ts --output json --output-file surface.json

Bundle cleanup:
    # Rewrite a compiled CommonJS bundle for browser loading
    premock purify ./dist/preload.js --output-file ./dist/preload.clean.js

Configuration:
    # Create a default .premock.toml in the current directory
    premock init
")]
pub struct Args {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze the preload entry and write the generated mock, scaffold and
    /// declaration files
    Generate {
        /// Path to the plugin manifest (defaults to plugin.json)
        #[arg(short, long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Mount-point name for named exports (defaults to 'preload')
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,

        /// Configuration file path (defaults to .premock.toml if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip mock scaffold generation
        #[arg(long)]
        no_mock: bool,

        /// Suppress non-essential output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Analyze a module's export surface and print it
    Analyze {
        /// Module file to analyze
        entry: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Output file path (stdout if not specified)
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_colors: bool,
    },

    /// Purify a compiled CommonJS bundle into browser-loadable form
    Purify {
        /// Compiled bundle file
        bundle: PathBuf,

        /// Output file path (stdout if not specified)
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,

        /// Suppress non-essential output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Create a default configuration file (.premock.toml)
    Init,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
