use premock::{
    cli::{commands, Args},
    error::{ErrorSeverity, PremockError},
};
use std::process;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Run the command and get exit code
    let exit_code = run_command(&args);

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(args: &Args) -> i32 {
    match commands::execute(&args.command) {
        Ok(_) => 0,
        Err(err) => {
            // Print user-friendly error message
            eprintln!("\nError: {}", err.user_message());

            // Provide default suggestions based on error type
            match &err {
                PremockError::InvalidPath { .. } => {
                    eprintln!("Suggestion: Check that the path exists and is accessible");
                }
                PremockError::ConfigNotFound { .. } => {
                    eprintln!(
                        "Suggestion: Create a .premock.toml file in your project directory or specify a config file with --config"
                    );
                }
                PremockError::InvalidManifest { .. } => {
                    eprintln!(
                        "Suggestion: Check that the manifest names an existing preload entry and logo file"
                    );
                }
                _ => {}
            }

            // Return appropriate exit code based on error severity
            match err.severity() {
                ErrorSeverity::Warning => 0,
                ErrorSeverity::Error => 1,
                ErrorSeverity::Critical => 2,
            }
        }
    }
}
