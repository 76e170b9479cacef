//! Output formatting functionality
//!
//! Formatters for presenting an [`AnalysisResult`] on the command line,
//! either as human-readable text or as JSON for programmatic consumption.

use crate::error::{PremockError, Result};
use crate::models::{AnalysisResult, ExportEntity};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use std::io::Write;
use std::path::Path;

/// Format an analysis result as human-readable text
pub fn format_analysis_text(analysis: &AnalysisResult, use_colors: bool) -> String {
    let mut output = String::new();

    let heading = |text: &str| {
        if use_colors {
            Style::new().bold().paint(text.to_string()).to_string()
        } else {
            text.to_string()
        }
    };

    output.push_str(&heading("Named exports:"));
    output.push('\n');
    if analysis.named_exports.is_empty() {
        output.push_str("  (none)\n");
    }
    for (name, entity) in &analysis.named_exports {
        output.push_str(&format_entity_line(name, entity, 1, use_colors));
    }

    if let Some(default) = &analysis.default_export {
        output.push('\n');
        output.push_str(&heading("Default export:"));
        output.push('\n');
        for (name, entity) in default {
            output.push_str(&format_entity_line(name, entity, 1, use_colors));
        }
    }

    if !analysis.errors.is_empty() {
        output.push('\n');
        output.push_str(&heading("Diagnostics:"));
        output.push('\n');
        for error in &analysis.errors {
            if use_colors {
                output.push_str(&format!("  {} {}\n", Red.paint("!"), error));
            } else {
                output.push_str(&format!("  ! {}\n", error));
            }
        }
    }

    output
}

fn format_entity_line(name: &str, entity: &ExportEntity, depth: usize, use_colors: bool) -> String {
    let indent = "  ".repeat(depth);
    match entity {
        ExportEntity::Function {
            params,
            mock_return_value,
        } => {
            let label = format!("{}({})", name, params.join(", "));
            let detail = format!("-> {}", mock_return_value);
            if use_colors {
                format!("{}{} {}\n", indent, Cyan.paint(label), Style::new().dimmed().paint(detail))
            } else {
                format!("{}{} {}\n", indent, label, detail)
            }
        }
        ExportEntity::Constant { value } => {
            if use_colors {
                format!("{}{} = {}\n", indent, Green.paint(name.to_string()), value)
            } else {
                format!("{}{} = {}\n", indent, name, value)
            }
        }
        ExportEntity::Object { props } => {
            let mut line = if use_colors {
                format!("{}{}:\n", indent, Yellow.paint(name.to_string()))
            } else {
                format!("{}{}:\n", indent, name)
            };
            for (prop_name, prop_entity) in props {
                line.push_str(&format_entity_line(prop_name, prop_entity, depth + 1, use_colors));
            }
            line
        }
    }
}

/// Format an analysis result as pretty-printed JSON
pub fn format_analysis_json(analysis: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Write output to a file, or to stdout when no path is given
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => std::fs::write(path, content)
            .map_err(|source| PremockError::output_write(path, source)),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(content.as_bytes())
                .map_err(PremockError::io_error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExportMap;

    fn sample_analysis() -> AnalysisResult {
        let mut analysis = AnalysisResult::new();
        analysis.named_exports.insert(
            "greet".to_string(),
            ExportEntity::Function {
                params: vec!["name".to_string()],
                mock_return_value: "''".to_string(),
            },
        );
        analysis.named_exports.insert(
            "version".to_string(),
            ExportEntity::Constant {
                value: "'1.0'".to_string(),
            },
        );
        let mut props = ExportMap::new();
        props.insert(
            "flag".to_string(),
            ExportEntity::Constant {
                value: "true".to_string(),
            },
        );
        analysis
            .named_exports
            .insert("api".to_string(), ExportEntity::Object { props });
        analysis.add_error("Duplicate default export ignored; the first one wins");
        analysis
    }

    #[test]
    fn test_text_format_plain() {
        let text = format_analysis_text(&sample_analysis(), false);
        assert!(text.contains("Named exports:"));
        assert!(text.contains("greet(name) -> ''"));
        assert!(text.contains("version = '1.0'"));
        assert!(text.contains("api:"));
        assert!(text.contains("    flag = true"));
        assert!(text.contains("! Duplicate default export"));
    }

    #[test]
    fn test_text_format_empty_surface() {
        let text = format_analysis_text(&AnalysisResult::new(), false);
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_json_format_roundtrips() {
        let json = format_analysis_json(&sample_analysis()).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_analysis());
    }
}
