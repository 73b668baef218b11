//! @ai:module:intent Render diagnostics as annotations, review markup or terminal text
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, log_command, comment_block, format_diagnostics
//! @ai:module:depends_on diagnostic
//! @ai:module:stateless true

use crate::diagnostic::Diagnostic;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
    Markdown,
    Annotations,
}

/// @ai:intent Workflow log level for a diagnostic
///
/// CI log commands only know notice/warning/error, so every note-derived
/// severity maps to "notice"; anything else passes through verbatim.
/// @ai:effects pure
fn level(diag: &Diagnostic) -> &str {
    if diag.severity.starts_with("note") {
        "notice"
    } else {
        &diag.severity
    }
}

/// @ai:intent Render a diagnostic as a single-line CI log-annotation directive
///
/// No escaping is applied to the filename or message; the directive is a
/// flat pass-through of the parsed fields.
/// @ai:effects pure
pub fn log_command(diag: &Diagnostic) -> String {
    format!(
        "::{} file={},line={},title={}:{}:{} [{}]::{}",
        level(diag),
        diag.filename,
        diag.line,
        diag.filename,
        diag.line,
        diag.column,
        diag.check_id,
        diag.message,
    )
}

/// @ai:intent Render a diagnostic as a collapsible review-comment block
/// @ai:post markup is byte-stable; consumed verbatim by the review platform
/// @ai:effects pure
pub fn comment_block(diag: &Diagnostic) -> String {
    let excerpt: String = diag.excerpt.iter().map(|l| format!("{}\n", l)).collect();

    format!(
        "<details open>\n<summary><strong>{}:{}:{}:</strong> {}: [{}]\
         \n\n> {}\n</summary><p>\n\n```{}\n{}```\n</p>\n</details>\n\n",
        diag.filename,
        diag.line,
        diag.column,
        diag.severity,
        diag.check_id,
        diag.message,
        diag.extension(),
        excerpt,
    )
}

/// @ai:intent Format a parsed report as a string
/// @ai:effects pure
pub fn format_diagnostics(diags: &[Diagnostic], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(diags).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(diags).unwrap_or_default(),
        OutputFormat::Markdown => diags.iter().map(comment_block).collect(),
        OutputFormat::Annotations => diags.iter().map(|d| format!("{}\n", log_command(d))).collect(),
        OutputFormat::Text => format_text(diags),
    }
}

/// @ai:intent Format a parsed report as human-readable terminal text
/// @ai:effects pure
fn format_text(diags: &[Diagnostic]) -> String {
    let mut output = String::new();

    for diag in diags {
        let severity_str = if diag.severity.starts_with("error") {
            "ERROR".red().bold()
        } else if diag.severity.starts_with("warning") {
            "WARN".yellow().bold()
        } else if diag.severity.starts_with("note") {
            "NOTE".blue()
        } else {
            diag.severity.as_str().bold()
        };

        let location = format!("{}:{}:{}", diag.filename, diag.line, diag.column);

        output.push_str(&format!(
            "{} {} - {} ({})\n",
            severity_str,
            location.dimmed(),
            diag.message,
            diag.check_id.dimmed()
        ));

        for line in &diag.excerpt {
            output.push_str(&format!("  {}\n", line.dimmed()));
        }
    }

    output.push('\n');

    let errors = diags.iter().filter(|d| d.severity.starts_with("error")).count();
    let warnings = diags.iter().filter(|d| d.severity.starts_with("warning")).count();
    let notes = diags.iter().filter(|d| d.severity.starts_with("note")).count();

    if diags.is_empty() {
        output.push_str(&format!("{} No diagnostics found\n", "OK".green().bold()));
    } else {
        output.push_str(&format!(
            "{} diagnostics: {} errors, {} warnings, {} notes\n",
            diags.len(),
            errors.to_string().red().bold(),
            warnings.to_string().yellow(),
            notes.to_string().blue()
        ));
    }

    output
}
