//! @ai:module:intent CLI entry point for the tidyann parser
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on parser, output

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tidyann_parser::{output, parser, OutputFormat, ParseConfig};

#[derive(Parser)]
#[command(name = "tidyann")]
#[command(author, version, about = "tidyann - turn clang-tidy output into CI annotations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a captured clang-tidy report and show the findings
    Parse {
        /// Path to the captured report, or "-" for stdin
        #[arg(default_value = "clang_tidy_report.txt")]
        report: PathBuf,

        /// Strip this prefix from absolute paths instead of the working directory
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,

        /// Fail with exit code 1 if any diagnostics are found
        #[arg(long, default_value = "false")]
        fail_on_diagnostics: bool,
    },

    /// Emit one workflow log-annotation directive per finding
    Annotate {
        /// Path to the captured report, or "-" for stdin
        #[arg(default_value = "clang_tidy_report.txt")]
        report: PathBuf,

        /// Strip this prefix from absolute paths instead of the working directory
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Emit a review-comment body with one collapsible block per finding
    Comment {
        /// Path to the captured report, or "-" for stdin
        #[arg(default_value = "clang_tidy_report.txt")]
        report: PathBuf,

        /// Strip this prefix from absolute paths instead of the working directory
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
    Markdown,
    Annotations,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
            Format::Markdown => OutputFormat::Markdown,
            Format::Annotations => OutputFormat::Annotations,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            report,
            root,
            format,
            fail_on_diagnostics,
        } => match load_report(&report, root) {
            Ok(diags) => {
                print!("{}", output::format_diagnostics(&diags, format.into()));

                if fail_on_diagnostics && !diags.is_empty() {
                    ExitCode::from(1)
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Annotate { report, root } => match load_report(&report, root) {
            Ok(diags) => {
                print!(
                    "{}",
                    output::format_diagnostics(&diags, OutputFormat::Annotations)
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Comment { report, root } => match load_report(&report, root) {
            Ok(diags) => {
                print!(
                    "{}",
                    output::format_diagnostics(&diags, OutputFormat::Markdown)
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}

/// @ai:intent Read the report from a file or stdin and parse it
/// @ai:effects fs:read
fn load_report(
    report: &Path,
    root: Option<PathBuf>,
) -> tidyann_parser::Result<Vec<tidyann_parser::Diagnostic>> {
    let mut config = ParseConfig::from_env();
    if let Some(root) = root {
        config.project_root = root;
    }

    if report.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        tracing::info!("parsing report from stdin");
        parser::parse_output(&text, &config)
    } else {
        tracing::info!("parsing report from {}", report.display());
        parser::parse_report_file(report, &config)
    }
}
