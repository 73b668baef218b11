//! @ai:module:intent tidyann library for parsing clang-tidy output into CI annotations
//! @ai:module:layer infrastructure
//! @ai:module:public_api diagnostic, matcher, parser, output, error
//! @ai:module:stateless true
//!
//! # tidyann parser
//!
//! A library for turning the captured stdout of a clang-tidy run into
//! structured diagnostics, rendered either as CI log-annotation directives
//! or as collapsible review-comment blocks.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tidyann_parser::{output, parser, ParseConfig};
//! use std::path::Path;
//!
//! // Parse a captured clang-tidy report
//! let config = ParseConfig::from_env();
//! let diags = parser::parse_report_file(Path::new("clang_tidy_report.txt"), &config).unwrap();
//!
//! // Emit one log-annotation directive per finding
//! for diag in &diags {
//!     println!("{}", output::log_command(diag));
//! }
//! ```

pub mod diagnostic;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;

pub use diagnostic::{Diagnostic, ParseConfig, PathConvention};
pub use error::{Error, Result};
pub use matcher::HeaderMatcher;
pub use output::{comment_block, format_diagnostics, log_command, OutputFormat};
pub use parser::{parse_output, parse_report_file, OutputParser};
