//! @ai:module:intent Scan clang-tidy output and accumulate diagnostics in order
//! @ai:module:layer application
//! @ai:module:public_api OutputParser, parse_output, parse_report_file
//! @ai:module:depends_on matcher, diagnostic, error
//! @ai:module:stateless true

use crate::diagnostic::{Diagnostic, ParseConfig};
use crate::error::{Error, Result};
use crate::matcher::HeaderMatcher;
use std::path::Path;

/// @ai:intent Line-at-a-time accumulator for clang-tidy output
///
/// A header line opens a new diagnostic; every following non-header line is
/// appended to that diagnostic's excerpt until the next header. Non-header
/// lines seen before the first header have no owner and are dropped.
///
/// The parser is feedable incrementally: diagnostics parsed before a
/// malformed header remain readable after the failing `feed_line`.
pub struct OutputParser {
    matcher: HeaderMatcher,
    config: ParseConfig,
    diagnostics: Vec<Diagnostic>,
}

impl OutputParser {
    /// @ai:intent Create an empty parser for one pass over captured output
    pub fn new(config: ParseConfig) -> Self {
        Self {
            matcher: HeaderMatcher::new(),
            config,
            diagnostics: Vec::new(),
        }
    }

    /// @ai:intent Route one line to a new diagnostic or the current excerpt
    /// @ai:post diagnostics keep input order; excerpts keep line order
    /// @ai:effects state:write
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        if self.matcher.is_header(line) {
            let diagnostic = Diagnostic::from_header_line(line, &self.config)?;
            self.diagnostics.push(diagnostic);
        } else if let Some(current) = self.diagnostics.last_mut() {
            current.push_excerpt_line(line);
        } else {
            tracing::debug!("discarding line before first header: {}", line);
        }

        Ok(())
    }

    /// @ai:intent Diagnostics accumulated so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// @ai:intent Consume the parser, yielding the ordered diagnostics
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// @ai:intent Parse a whole captured output blob, all-or-nothing
/// @ai:post Err on any malformed header; Ok(empty) for output with no findings
/// @ai:effects pure
pub fn parse_output(text: &str, config: &ParseConfig) -> Result<Vec<Diagnostic>> {
    let mut parser = OutputParser::new(config.clone());

    for line in text.lines() {
        parser.feed_line(line)?;
    }

    Ok(parser.finish())
}

/// @ai:intent Parse a clang-tidy report captured to a file
/// @ai:effects fs:read
pub fn parse_report_file(path: &Path, config: &ParseConfig) -> Result<Vec<Diagnostic>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_output(&text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::PathConvention;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
12 warnings generated.
src/demo.cpp:12:5: warning: unused variable 'x' [clang-diagnostic-unused-variable]
    int x = 0;
        ^
src/demo.cpp:20:9: note: previous declaration here [clang-diagnostic-shadow]
    int shadowed;
        ^
src/util.hpp:3:1: error: expected a type [clang-diagnostic-error]
missing_type value;
^
";

    fn config() -> ParseConfig {
        ParseConfig::new(PathConvention::Slash, "/home/runner/project")
    }

    #[test]
    fn test_parse_output_groups_excerpts() {
        let diags = parse_output(SAMPLE, &config()).unwrap();

        assert_eq!(diags.len(), 3);
        assert_eq!(diags[0].check_id, "clang-diagnostic-unused-variable");
        assert_eq!(diags[0].excerpt, vec!["    int x = 0;", "        ^"]);
        assert_eq!(diags[1].severity, "note");
        assert_eq!(diags[1].excerpt, vec!["    int shadowed;", "        ^"]);
        assert_eq!(diags[2].severity, "error");
        assert_eq!(diags[2].excerpt, vec!["missing_type value;", "^"]);
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let diags = parse_output(SAMPLE, &config()).unwrap();

        assert!(diags
            .iter()
            .all(|d| d.excerpt.iter().all(|l| !l.contains("warnings generated"))));
    }

    #[test]
    fn test_empty_output_is_a_valid_success() {
        let diags = parse_output("no diagnostics today\n", &config()).unwrap();
        assert!(diags.is_empty());
    }

    #[test]
    fn test_malformed_header_aborts_whole_blob() {
        // header-shaped, but the message smuggles in a sixth colon field
        let text = "\
src/a.cpp:1:2: warning: fine [check-a]
src/a.cpp:3:4: warning: expected ':' token [check-b]
";
        let err = parse_output(text, &config()).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }));
    }

    #[test]
    fn test_streaming_parser_keeps_prior_records() {
        let mut parser = OutputParser::new(config());
        parser
            .feed_line("src/a.cpp:1:2: warning: fine [check-a]")
            .unwrap();
        parser.feed_line("    int y;").unwrap();

        let err = parser
            .feed_line("src/a.cpp:3:4: warning: expected ':' token [check-b]")
            .unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }));

        assert_eq!(parser.diagnostics().len(), 1);
        assert_eq!(parser.diagnostics()[0].check_id, "check-a");
        assert_eq!(parser.diagnostics()[0].excerpt, vec!["    int y;"]);
    }

    #[test]
    fn test_excerpt_concatenation_round_trips() {
        let diags = parse_output(SAMPLE, &config()).unwrap();

        let joined: String = diags[0]
            .excerpt
            .iter()
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(joined, "    int x = 0;\n        ^\n");
    }

    #[test]
    fn test_parse_report_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let diags = parse_report_file(file.path(), &config()).unwrap();
        assert_eq!(diags.len(), 3);
    }

    #[test]
    fn test_missing_report_file_is_a_read_error() {
        let err = parse_report_file(Path::new("does/not/exist.txt"), &config()).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
