//! @ai:module:intent Recognize diagnostic header lines in clang-tidy output
//! @ai:module:layer domain
//! @ai:module:public_api HeaderMatcher
//! @ai:module:stateless true

use regex::Regex;

/// @ai:intent Syntactic recognizer for diagnostic header lines
///
/// A header line has the shape
/// `<path>:<line>:<col>: <severity>: <message> [<check-id>]`, anchored at
/// both ends. The check is purely syntactic: a header-shaped line quoted
/// inside an excerpt block is indistinguishable from a real header and will
/// start a new record. Known limitation of the line-oriented format.
pub struct HeaderMatcher {
    pattern: Regex,
}

impl HeaderMatcher {
    /// @ai:intent Create a matcher with the header pattern compiled once
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^.*:\d+:\d+:\s\w+:.*\[.*\]$").expect("Invalid regex pattern"),
        }
    }

    /// @ai:intent Decide whether a line opens a new diagnostic
    /// @ai:post true implies two integer fields, a severity word and a trailing bracket
    /// @ai:effects pure
    pub fn is_header(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl Default for HeaderMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_warning_header() {
        let matcher = HeaderMatcher::new();
        assert!(matcher.is_header(
            "src/demo.cpp:12:5: warning: unused variable 'x' [clang-diagnostic-unused-variable]"
        ));
    }

    #[test]
    fn test_matches_windows_path_header() {
        let matcher = HeaderMatcher::new();
        assert!(matcher.is_header(r"C:\src\demo.cpp:12:5: warning: unused variable [check-x]"));
    }

    #[test]
    fn test_rejects_excerpt_line() {
        let matcher = HeaderMatcher::new();
        assert!(!matcher.is_header("    int x = 0;"));
        assert!(!matcher.is_header("         ^"));
    }

    #[test]
    fn test_rejects_header_without_check_id() {
        let matcher = HeaderMatcher::new();
        assert!(!matcher.is_header("src/demo.cpp:12:5: warning: unused variable"));
    }

    #[test]
    fn test_rejects_non_numeric_location() {
        let matcher = HeaderMatcher::new();
        assert!(!matcher.is_header("src/demo.cpp:a:5: warning: unused variable [check-x]"));
    }

    #[test]
    fn test_rejects_trailing_content_after_bracket() {
        let matcher = HeaderMatcher::new();
        assert!(!matcher.is_header("src/demo.cpp:12:5: warning: unused [check-x] tail"));
    }
}
