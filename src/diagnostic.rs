//! @ai:module:intent Decode clang-tidy notification headers into structured diagnostics
//! @ai:module:layer domain
//! @ai:module:public_api Diagnostic, ParseConfig, PathConvention
//! @ai:module:depends_on error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// @ai:intent Path syntax convention of the platform that produced the output
///
/// Under `DriveLetter`, an absolute path may start with `C:\`, so the drive
/// colon is mistaken for a field separator when the header is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathConvention {
    Slash,
    DriveLetter,
}

impl PathConvention {
    /// @ai:intent Convention of the host platform
    /// @ai:effects pure
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::DriveLetter
        } else {
            Self::Slash
        }
    }

    /// @ai:intent Whether paths may carry an embedded drive-letter colon
    /// @ai:effects pure
    pub fn is_drive_letter(&self) -> bool {
        matches!(self, Self::DriveLetter)
    }

    /// @ai:intent Path separator used by this convention
    /// @ai:effects pure
    pub fn separator(&self) -> char {
        match self {
            Self::Slash => '/',
            Self::DriveLetter => '\\',
        }
    }
}

/// @ai:intent Configuration for one parse pass
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub convention: PathConvention,
    pub project_root: PathBuf,
}

impl ParseConfig {
    /// @ai:intent Create a config with an explicit convention and project root
    pub fn new(convention: PathConvention, project_root: impl Into<PathBuf>) -> Self {
        Self {
            convention,
            project_root: project_root.into(),
        }
    }

    /// @ai:intent Derive the config from the host platform and working directory
    /// @ai:effects env
    pub fn from_env() -> Self {
        Self {
            convention: PathConvention::host(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// @ai:intent One finding reported by clang-tidy
///
/// `severity` is kept verbatim rather than coerced into an enum: clang-tidy
/// emits "warning", "error", "note" and note-derived subkinds, and the full
/// vocabulary is not known in advance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub filename: String,
    pub line: u32,
    pub column: u32,
    pub severity: String,
    pub check_id: String,
    pub message: String,
    pub excerpt: Vec<String>,
}

impl Diagnostic {
    /// @ai:intent Decompose a header line into a diagnostic with an empty excerpt
    /// @ai:pre header matched the header line shape
    /// @ai:post excerpt is empty, line and column are 1-based
    /// @ai:effects pure
    pub fn from_header_line(header: &str, config: &ParseConfig) -> Result<Self> {
        let split: Vec<&str> = header.split(':').collect();

        // A drive-letter path contributes one extra colon. The merge only
        // fires above 5 fields: at exactly 5 there is no drive letter.
        let merge = config.convention.is_drive_letter() && split.len() > 5;
        let (filename, rest) = if merge {
            (format!("{}:{}", split[0], split[1]), &split[2..])
        } else {
            (split[0].to_string(), &split[1..])
        };

        if rest.len() != 4 {
            return Err(Error::MalformedHeader {
                line: header.to_string(),
                reason: format!(
                    "expected 5 colon-separated fields, found {}",
                    rest.len() + 1
                ),
            });
        }

        let line = parse_position(rest[0], "line number", header)?;
        let column = parse_position(rest[1], "column", header)?;
        let severity = rest[2].trim().to_string();
        let (check_id, message) = split_check_id(rest[3], header)?;

        Ok(Self {
            filename: strip_project_root(&filename, config),
            line,
            column,
            severity,
            check_id,
            message,
            excerpt: Vec::new(),
        })
    }

    /// @ai:intent Append one raw excerpt line to this diagnostic
    pub fn push_excerpt_line(&mut self, line: &str) {
        self.excerpt.push(line.to_string());
    }

    /// @ai:intent File extension with its leading dot, or "" when absent
    /// @ai:example ("src/demo.cpp") -> ".cpp"
    /// @ai:example ("Makefile") -> ""
    /// @ai:effects pure
    pub fn extension(&self) -> &str {
        let name = self
            .filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.filename.as_str());

        match name.rfind('.') {
            Some(0) | None => "",
            Some(idx) => &name[idx..],
        }
    }
}

/// @ai:intent Parse a 1-based line or column field
/// @ai:effects pure
fn parse_position(field: &str, what: &str, header: &str) -> Result<u32> {
    let value: u32 = field.trim().parse().map_err(|_| Error::MalformedHeader {
        line: header.to_string(),
        reason: format!("{} is not a number", what),
    })?;

    if value == 0 {
        return Err(Error::MalformedHeader {
            line: header.to_string(),
            reason: format!("{} must be 1-based", what),
        });
    }

    Ok(value)
}

/// @ai:intent Split the trailing message text into check id and message
/// @ai:post check id spans the first `[` to the last `]`
/// @ai:effects pure
fn split_check_id(note_info: &str, header: &str) -> Result<(String, String)> {
    match (note_info.find('['), note_info.rfind(']')) {
        (Some(start), Some(end)) if start < end => {
            let check_id = note_info[start + 1..end].to_string();
            let message = format!("{}{}", &note_info[..start], &note_info[end + 1..])
                .trim()
                .to_string();
            Ok((check_id, message))
        }
        _ => Err(Error::MalformedHeader {
            line: header.to_string(),
            reason: "no bracketed check id".to_string(),
        }),
    }
}

/// @ai:intent Strip the project-root prefix, leaving a relative path
/// @ai:effects pure
fn strip_project_root(filename: &str, config: &ParseConfig) -> String {
    let root = config.project_root.to_string_lossy();
    if root.is_empty() {
        return filename.to_string();
    }

    let prefix = format!("{}{}", root, config.convention.separator());
    filename
        .strip_prefix(prefix.as_str())
        .unwrap_or(filename)
        .to_string()
}
