//! Structured reports for problems found while loading mapping files.
//!
//! The loader never aborts on bad data. Every problem - a missing file, a
//! file that fails to parse, an entry with no usable fields, a key collision -
//! becomes a [`Diagnostic`] in the ordered list returned alongside the
//! [`crate::MappingSet`], so the caller can log a startup summary and decide
//! its own abort policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of load-time problem occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The mapping file does not exist. The category stays empty.
    MissingSource,
    /// The file exists but could not be parsed into the expected structure.
    /// The category stays empty.
    ParseError,
    /// A single entry was rejected (empty key, missing fields, wrong shape).
    InvalidEntry,
    /// A later entry normalized to an already-indexed key; the first-seen
    /// entry wins and the later one is skipped.
    DuplicateKey,
}

impl DiagnosticKind {
    /// Stable lowercase identifier, used in log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingSource => "missing_source",
            Self::ParseError => "parse_error",
            Self::InvalidEntry => "invalid_entry",
            Self::DuplicateKey => "duplicate_key",
        }
    }
}

/// How severe a diagnostic is.
///
/// `Error` means a whole category was lost (unparseable file); `Warning`
/// covers everything the load could skip past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Load continued; at most a single entry or optional source was lost.
    Warning,
    /// A whole category could not be loaded.
    Error,
}

/// A single load-time problem report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Problem classification.
    pub kind: DiagnosticKind,
    /// The mapping source the problem was found in (file path or label).
    pub source: String,
    /// The offending entry key, when the problem is entry-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Human-readable detail.
    pub message: String,
    /// Whether the problem cost a single entry or a whole category.
    pub severity: Severity,
}

impl Diagnostic {
    /// Build a `MissingSource` warning for `source`.
    #[must_use]
    pub fn missing_source(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            kind: DiagnosticKind::MissingSource,
            message: format!("mapping file '{source}' not found"),
            source,
            key: None,
            severity: Severity::Warning,
        }
    }

    /// Build a `ParseError` for `source` with a parser message.
    #[must_use]
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::ParseError,
            source: source.into(),
            key: None,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Build an `InvalidEntry` warning for `key` in `source`.
    #[must_use]
    pub fn invalid_entry(
        source: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: DiagnosticKind::InvalidEntry,
            source: source.into(),
            key: Some(key.into()),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Build a `DuplicateKey` warning for `key` in `source`.
    #[must_use]
    pub fn duplicate_key(source: impl Into<String>, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: DiagnosticKind::DuplicateKey,
            source: source.into(),
            message: format!("duplicate key '{key}' after normalization, first entry kept"),
            key: Some(key),
            severity: Severity::Warning,
        }
    }

    /// Whether this diagnostic carries `Error` severity.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{level}[{}] {}: ", self.kind.as_str(), self.source)?;
        if let Some(key) = &self.key {
            write!(f, "'{key}': ")?;
        }
        write!(f, "{}", self.message)
    }
}
