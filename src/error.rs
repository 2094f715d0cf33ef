//! Error types for matrix parsing, configuration and rendering

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors returned by the renderer before any shape is emitted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The module matrix is empty, not square, or has no lit modules
    #[error("invalid matrix: {reason}")]
    InvalidMatrix { reason: String },

    /// A render configuration field is out of range
    #[error("invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl RenderError {
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            reason: reason.into(),
        }
    }

    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors in the textual matrix format
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixParseError {
    #[error("unexpected character {found:?} at {span:?}")]
    UnexpectedChar { span: Span, found: String },

    #[error("row {row} has {found} modules, expected {expected}")]
    RaggedRow {
        span: Span,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix has {rows} rows of {columns} modules, expected a square")]
    NotSquare { span: Span, rows: usize, columns: usize },

    #[error("matrix text contains no modules")]
    Empty,
}

impl MatrixParseError {
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnexpectedChar { span, .. }
            | Self::RaggedRow { span, .. }
            | Self::NotSquare { span, .. } => Some(span),
            Self::Empty => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().cloned().unwrap_or(0..0);
        let message = self.to_string();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", filename, message),
        }
    }
}

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
