//! Parser for the module matrix text format
//!
//! One matrix row per line. Lit modules are `#`, `1`, `X` or `x`; unlit
//! modules are `.`, `0`, `_` or `-`. Spaces between modules, blank lines and
//! `//` comments are ignored.

pub mod lexer;

use crate::error::{MatrixParseError, Span};
use crate::matrix::ModuleMatrix;

use lexer::{lex, Token};

/// Parse matrix text into a square module matrix
pub fn parse(input: &str) -> Result<ModuleMatrix, MatrixParseError> {
    let mut rows: Vec<(Vec<bool>, Span)> = Vec::new();
    let mut current: Vec<bool> = Vec::new();
    let mut current_span: Option<Span> = None;

    let mut finish_row = |row: &mut Vec<bool>, span: &mut Option<Span>| {
        if let Some(span) = span.take() {
            rows.push((std::mem::take(row), span));
        }
    };

    for item in lex(input) {
        let (token, span) = item.map_err(|span| MatrixParseError::UnexpectedChar {
            found: input[span.clone()].to_string(),
            span,
        })?;
        match token {
            Token::Lit | Token::Unlit => {
                current.push(token == Token::Lit);
                current_span = Some(match current_span {
                    Some(s) => s.start..span.end,
                    None => span,
                });
            }
            Token::Newline => finish_row(&mut current, &mut current_span),
            Token::LineComment => {}
        }
    }
    finish_row(&mut current, &mut current_span);

    let Some((first, first_span)) = rows.first() else {
        return Err(MatrixParseError::Empty);
    };
    let columns = first.len();

    for (index, (row, span)) in rows.iter().enumerate().skip(1) {
        if row.len() != columns {
            return Err(MatrixParseError::RaggedRow {
                span: span.clone(),
                row: index,
                expected: columns,
                found: row.len(),
            });
        }
    }

    if rows.len() != columns {
        let last = rows.last().map(|(_, s)| s.end).unwrap_or(first_span.end);
        return Err(MatrixParseError::NotSquare {
            span: first_span.start..last,
            rows: rows.len(),
            columns,
        });
    }

    let size = columns;
    let modules: Vec<Vec<bool>> = rows.into_iter().map(|(row, _)| row).collect();
    ModuleMatrix::from_fn(size, |r, c| modules[r][c]).map_err(|_| MatrixParseError::Empty)
}
