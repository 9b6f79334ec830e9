//! Parenthesization reconstruction from a completed split table.
//!
//! Reconstruction is a pure recursive walk over an immutable [`SplitTable`]:
//! nothing is mutated, and repeated calls over the same table produce the
//! same token stream. Output is abstracted as a sink of [`Token`]s so the
//! same walk can feed a console, a file, or an in-memory string.

use std::fmt::{self, Write};

use crate::error::ChainError;
use crate::optimizer::SplitTable;

/// One textual token of a parenthesized expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Opening bracket `(`.
    Open,
    /// Closing bracket `)`.
    Close,
    /// Matrix label by 1-based chain position, rendered as `A{i}`.
    Matrix(usize),
    /// Multiplication separator, rendered as ` x `.
    Times,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Matrix(i) => write!(f, "A{i}"),
            Token::Times => f.write_str(" x "),
        }
    }
}

/// Emit the optimal parenthesization of the sub-chain `A_i..A_j` into `sink`.
///
/// # Errors
/// [`ChainError::InvalidRange`] if `i > j` or either index falls outside
/// `[1, n]` of the table.
pub fn emit<F>(split: &SplitTable, i: usize, j: usize, sink: &mut F) -> Result<(), ChainError>
where
    F: FnMut(Token),
{
    if i < 1 || i > j || j > split.n() {
        return Err(ChainError::InvalidRange {
            lo: i,
            hi: j,
            n: split.n(),
        });
    }
    walk(split, i, j, sink);
    Ok(())
}

/// Recursive descent over a range already known to satisfy `1 <= i <= j <= n`.
fn walk<F: FnMut(Token)>(split: &SplitTable, i: usize, j: usize, sink: &mut F) {
    if i == j {
        sink(Token::Matrix(i));
        return;
    }
    let k = split.at(i, j);
    sink(Token::Open);
    walk(split, i, k, sink);
    sink(Token::Times);
    walk(split, k + 1, j, sink);
    sink(Token::Close);
}

/// Render the parenthesization of `A_i..A_j` as a `String`.
///
/// # Errors
/// Same range rules as [`emit`].
pub fn parenthesization_string(
    split: &SplitTable,
    i: usize,
    j: usize,
) -> Result<String, ChainError> {
    let mut out = String::new();
    emit(split, i, j, &mut |tok| {
        // Writing into a String cannot fail.
        let _ = write!(out, "{tok}");
    })?;
    Ok(out)
}

/// String rendering for a range the caller has already validated.
pub(crate) fn render_to_string(split: &SplitTable, i: usize, j: usize) -> String {
    let mut out = String::new();
    walk(split, i, j, &mut |tok| {
        let _ = write!(out, "{tok}");
    });
    out
}
