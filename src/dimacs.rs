//! Conversion of DIMACS CNF text into the infix syntax understood by `PropFormula`.
//!
//! Every clause line is a whitespace separated list of non-zero integers terminated by `0`.
//! A positive literal `n` becomes the atom `xn`, a negative literal `-n` becomes `~xn`.
//! Clauses are rendered as `(l1 + l2 + ...)` and joined with ` * `:
//!
//! ```rust
//! use prop_cnf::dimacs::dimacs_to_infix;
//!
//! let text = "c example\np cnf 3 2\n1 -2 0\n2 3 0\n";
//! assert_eq!("(x1 + ~x2) * (x2 + x3)", dimacs_to_infix(text).unwrap());
//! ```

use crate::logging::targets::PARSER;
use crate::{BuildError, PropFormula};
use std::fmt::{Display, Error, Formatter};

/// Problems found in DIMACS input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DimacsError {
    /// A clause line (numbered from `1`) contains something that is not an integer.
    InvalidLiteral { line: usize, token: String },
    /// The input has no clause lines.
    NoClauses,
}

/// Convert DIMACS CNF text into an infix formula string.
///
/// Empty lines, comments (`c`) and the problem line (`p`) are skipped. A line starting
/// with `%` ends the formula (used by the SATLIB benchmark files). Each remaining line is one
/// clause; literals after the terminating `0` are ignored and lines without literals
/// are skipped.
pub fn dimacs_to_infix(text: &str) -> Result<String, DimacsError> {
    let mut clauses: Vec<String> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        match line.chars().next() {
            None | Some('c') | Some('p') => continue,
            Some('%') => break,
            _ => {}
        }

        let mut literals: Vec<String> = Vec::new();
        for token in line.split_whitespace() {
            let literal: i64 = token.parse().map_err(|_| DimacsError::InvalidLiteral {
                line: index + 1,
                token: token.to_string(),
            })?;
            if literal == 0 {
                break;
            }
            if literal < 0 {
                literals.push(format!("~x{}", literal.unsigned_abs()));
            } else {
                literals.push(format!("x{}", literal));
            }
        }

        if !literals.is_empty() {
            clauses.push(format!("({})", literals.join(" + ")));
        }
    }

    if clauses.is_empty() {
        return Err(DimacsError::NoClauses);
    }
    log::debug!(target: PARSER, "Read {} DIMACS clauses.", clauses.len());
    Ok(clauses.join(" * "))
}

/// Convert DIMACS CNF text directly into a `PropFormula`.
pub fn dimacs_to_formula(text: &str) -> Result<PropFormula, DimacsFormulaError> {
    let infix = dimacs_to_infix(text)?;
    Ok(PropFormula::parse(&infix)?)
}

/// Failure of `dimacs_to_formula`: either the text or the resulting formula is invalid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DimacsFormulaError {
    Dimacs(DimacsError),
    Build(BuildError),
}

impl From<DimacsError> for DimacsFormulaError {
    fn from(value: DimacsError) -> Self {
        DimacsFormulaError::Dimacs(value)
    }
}

impl From<BuildError> for DimacsFormulaError {
    fn from(value: BuildError) -> Self {
        DimacsFormulaError::Build(value)
    }
}

impl Display for DimacsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            DimacsError::InvalidLiteral { line, token } => {
                write!(f, "Invalid literal `{}` on line {}.", token, line)
            }
            DimacsError::NoClauses => write!(f, "DIMACS input contains no clauses."),
        }
    }
}

impl Display for DimacsFormulaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            DimacsFormulaError::Dimacs(e) => write!(f, "{}", e),
            DimacsFormulaError::Build(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DimacsError {}
impl std::error::Error for DimacsFormulaError {}
