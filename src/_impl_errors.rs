use crate::{BuildError, ClauseError, EvalError, ReportError};
use std::fmt::{Display, Error, Formatter};

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            BuildError::MissingOperand(token) => {
                write!(f, "Operator `{}` is missing an operand.", token)
            }
            BuildError::UnexpectedToken(token) => {
                write!(f, "Unexpected token `{}` in prefix formula.", token)
            }
            BuildError::NotSingleTree(0) => write!(f, "Expected formula, found nothing."),
            BuildError::NotSingleTree(count) => {
                write!(f, "Expected one formula, found {} disconnected parts.", count)
            }
        }
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            EvalError::MissingAtom(name) => write!(f, "No value assigned to atom `{}`.", name),
        }
    }
}

impl Display for ClauseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ClauseError::NotALiteral(formula) => {
                write!(f, "Expected a literal in CNF clause, found `{}`.", formula)
            }
        }
    }
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ReportError::Build(e) => write!(f, "Formula could not be built: {}", e),
            ReportError::Clause(e) => write!(f, "Clauses could not be collected: {}", e),
        }
    }
}

impl std::error::Error for BuildError {}
impl std::error::Error for EvalError {}
impl std::error::Error for ClauseError {}
impl std::error::Error for ReportError {}

impl From<BuildError> for ReportError {
    fn from(value: BuildError) -> Self {
        ReportError::Build(value)
    }
}

impl From<ClauseError> for ReportError {
    fn from(value: ClauseError) -> Self {
        ReportError::Clause(value)
    }
}
