//! # prop-cnf
//!
//! This crate provides an explicit parse tree for propositional formulas written in a small
//! infix syntax, together with a fixed set of analyses over that tree:
//!
//!  - Tokenization and infix to prefix (Polish notation) conversion.
//!  - Construction of a `PropFormula` tree from prefix tokens.
//!  - Fully parenthesized infix rendering, tree height and atom collection.
//!  - Evaluation under an `Assignment` and exhaustive truth tables.
//!  - Conversion to conjunctive normal form (implication elimination, negation normal form
//!    and distribution of `+` over `*`).
//!  - Clause extraction and a syntactic (per-clause) tautology check.
//!  - Conversion of DIMACS CNF text into the infix syntax (see the `dimacs` module).
//!
//! The syntax uses `~` for negation, `*` for conjunction, `+` for disjunction and `>` for
//! implication. Atoms are runs of ASCII letters, digits and underscores (starting with
//! a letter or a digit).
//!
//! ```rust
//! use prop_cnf::*;
//!
//! let formula = PropFormula::try_from("(p * q) + r").unwrap();
//! assert_eq!("((p * q) + r)", formula.to_string());
//! assert_eq!(3, formula.height());
//!
//! let cnf = formula.to_cnf();
//! assert_eq!("((p + r) * (q + r))", cnf.to_string());
//!
//! let clauses = cnf.clauses().unwrap();
//! let validity = CnfValidity::of_clauses(&clauses);
//! assert_eq!(0, validity.tautologies());
//! assert!(!validity.is_tautology());
//! ```
//!

pub mod dimacs;

/// **(internal)** Names of the `log` targets used throughout the crate.
mod logging;

/// **(internal)** Tokenizer and the `Token` utility methods.
mod _impl_token;

/// **(internal)** Infix to prefix conversion of token sequences.
mod _impl_prefix;

/// **(internal)** Construction of `PropFormula` trees from prefix tokens.
mod _impl_formula_builder;

/// **(internal)** Rendering and read-only queries over `PropFormula`.
mod _impl_formula;

/// **(internal)** Stack based traversals and the standard traits of `PropFormula`.
mod _impl_formula_traversal;

/// **(internal)** Implementation of the `Assignment` and formula evaluation.
mod _impl_assignment;

/// **(internal)** Implementation of the `TruthTable` and its row iterator.
mod _impl_truth_table;

/// **(internal)** The three rewrite passes of the CNF conversion.
mod _impl_cnf;

/// **(internal)** Implementation of `Literal`, `Clause` and `CnfValidity`.
mod _impl_clause;

/// **(internal)** Display and conversion implementations of the error types.
mod _impl_errors;

/// **(internal)** Implementation of the `FormulaReport` pipeline.
mod _impl_report;

/// **(internal)** Scenario and fuzzing tests over the whole pipeline.
#[cfg(test)]
mod _test_formula;

/// Several basic utility methods for testing formulas.
#[cfg(test)]
mod _test_util;

pub use _impl_prefix::{infix_to_prefix, render_prefix};
pub use _impl_token::tokenize;

/// A single lexical unit of the infix syntax.
///
/// Tokens carry no position information. `Other` holds any character which is not
/// whitespace and does not belong to any other token kind. Such tokens are accepted
/// by the tokenizer, but they are dropped during prefix conversion.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Atom(String),
    Not,
    Binary(BinaryOp),
    Open,
    Close,
    Other(char),
}

/// Binary logical connectives supported by `PropFormula`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BinaryOp {
    And,
    Or,
    Imp,
}

/// Recursive type for the propositional formula parse tree.
///
/// Every node owns its children, so a tree is never shared and all rewriting operations
/// produce a new tree. Trees can be very deep (a DIMACS file becomes a conjunction chain
/// as long as its clause list), so `Clone`, `Drop`, `PartialEq`, `Hash`, `Debug` and
/// `Display` are implemented without recursion.
pub enum PropFormula {
    Atom(String),
    Not(Box<PropFormula>),
    Binary(BinaryOp, Box<PropFormula>, Box<PropFormula>),
}

/// Assigns truth values to atoms by name.
///
/// The assignment can be built incrementally, but it must cover every atom of a
/// formula before that formula can be evaluated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment(fxhash::FxHashMap<String, bool>);

/// A truth table of a `PropFormula`: the sorted list of its atoms and an iterator
/// over all `2^n` rows.
///
/// Be aware of the exponential number of rows!
#[derive(Clone, Debug)]
pub struct TruthTable<'a> {
    formula: &'a PropFormula,
    atoms: Vec<String>,
}

/// One row of a `TruthTable`. `values[i]` is the value of the `i`-th atom of the table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TruthTableRow {
    pub values: Vec<bool>,
    pub result: bool,
}

/// Iterates over the rows of a `TruthTable` in increasing binary order, treating the
/// first atom as the most significant bit.
pub struct TruthTableRows<'a> {
    formula: &'a PropFormula,
    atoms: &'a [String],
    next_values: Option<Vec<bool>>,
}

/// An atom or its negation.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal {
    atom: String,
    positive: bool,
}

/// A disjunction of literals extracted from a CNF tree. The order of literals follows
/// the left-to-right order of the tree.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Clause(Vec<Literal>);

/// Result of the clause-level tautology analysis of a CNF formula.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CnfValidity {
    tautologies: usize,
    non_tautologies: usize,
}

/// Everything the analysis pipeline computes for a single infix formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormulaReport {
    pub prefix: Vec<Token>,
    pub formula: PropFormula,
    pub infix: String,
    pub height: usize,
    pub cnf: PropFormula,
    pub clauses: Vec<Clause>,
    pub validity: CnfValidity,
}

/// Prefix tokens which do not describe exactly one formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An operator token had fewer operands available than it requires.
    MissingOperand(Token),
    /// A parenthesis or an unknown character reached the tree builder.
    UnexpectedToken(Token),
    /// The tokens were consumed, but the number of finished subtrees is not one.
    NotSingleTree(usize),
}

/// Evaluation failed because the assignment does not cover the named atom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    MissingAtom(String),
}

/// The tree is not in conjunctive normal form, so it cannot be split into clauses.
/// Holds the infix rendering of the offending subtree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClauseError {
    NotALiteral(String),
}

/// Any failure of the `FormulaReport` pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReportError {
    Build(BuildError),
    Clause(ClauseError),
}
