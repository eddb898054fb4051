use crate::logging::targets::CLAUSES;
use crate::BinaryOp::*;
use crate::PropFormula::*;
use crate::{Clause, ClauseError, CnfValidity, Literal, PropFormula};
use fxhash::FxHashSet;
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl Literal {
    /// A positive (`true`) or negated (`false`) occurrence of `atom`.
    pub fn new(atom: &str, positive: bool) -> Literal {
        Literal {
            atom: atom.to_string(),
            positive,
        }
    }

    pub fn atom(&self) -> &str {
        &self.atom
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// The same atom with opposite polarity.
    pub fn negated(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            positive: !self.positive,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.positive {
            write!(f, "{}", self.atom)
        } else {
            write!(f, "~{}", self.atom)
        }
    }
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        Clause(literals)
    }

    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the clause contains some atom both positively and negatively.
    ///
    /// This is a purely syntactic test: literals are scanned in order and the scan stops
    /// at the first literal whose negation was already seen.
    pub fn is_tautology(&self) -> bool {
        let mut seen: FxHashSet<(&str, bool)> = FxHashSet::default();
        for literal in &self.0 {
            if seen.contains(&(literal.atom.as_str(), !literal.positive)) {
                return true;
            }
            seen.insert((literal.atom.as_str(), literal.positive));
        }
        false
    }

    /// Literals rendered as text, e.g. `["p", "~q"]`.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|l| l.to_string()).collect()
    }
}

impl Index<usize> for Clause {
    type Output = Literal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[{}]", self.to_strings().join(", "))
    }
}

impl CnfValidity {
    /// Count tautological and non-tautological `clauses`.
    pub fn of_clauses(clauses: &[Clause]) -> CnfValidity {
        let tautologies = clauses.iter().filter(|c| c.is_tautology()).count();
        CnfValidity {
            tautologies,
            non_tautologies: clauses.len() - tautologies,
        }
    }

    /// Number of clauses that contain an atom together with its negation.
    pub fn tautologies(&self) -> usize {
        self.tautologies
    }

    pub fn non_tautologies(&self) -> usize {
        self.non_tautologies
    }

    /// True if every clause is a tautology (in particular when there are no clauses).
    pub fn is_tautology(&self) -> bool {
        self.non_tautologies == 0
    }
}

impl PropFormula {
    /// Split a formula in conjunctive normal form into its clauses.
    ///
    /// Conjunctions are flattened left to right regardless of how they are nested, and
    /// each remaining subtree is split on disjunctions into literals. Fails with
    /// `ClauseError::NotALiteral` if the formula is not in CNF.
    pub fn clauses(&self) -> Result<Vec<Clause>, ClauseError> {
        let mut clauses = Vec::new();
        let mut conjuncts = vec![self];
        while let Some(node) = conjuncts.pop() {
            if let Binary(And, l, r) = node {
                // Right first, so that the left conjunct is processed first.
                conjuncts.push(r.as_ref());
                conjuncts.push(l.as_ref());
            } else {
                clauses.push(node.clause_literals()?);
            }
        }
        log::debug!(target: CLAUSES, "Collected {} clauses.", clauses.len());
        Ok(clauses)
    }

    /// **(internal)** Split a single disjunction of literals.
    fn clause_literals(&self) -> Result<Clause, ClauseError> {
        let mut literals = Vec::new();
        let mut disjuncts = vec![self];
        while let Some(node) = disjuncts.pop() {
            match node {
                Binary(Or, l, r) => {
                    disjuncts.push(r.as_ref());
                    disjuncts.push(l.as_ref());
                }
                Atom(name) => literals.push(Literal::new(name, true)),
                Not(inner) => match inner.as_ref() {
                    Atom(name) => literals.push(Literal::new(name, false)),
                    _ => return Err(ClauseError::NotALiteral(node.to_string())),
                },
                Binary(..) => return Err(ClauseError::NotALiteral(node.to_string())),
            }
        }
        Ok(Clause(literals))
    }
}
