use crate::BinaryOp::*;
use crate::PropFormula::*;
use crate::{BinaryOp, PropFormula};
use std::collections::BTreeSet;
use std::fmt::{Debug, Display, Error, Formatter};

impl PropFormula {
    /// Create an atom with the given `name`.
    pub fn mk_atom(name: &str) -> PropFormula {
        Atom(name.to_string())
    }

    /// Create a negation of `inner`.
    pub fn mk_not(inner: PropFormula) -> PropFormula {
        Not(Box::new(inner))
    }

    /// Create a binary formula `(left op right)`.
    pub fn mk_binary(op: BinaryOp, left: PropFormula, right: PropFormula) -> PropFormula {
        Binary(op, Box::new(left), Box::new(right))
    }

    pub fn mk_and(left: PropFormula, right: PropFormula) -> PropFormula {
        PropFormula::mk_binary(And, left, right)
    }

    pub fn mk_or(left: PropFormula, right: PropFormula) -> PropFormula {
        PropFormula::mk_binary(Or, left, right)
    }

    pub fn mk_imp(left: PropFormula, right: PropFormula) -> PropFormula {
        PropFormula::mk_binary(Imp, left, right)
    }

    /// The fully parenthesized infix rendering of this formula. Same as `to_string`.
    pub fn to_infix(&self) -> String {
        self.to_string()
    }

    /// Number of nodes on the longest path from the root to a leaf. An atom has height `1`.
    pub fn height(&self) -> usize {
        let mut max_height = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max_height = max_height.max(depth);
            match node {
                Atom(_) => {}
                Not(inner) => stack.push((inner.as_ref(), depth + 1)),
                Binary(_, l, r) => {
                    stack.push((l.as_ref(), depth + 1));
                    stack.push((r.as_ref(), depth + 1));
                }
            }
        }
        max_height
    }

    /// Height of a possibly missing tree: `0` for `None`, otherwise `PropFormula::height`.
    pub fn height_of(formula: Option<&PropFormula>) -> usize {
        formula.map(|f| f.height()).unwrap_or(0)
    }

    /// Total number of nodes in this formula.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            match node {
                Atom(_) => {}
                Not(inner) => stack.push(inner.as_ref()),
                Binary(_, l, r) => {
                    stack.push(l.as_ref());
                    stack.push(r.as_ref());
                }
            }
        }
        size
    }

    /// The set of atom names appearing in this formula, deduplicated and sorted.
    pub fn atoms(&self) -> BTreeSet<String> {
        let mut atoms = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Atom(name) => {
                    // Avoid cloning names that are already present.
                    if !atoms.contains(name) {
                        atoms.insert(name.clone());
                    }
                }
                Not(inner) => stack.push(inner.as_ref()),
                Binary(_, l, r) => {
                    stack.push(l.as_ref());
                    stack.push(r.as_ref());
                }
            }
        }
        atoms
    }

    /// True if this formula is an atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Atom(_) => true,
            Not(inner) => matches!(**inner, Atom(_)),
            Binary(..) => false,
        }
    }

    /// True if the formula has no implications and negations only appear directly
    /// above atoms.
    pub fn is_nnf(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Atom(_) => {}
                Not(_) => {
                    if !node.is_literal() {
                        return false;
                    }
                }
                Binary(Imp, _, _) => return false,
                Binary(_, l, r) => {
                    stack.push(l.as_ref());
                    stack.push(r.as_ref());
                }
            }
        }
        true
    }

    /// True if the formula is a conjunction of disjunctions of literals (a single clause
    /// or a single literal also count).
    pub fn is_cnf(&self) -> bool {
        let mut conjuncts = vec![self];
        while let Some(node) = conjuncts.pop() {
            if let Binary(And, l, r) = node {
                conjuncts.push(l.as_ref());
                conjuncts.push(r.as_ref());
                continue;
            }
            let mut disjuncts = vec![node];
            while let Some(node) = disjuncts.pop() {
                if let Binary(Or, l, r) = node {
                    disjuncts.push(l.as_ref());
                    disjuncts.push(r.as_ref());
                } else if !node.is_literal() {
                    return false;
                }
            }
        }
        true
    }
}

/// **(internal)** Pending output of the non-recursive formula printer.
enum Piece<'a> {
    Node(&'a PropFormula),
    Text(&'static str),
    Op(BinaryOp),
}

impl PropFormula {
    /// **(internal)** Write the formula either in the infix syntax or in the shape of
    /// a derived `Debug` (e.g. `Binary(And, Atom("p"), Not(Atom("q")))`).
    fn write_pieces(&self, f: &mut Formatter<'_>, debug: bool) -> Result<(), Error> {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Op(op) if debug => write!(f, "{:?}, ", op)?,
                Piece::Op(op) => write!(f, " {} ", op)?,
                Piece::Node(Atom(name)) if debug => write!(f, "Atom({:?})", name)?,
                Piece::Node(Atom(name)) => f.write_str(name)?,
                Piece::Node(Not(inner)) => {
                    f.write_str(if debug { "Not(" } else { "(~" })?;
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Node(inner.as_ref()));
                }
                Piece::Node(Binary(op, l, r)) => {
                    stack.push(Piece::Text(")"));
                    stack.push(Piece::Node(r.as_ref()));
                    if debug {
                        f.write_str("Binary(")?;
                        stack.push(Piece::Text(", "));
                        stack.push(Piece::Node(l.as_ref()));
                        stack.push(Piece::Op(*op));
                    } else {
                        f.write_str("(")?;
                        stack.push(Piece::Op(*op));
                        stack.push(Piece::Node(l.as_ref()));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Display for PropFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.write_pieces(f, false)
    }
}

impl Debug for PropFormula {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        self.write_pieces(f, true)
    }
}
