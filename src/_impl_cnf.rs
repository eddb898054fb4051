//! Conversion to conjunctive normal form runs three rewrite passes, each exactly once:
//!
//!  1. `eliminate_implications`: `(a > b)` becomes `((~a) + b)`.
//!  2. `move_negations`: double negations vanish and De Morgan's laws push every
//!     negation down to an atom (negation normal form).
//!  3. `distribute_or`: `+` is distributed over `*` until no `*` appears below a `+`.
//!
//! Every pass consumes its input and returns a freshly assembled tree. When an operand has
//! to appear in two places (distribution), it is cloned. The passes run on an explicit
//! work stack (`PropFormula::rewrite`), so the depth of the tree is not limited by the
//! call stack.

use crate::_impl_formula_traversal::{Parts, Step};
use crate::logging::targets::CNF;
use crate::BinaryOp::*;
use crate::PropFormula;
use crate::PropFormula::*;

impl PropFormula {
    /// Convert this formula to conjunctive normal form. The original is left untouched.
    pub fn to_cnf(&self) -> PropFormula {
        self.clone().into_cnf()
    }

    /// Convert this formula to conjunctive normal form, consuming it.
    pub fn into_cnf(self) -> PropFormula {
        log::debug!(target: CNF, "Converting formula with {} nodes.", self.size());
        let result = self
            .eliminate_implications()
            .move_negations()
            .distribute_or();
        log::debug!(target: CNF, "Result has {} nodes.", result.size());
        if cfg!(feature = "shields_up") && !result.is_cnf() {
            panic!("CNF conversion produced a non-CNF formula: {}", result);
        }
        result
    }

    /// Replace every implication `(a > b)` with `((~a) + b)`.
    pub fn eliminate_implications(self) -> PropFormula {
        self.rewrite(
            (),
            |node, ()| match node.into_parts() {
                Parts::Atom(name) => Step::Done(Atom(name)),
                Parts::Not(inner) => Step::Not(inner, ()),
                Parts::Binary(Imp, l, r) => Step::Binary(Or, (PropFormula::mk_not(l), ()), (r, ())),
                Parts::Binary(op, l, r) => Step::Binary(op, (l, ()), (r, ())),
            },
            PropFormula::mk_binary,
        )
    }

    /// Push negations down to atoms.
    ///
    /// Uses `~~a = a`, `~(a + b) = (~a * ~b)` and `~(a * b) = (~a + ~b)`. Implications are
    /// normally removed by `eliminate_implications` first, but a negated implication is
    /// handled as well: `~(a > b) = (a * ~b)`. Other implications are kept, with their
    /// operands normalized.
    pub fn move_negations(self) -> PropFormula {
        // The context is true when an odd number of negations sits above the node.
        self.rewrite(
            false,
            |node, negated| match (node.into_parts(), negated) {
                (Parts::Atom(name), false) => Step::Done(Atom(name)),
                (Parts::Atom(name), true) => Step::Done(PropFormula::mk_not(Atom(name))),
                (Parts::Not(inner), negated) => Step::Visit(inner, !negated),
                (Parts::Binary(op, l, r), false) => Step::Binary(op, (l, false), (r, false)),
                (Parts::Binary(Or, l, r), true) => Step::Binary(And, (l, true), (r, true)),
                (Parts::Binary(And, l, r), true) => Step::Binary(Or, (l, true), (r, true)),
                (Parts::Binary(Imp, l, r), true) => Step::Binary(And, (l, false), (r, true)),
            },
            PropFormula::mk_binary,
        )
    }

    /// Distribute `+` over `*`, bottom-up, until no conjunction appears below a disjunction.
    ///
    /// Expects a formula in negation normal form (see `move_negations`); negations and
    /// implications are only traversed, not rewritten.
    pub fn distribute_or(self) -> PropFormula {
        self.rewrite(
            (),
            |node, ()| match node.into_parts() {
                Parts::Atom(name) => Step::Done(Atom(name)),
                Parts::Not(inner) => Step::Not(inner, ()),
                Parts::Binary(op, l, r) => Step::Binary(op, (l, ()), (r, ())),
            },
            |op, left, right| {
                if op == Or {
                    distribute_or_pair(left, right)
                } else {
                    PropFormula::mk_binary(op, left, right)
                }
            },
        )
    }
}

/// **(internal)** Which operand of a disjunction `distribute_or_pair` is splitting.
/// Holds the other operand.
enum Side {
    Left(PropFormula),
    Right(PropFormula),
}

/// **(internal)** Build `(left + right)` where both operands are already distributed.
///
/// The conjunctions of `left` are split first. Each of its remaining parts is then
/// combined with every conjunct of `right`, so the result is a conjunction of
/// `(l_i + r_j)` over all pairs, each operand being cloned where it is shared.
fn distribute_or_pair(left: PropFormula, right: PropFormula) -> PropFormula {
    left.rewrite(
        Side::Left(right),
        |node, side| match side {
            Side::Left(right) => match node.into_conjuncts() {
                Ok((l1, l2)) => Step::Binary(
                    And,
                    (l1, Side::Left(right.clone())),
                    (l2, Side::Left(right)),
                ),
                Err(left) => Step::Visit(right, Side::Right(left)),
            },
            Side::Right(left) => match node.into_conjuncts() {
                Ok((r1, r2)) => Step::Binary(
                    And,
                    (r1, Side::Right(left.clone())),
                    (r2, Side::Right(left)),
                ),
                Err(right) => Step::Done(PropFormula::mk_or(left, right)),
            },
        },
        PropFormula::mk_binary,
    )
}
