//! Formulas read from DIMACS files are conjunction chains as deep as the number of
//! clauses, so nothing in this module recurses over the tree. Reading passes use
//! `PropFormula::fold`, rewriting passes use `PropFormula::rewrite`, and the standard
//! trait implementations (`Clone`, `PartialEq`, `Hash`, `Drop`) walk the tree with
//! an explicit stack as well.

use crate::BinaryOp::*;
use crate::PropFormula::*;
use crate::{BinaryOp, PropFormula};
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::mem::{replace, take};

/// **(internal)** A formula node taken apart, with its children moved out.
pub(crate) enum Parts {
    Atom(String),
    Not(PropFormula),
    Binary(BinaryOp, PropFormula, PropFormula),
}

/// **(internal)** What a `rewrite` step does with the node it was given.
pub(crate) enum Step<C> {
    /// The node is finished.
    Done(PropFormula),
    /// Continue with another node in its place.
    Visit(PropFormula, C),
    /// Negate the rewritten operand.
    Not(PropFormula, C),
    /// Join the two rewritten operands.
    Binary(BinaryOp, (PropFormula, C), (PropFormula, C)),
}

enum Task<C> {
    Visit(PropFormula, C),
    FinishNot,
    FinishBinary(BinaryOp),
}

impl PropFormula {
    /// **(internal)** Move the children out of this node. The node itself is left with
    /// empty placeholders and dropped.
    pub(crate) fn into_parts(mut self) -> Parts {
        match &mut self {
            Atom(name) => Parts::Atom(take(name)),
            Not(inner) => Parts::Not(detach(inner)),
            Binary(op, l, r) => Parts::Binary(*op, detach(l), detach(r)),
        }
    }

    /// **(internal)** The two operands of a conjunction, or the formula itself if it is
    /// not a conjunction.
    pub(crate) fn into_conjuncts(self) -> Result<(PropFormula, PropFormula), PropFormula> {
        if !matches!(self, Binary(And, _, _)) {
            return Err(self);
        }
        match self.into_parts() {
            Parts::Binary(_, l, r) => Ok((l, r)),
            _ => unreachable!("The formula was checked to be a conjunction."),
        }
    }

    /// **(internal)** Bottom-up fold over the tree: `atom` maps the leaves, `not` and
    /// `binary` combine the already folded operands. Operands are folded left to right
    /// and the first error returned by `atom` stops the fold.
    pub(crate) fn fold<T, E, A, N, B>(&self, mut atom: A, mut not: N, mut binary: B) -> Result<T, E>
    where
        A: FnMut(&str) -> Result<T, E>,
        N: FnMut(T) -> T,
        B: FnMut(BinaryOp, T, T) -> T,
    {
        let mut results: Vec<T> = Vec::new();
        let mut stack: Vec<(&PropFormula, bool)> = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            match node {
                Atom(name) => results.push(atom(name.as_str())?),
                Not(inner) => {
                    if expanded {
                        let value = pop_result(&mut results);
                        results.push(not(value));
                    } else {
                        stack.push((node, true));
                        stack.push((inner.as_ref(), false));
                    }
                }
                Binary(op, l, r) => {
                    if expanded {
                        let right = pop_result(&mut results);
                        let left = pop_result(&mut results);
                        results.push(binary(*op, left, right));
                    } else {
                        stack.push((node, true));
                        stack.push((r.as_ref(), false));
                        stack.push((l.as_ref(), false));
                    }
                }
            }
        }
        Ok(pop_result(&mut results))
    }

    /// **(internal)** Rebuild the tree top-down, consuming it.
    ///
    /// Every visited node is handed to `step` together with a context value passed down
    /// from its parent. Once both operands of a `Step::Binary` are rewritten, they are
    /// joined by `join` (usually `PropFormula::mk_binary`).
    pub(crate) fn rewrite<C, S, J>(self, context: C, mut step: S, mut join: J) -> PropFormula
    where
        S: FnMut(PropFormula, C) -> Step<C>,
        J: FnMut(BinaryOp, PropFormula, PropFormula) -> PropFormula,
    {
        let mut results: Vec<PropFormula> = Vec::new();
        let mut tasks = vec![Task::Visit(self, context)];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(node, context) => match step(node, context) {
                    Step::Done(result) => results.push(result),
                    Step::Visit(node, context) => tasks.push(Task::Visit(node, context)),
                    Step::Not(inner, context) => {
                        tasks.push(Task::FinishNot);
                        tasks.push(Task::Visit(inner, context));
                    }
                    Step::Binary(op, (l, l_context), (r, r_context)) => {
                        tasks.push(Task::FinishBinary(op));
                        tasks.push(Task::Visit(r, r_context));
                        tasks.push(Task::Visit(l, l_context));
                    }
                },
                Task::FinishNot => {
                    let inner = pop_result(&mut results);
                    results.push(PropFormula::mk_not(inner));
                }
                Task::FinishBinary(op) => {
                    let right = pop_result(&mut results);
                    let left = pop_result(&mut results);
                    results.push(join(op, left, right));
                }
            }
        }
        pop_result(&mut results)
    }
}

/// **(internal)** Take a child out of its box, leaving an empty atom behind.
fn detach(child: &mut PropFormula) -> PropFormula {
    replace(child, Atom(String::new()))
}

/// **(internal)** Results are pushed before the node that consumes them is finished.
fn pop_result<T>(results: &mut Vec<T>) -> T {
    match results.pop() {
        Some(value) => value,
        None => unreachable!("Operands are always finished before their operator."),
    }
}

impl Clone for PropFormula {
    fn clone(&self) -> Self {
        let copy: Result<PropFormula, Infallible> = self.fold(
            |name| Ok(PropFormula::mk_atom(name)),
            PropFormula::mk_not,
            PropFormula::mk_binary,
        );
        match copy {
            Ok(formula) => formula,
            Err(never) => match never {},
        }
    }
}

impl Drop for PropFormula {
    fn drop(&mut self) {
        let mut stack: Vec<PropFormula> = Vec::new();
        push_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            push_children(&mut node, &mut stack);
        }
    }
}

/// **(internal)** Move the non-atom children of `node` to the `stack`. Atoms own no
/// children, so they are simply dropped in place.
fn push_children(node: &mut PropFormula, stack: &mut Vec<PropFormula>) {
    match node {
        Atom(_) => {}
        Not(inner) => {
            if !matches!(**inner, Atom(_)) {
                stack.push(detach(inner));
            }
        }
        Binary(_, l, r) => {
            if !matches!(**l, Atom(_)) {
                stack.push(detach(l));
            }
            if !matches!(**r, Atom(_)) {
                stack.push(detach(r));
            }
        }
    }
}

impl PartialEq for PropFormula {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Atom(a), Atom(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Not(a), Not(b)) => stack.push((a.as_ref(), b.as_ref())),
                (Binary(op_a, l_a, r_a), Binary(op_b, l_b, r_b)) => {
                    if op_a != op_b {
                        return false;
                    }
                    stack.push((r_a.as_ref(), r_b.as_ref()));
                    stack.push((l_a.as_ref(), l_b.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for PropFormula {}

impl Hash for PropFormula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pre-order with a tag per node kind determines the tree uniquely.
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Atom(name) => {
                    0u8.hash(state);
                    name.hash(state);
                }
                Not(inner) => {
                    1u8.hash(state);
                    stack.push(inner.as_ref());
                }
                Binary(op, l, r) => {
                    2u8.hash(state);
                    op.hash(state);
                    stack.push(r.as_ref());
                    stack.push(l.as_ref());
                }
            }
        }
    }
}
