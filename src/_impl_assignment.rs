use crate::BinaryOp::*;
use crate::{Assignment, EvalError, PropFormula};
use fxhash::FxHashMap;

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Assignment {
        Assignment(FxHashMap::default())
    }

    /// Create an assignment from `(atom, value)` pairs. Later pairs override earlier ones.
    pub fn from_values(values: &[(&str, bool)]) -> Assignment {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    /// Assign `value` to the atom `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), value);
    }

    /// Value of the atom `name`, or `None` if the atom is not assigned.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Atoms of the `formula` which this assignment does not cover, in sorted order.
    pub fn missing_atoms(&self, formula: &PropFormula) -> Vec<String> {
        formula
            .atoms()
            .into_iter()
            .filter(|atom| !self.0.contains_key(atom))
            .collect()
    }

    /// True if every atom of the `formula` has a value.
    pub fn is_total_for(&self, formula: &PropFormula) -> bool {
        self.missing_atoms(formula).is_empty()
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl PropFormula {
    /// Evaluate this formula in the given `assignment`.
    ///
    /// Both operands of every binary operator are evaluated, so the result is an
    /// `EvalError::MissingAtom` whenever any atom of the formula is unassigned, not only
    /// when its value would matter.
    pub fn eval_in(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        self.eval_with(&|name: &str| assignment.get(name))
    }

    /// **(internal)** Evaluate this formula using an arbitrary atom lookup function.
    pub(crate) fn eval_with<F>(&self, valuation: &F) -> Result<bool, EvalError>
    where
        F: Fn(&str) -> Option<bool>,
    {
        self.fold(
            |name| valuation(name).ok_or_else(|| EvalError::MissingAtom(name.to_string())),
            |value| !value,
            |op, left, right| match op {
                And => left && right,
                Or => left || right,
                Imp => !left || right,
            },
        )
    }
}
