use crate::logging::targets::TRUTH_TABLE;
use crate::{PropFormula, TruthTable, TruthTableRow, TruthTableRows};
use std::mem::swap;

impl PropFormula {
    /// Create the truth table of this formula over its (sorted) atoms.
    pub fn truth_table(&self) -> TruthTable<'_> {
        let atoms: Vec<String> = self.atoms().into_iter().collect();
        log::debug!(target: TRUTH_TABLE, "Truth table over {} atoms.", atoms.len());
        TruthTable {
            formula: self,
            atoms,
        }
    }
}

impl<'a> TruthTable<'a> {
    /// The atoms of the table, in the order used by `TruthTableRow::values`.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Number of rows (`2^n` for `n` atoms), or `None` if it does not fit into `usize`.
    pub fn num_rows(&self) -> Option<usize> {
        u32::try_from(self.atoms.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }

    /// Iterate over all rows. Row `i` assigns to atom `j` the bit `n - 1 - j` of `i`.
    pub fn rows(&self) -> TruthTableRows<'_> {
        TruthTableRows {
            formula: self.formula,
            atoms: &self.atoms,
            next_values: Some(vec![false; self.atoms.len()]),
        }
    }
}

impl TruthTableRows<'_> {
    /// **(internal)** Evaluate the formula in the given atom `values`.
    fn evaluate(&self, values: &[bool]) -> bool {
        let valuation = |name: &str| {
            self.atoms
                .binary_search_by(|atom| atom.as_str().cmp(name))
                .ok()
                .map(|index| values[index])
        };
        match self.formula.eval_with(&valuation) {
            Ok(result) => result,
            Err(error) => unreachable!("Truth table atoms come from the formula itself: {}", error),
        }
    }
}

/// **(internal)** Binary increment of `values` with the last element as the least
/// significant bit. Returns `None` on overflow.
fn increment(values: &[bool]) -> Option<Vec<bool>> {
    let mut next = values.to_vec();
    for bit in next.iter_mut().rev() {
        *bit = !*bit;
        if *bit {
            // No carry.
            return Some(next);
        }
    }
    None
}

impl Iterator for TruthTableRows<'_> {
    type Item = TruthTableRow;

    fn next(&mut self) -> Option<Self::Item> {
        let mut values = self.next_values.as_ref().and_then(|v| increment(v));
        swap(&mut values, &mut self.next_values);
        values.map(|values| {
            let result = self.evaluate(&values);
            TruthTableRow { values, result }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{PropFormula, TruthTableRow};

    fn row(values: &[bool], result: bool) -> TruthTableRow {
        TruthTableRow {
            values: values.to_vec(),
            result,
        }
    }

    #[test]
    fn truth_table_single_atom() {
        let formula = PropFormula::try_from("~p").unwrap();
        let table = formula.truth_table();
        assert_eq!(&["p".to_string()], table.atoms());
        assert_eq!(Some(2), table.num_rows());
        let rows: Vec<TruthTableRow> = table.rows().collect();
        assert_eq!(vec![row(&[false], true), row(&[true], false)], rows);
    }

    #[test]
    fn truth_table_most_significant_atom_first() {
        let formula = PropFormula::try_from("q > p").unwrap();
        let table = formula.truth_table();
        assert_eq!(&["p".to_string(), "q".to_string()], table.atoms());
        let rows: Vec<TruthTableRow> = table.rows().collect();
        assert_eq!(
            vec![
                row(&[false, false], true),
                row(&[false, true], false),
                row(&[true, false], true),
                row(&[true, true], true),
            ],
            rows
        );
    }

    #[test]
    fn truth_table_too_many_rows() {
        let atoms: Vec<String> = (0..64).map(|i| format!("x{}", i)).collect();
        let formula = PropFormula::try_from(atoms.join(" + ").as_str()).unwrap();
        assert_eq!(64, formula.truth_table().atoms().len());
        assert_eq!(None, formula.truth_table().num_rows());
        let formula = PropFormula::try_from(atoms[..20].join(" * ").as_str()).unwrap();
        assert_eq!(Some(1 << 20), formula.truth_table().num_rows());
    }

    #[test]
    fn truth_table_row_count() {
        let formula = PropFormula::try_from("a * b + c * (d > a) + e").unwrap();
        let table = formula.truth_table();
        assert_eq!(Some(32), table.num_rows());
        assert_eq!(32, table.rows().count());
        for (i, row) in table.rows().enumerate() {
            for (j, value) in row.values.iter().enumerate() {
                assert_eq!((i >> (4 - j)) & 1 == 1, *value);
            }
        }
    }
}
