use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

/// Parse an infix formula which is known to be valid.
pub fn mk_formula(input: &str) -> PropFormula {
    PropFormula::try_from(input).unwrap()
}

/// Create a pseudo-random formula of the given `height` over atoms `x0, ..., x{num_atoms-1}`.
///
/// Every inner node is a random binary operator, possibly negated, so the formula has
/// `2^height` leaves.
pub fn mk_random_formula(height: u8, num_atoms: u32, seed: u64) -> PropFormula {
    fn build(height: u8, num_atoms: u32, rand: &mut StdRng) -> PropFormula {
        if height == 0 {
            let id = rand.next_u32() % num_atoms;
            return PropFormula::mk_atom(&format!("x{}", id));
        }
        let op = match rand.next_u32() % 3 {
            0 => BinaryOp::And,
            1 => BinaryOp::Or,
            _ => BinaryOp::Imp,
        };
        let left = build(height - 1, num_atoms, rand);
        let right = build(height - 1, num_atoms, rand);
        let result = PropFormula::mk_binary(op, left, right);
        if rand.next_u32() % 2 == 0 {
            PropFormula::mk_not(result)
        } else {
            result
        }
    }

    let mut rand = StdRng::seed_from_u64(seed);
    build(height, num_atoms, &mut rand)
}

/// Collect all truth table rows of a formula.
pub fn truth_table_rows(formula: &PropFormula) -> Vec<TruthTableRow> {
    formula.truth_table().rows().collect()
}
