use crate::_test_util::{mk_random_formula, truth_table_rows};
use crate::*;

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

/// Evaluate a clause list directly, as a conjunction of disjunctions.
fn eval_clauses(clauses: &[Clause], atoms: &[String], values: &[bool]) -> bool {
    clauses.iter().all(|clause| {
        clause.literals().iter().any(|literal| {
            let index = atoms
                .iter()
                .position(|a| a == literal.atom())
                .unwrap_or_else(|| panic!("Unknown atom {}.", literal.atom()));
            values[index] == literal.is_positive()
        })
    })
}

/// Returns true if the formula is neither a tautology nor a contradiction.
fn fuzz_test(num_atoms: u32, height: u8, seed: u64) -> bool {
    let formula = mk_random_formula(height, num_atoms, seed);
    assert_eq!(
        formula,
        PropFormula::try_from(formula.to_string().as_str()).unwrap()
    );

    let cnf = formula.to_cnf();
    assert!(cnf.is_cnf());
    assert_eq!(formula.atoms(), cnf.atoms());

    let rows = truth_table_rows(&formula);
    assert_eq!(rows, truth_table_rows(&cnf));

    let atoms: Vec<String> = formula.atoms().into_iter().collect();
    let clauses = cnf.clauses().unwrap();
    for row in rows.iter() {
        assert_eq!(row.result, eval_clauses(&clauses, &atoms, &row.values));
    }

    // A CNF formula is valid exactly when each of its clauses is.
    let valid = rows.iter().all(|row| row.result);
    assert_eq!(valid, CnfValidity::of_clauses(&clauses).is_tautology());

    !valid && rows.iter().any(|row| row.result)
}

#[test]
fn fuzz_atoms_2() {
    let mut non_trivial = 0;

    for height in 1..5 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(2, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial formulas.",
        non_trivial,
        4 * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_atoms_4() {
    let mut non_trivial = 0;

    for height in 1..5 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(4, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial formulas.",
        non_trivial,
        4 * FUZZ_SEEDS.len()
    );
}
