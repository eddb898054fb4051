use crate::_test_util::{mk_formula, mk_random_formula, truth_table_rows};
use crate::*;
use std::collections::BTreeSet;

fn clause_set(formula: &PropFormula) -> BTreeSet<BTreeSet<Literal>> {
    formula
        .clauses()
        .unwrap()
        .iter()
        .map(|c| c.literals().iter().cloned().collect())
        .collect()
}

#[test]
fn pipeline_implication() {
    let prefix = infix_to_prefix("p > q");
    assert_eq!(
        vec![
            Token::Binary(BinaryOp::Imp),
            Token::Atom("p".to_string()),
            Token::Atom("q".to_string())
        ],
        prefix
    );
    let formula = PropFormula::from_prefix(&prefix).unwrap();
    assert_eq!(
        PropFormula::mk_imp(PropFormula::mk_atom("p"), PropFormula::mk_atom("q")),
        formula
    );
    let clauses = formula.to_cnf().clauses().unwrap();
    assert_eq!(1, clauses.len());
    assert_eq!(vec!["~p", "q"], clauses[0].to_strings());
    let validity = CnfValidity::of_clauses(&clauses);
    assert_eq!(0, validity.tautologies());
    assert_eq!(1, validity.non_tautologies());
    assert!(!validity.is_tautology());
}

#[test]
fn pipeline_excluded_middle() {
    let report = FormulaReport::analyze("p + ~p").unwrap();
    assert_eq!(1, report.clauses.len());
    assert_eq!(vec!["p", "~p"], report.clauses[0].to_strings());
    assert_eq!(1, report.validity.tautologies());
    assert_eq!(0, report.validity.non_tautologies());
    assert!(report.validity.is_tautology());
}

#[test]
fn pipeline_distribution() {
    let report = FormulaReport::analyze("(p * q) + r").unwrap();
    assert_eq!("+ * p q r", report.prefix_string());
    assert_eq!("((p * q) + r)", report.infix);
    assert_eq!(mk_formula("(p + r) * (q + r)"), report.cnf);
    let clauses: Vec<Vec<String>> = report.clauses.iter().map(|c| c.to_strings()).collect();
    assert_eq!(vec![vec!["p", "r"], vec!["q", "r"]], clauses);
    assert!(!report.validity.is_tautology());
}

#[test]
fn pipeline_tautology_verdicts() {
    // Distribution turns both formulas into clauses with complementary literals only.
    let report = FormulaReport::analyze("(p > q) + (q > p)").unwrap();
    assert_eq!(1, report.clauses.len());
    assert!(report.validity.is_tautology());
    let report = FormulaReport::analyze("(p * q) + ~p + ~q").unwrap();
    assert_eq!(2, report.validity.tautologies());
    assert!(report.validity.is_tautology());
    // The check only looks at individual clauses: neither `p` nor `~p` is a tautology.
    let report = FormulaReport::analyze("p * ~p").unwrap();
    assert_eq!(2, report.validity.non_tautologies());
}

#[test]
fn infix_round_trip() {
    let inputs = [
        "p",
        "~p",
        "~~p",
        "p > q > r",
        "p > (q > r)",
        "~(a * b) + c > d * ~e",
        "x_1 * (x_2 + ~(x_3 > x_1))",
    ];
    for input in inputs.iter() {
        let formula = mk_formula(input);
        assert_eq!(formula, mk_formula(&formula.to_string()));
    }
    for seed in 0..20u64 {
        let formula = mk_random_formula((seed % 5) as u8, 4, seed);
        let rebuilt = PropFormula::from_prefix(&infix_to_prefix(&formula.to_infix())).unwrap();
        assert_eq!(formula, rebuilt);
    }
}

#[test]
fn prefix_rendering_rebuilds_formula() {
    let formula = mk_formula("~(a * b) + c > d * ~e");
    let prefix = render_prefix(&infix_to_prefix(&formula.to_string()));
    assert_eq!("> + ~ * a b c * d ~ e", prefix);
    assert_eq!(formula, PropFormula::from_prefix(&tokenize(&prefix)).unwrap());
}

#[test]
fn cnf_is_idempotent() {
    let inputs = ["p", "~p + q", "(a + ~b) * c * (~c + d + a)", "(p * q) + r"];
    for input in inputs.iter() {
        let cnf = mk_formula(input).to_cnf();
        let again = cnf.to_cnf();
        assert!(again.is_cnf());
        assert_eq!(clause_set(&cnf), clause_set(&again));
    }
}

#[test]
fn height_is_positive() {
    assert_eq!(1, mk_formula("p").height());
    for seed in 0..20u64 {
        let height = (seed % 6) as u8;
        let formula = mk_random_formula(height, 3, seed);
        assert!(formula.height() >= 1);
        // Each level may add a negation on top of the binary node.
        assert!(formula.height() > height as usize);
        assert!(formula.height() <= 2 * height as usize + 1);
    }
}

#[test]
fn truth_table_matches_evaluation() {
    let formula = mk_formula("(a > b) * ~(c + a)");
    let table = formula.truth_table();
    let atoms: Vec<String> = table.atoms().to_vec();
    let rows = truth_table_rows(&formula);
    assert_eq!(8, rows.len());
    for row in rows {
        let assignment: Assignment = atoms.iter().cloned().zip(row.values.iter().cloned()).collect();
        assert_eq!(Ok(row.result), formula.eval_in(&assignment));
    }
}

#[test]
fn evaluation_with_incremental_assignment() {
    let formula = mk_formula("x1 * (x2 > x3)");
    let mut assignment = Assignment::new();
    assignment.set("x1", true);
    assignment.set("x2", true);
    assert_eq!(vec!["x3".to_string()], assignment.missing_atoms(&formula));
    assert_eq!(
        Err(EvalError::MissingAtom("x3".to_string())),
        formula.eval_in(&assignment)
    );
    assignment.set("x3", false);
    assert_eq!(Ok(false), formula.eval_in(&assignment));
    assignment.set("x3", true);
    assert_eq!(Ok(true), formula.eval_in(&assignment));
}

#[test]
fn deep_dimacs_formula() {
    let mut text = String::from("p cnf 20001 20000\n");
    for i in 1..=20_000 {
        text.push_str(&format!("{} -{} 0\n", i, i + 1));
    }
    let infix = dimacs::dimacs_to_infix(&text).unwrap();
    let report = FormulaReport::analyze(&infix).unwrap();
    // A left-leaning chain of 19 999 conjunctions above a two-literal clause.
    assert_eq!(20_002, report.height);
    assert!(report.cnf.is_cnf());
    assert!(report.formula == report.cnf);
    assert_eq!(20_000, report.clauses.len());
    assert_eq!(vec!["x1", "~x2"], report.clauses[0].to_strings());
    assert_eq!(vec!["x20000", "~x20001"], report.clauses[19_999].to_strings());
    assert_eq!(20_000, report.validity.non_tautologies());

    let values: Assignment = (1..=20_001).map(|i| (format!("x{}", i), true)).collect();
    assert_eq!(Ok(true), report.formula.eval_in(&values));
}

#[test]
fn deep_negation_chain() {
    let input = format!("{}p", "~".repeat(10_001));
    let report = FormulaReport::analyze(&input).unwrap();
    assert_eq!(10_002, report.height);
    assert_eq!(10_001 * 3 + 1, report.infix.len());
    assert_eq!("(~p)", report.cnf.to_string());
    assert_eq!(vec!["~p"], report.clauses[0].to_strings());
    assert!(!report.validity.is_tautology());
    let values = Assignment::from_values(&[("p", true)]);
    assert_eq!(Ok(false), report.formula.eval_in(&values));
}

#[test]
fn deep_formula_distribution() {
    // Each disjunction is distributed over a long conjunction.
    let conjunction = (0..5_000)
        .map(|i| format!("a{}", i))
        .collect::<Vec<_>>()
        .join(" * ");
    let report = FormulaReport::analyze(&format!("b + ({})", conjunction)).unwrap();
    assert_eq!(5_000, report.clauses.len());
    assert_eq!(vec!["b", "a0"], report.clauses[0].to_strings());
    assert_eq!(vec!["b", "a4999"], report.clauses[4_999].to_strings());
}
