//! Command line driver: read one formula, print every stage of the analysis.

use clap::Parser;
use prop_cnf::dimacs::dimacs_to_infix;
use prop_cnf::{Assignment, FormulaReport};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a propositional formula to CNF and check its clauses for tautologies.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Infix formula, e.g. `(p * q) + ~r > s`.
    #[arg(short, long, conflicts_with = "dimacs", required_unless_present = "dimacs")]
    formula: Option<String>,

    /// Read the formula from a DIMACS CNF file instead.
    #[arg(short, long)]
    dimacs: Option<PathBuf>,

    /// Assign a value to an atom, e.g. `--assign p=1`. May be repeated.
    #[arg(short, long = "assign", value_parser = parse_assignment)]
    assignments: Vec<(String, bool)>,

    /// Print the full truth table of the formula.
    #[arg(short, long)]
    truth_table: bool,
}

fn parse_assignment(value: &str) -> Result<(String, bool), String> {
    let (name, bit) = value
        .split_once('=')
        .ok_or_else(|| format!("Expected `name=0` or `name=1`, found `{}`.", value))?;
    let bit = match bit.trim() {
        "0" | "false" => false,
        "1" | "true" => true,
        other => return Err(format!("Invalid truth value `{}`.", other)),
    };
    Ok((name.trim().to_string(), bit))
}

fn read_input(args: &Args) -> Result<String, String> {
    if let Some(path) = &args.dimacs {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read `{}`: {}", path.display(), e))?;
        dimacs_to_infix(&text).map_err(|e| e.to_string())
    } else {
        Ok(args.formula.clone().unwrap_or_default())
    }
}

fn run(args: &Args) -> Result<(), String> {
    let input = read_input(args)?;
    let report = FormulaReport::analyze(&input).map_err(|e| e.to_string())?;

    println!("prefix: {}", report.prefix_string());
    println!("infix: {}", report.infix);
    println!("height: {}", report.height);

    if !args.assignments.is_empty() {
        let assignment: Assignment = args.assignments.iter().cloned().collect();
        let value = report.formula.eval_in(&assignment).map_err(|e| e.to_string())?;
        println!("value: {}", value);
    }

    if args.truth_table {
        let table = report.formula.truth_table();
        println!("{} | result", table.atoms().join(" "));
        for row in table.rows() {
            let values: Vec<&str> = row
                .values
                .iter()
                .map(|v| if *v { "1" } else { "0" })
                .collect();
            println!("{} | {}", values.join(" "), u8::from(row.result));
        }
    }

    println!("cnf: {}", report.cnf);
    for clause in &report.clauses {
        println!("clause: {}", clause);
    }
    println!("tautological clauses: {}", report.validity.tautologies());
    println!("other clauses: {}", report.validity.non_tautologies());
    println!("tautology: {}", report.validity.is_tautology());
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(feature = "logger")]
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}
