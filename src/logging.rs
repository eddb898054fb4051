pub mod targets {
    pub const PARSER: &str = "parser";
    pub const CNF: &str = "cnf";
    pub const CLAUSES: &str = "clauses";
    pub const TRUTH_TABLE: &str = "truth table";
}
