use crate::_impl_prefix::tokens_to_prefix;
use crate::{render_prefix, tokenize, CnfValidity, FormulaReport, PropFormula, ReportError};

impl FormulaReport {
    /// Run the whole analysis pipeline on an infix formula.
    ///
    /// Evaluation and truth tables are not part of the report: the first needs an
    /// assignment from the caller and the second is exponential in the number of atoms.
    /// Use `PropFormula::eval_in` and `PropFormula::truth_table` on `formula` instead.
    pub fn analyze(input: &str) -> Result<FormulaReport, ReportError> {
        let prefix = tokens_to_prefix(&tokenize(input));
        let formula = PropFormula::from_prefix(&prefix)?;
        let infix = formula.to_infix();
        let height = formula.height();
        let cnf = formula.to_cnf();
        let clauses = cnf.clauses()?;
        let validity = CnfValidity::of_clauses(&clauses);
        Ok(FormulaReport {
            prefix,
            formula,
            infix,
            height,
            cnf,
            clauses,
            validity,
        })
    }

    /// The prefix tokens as space separated text.
    pub fn prefix_string(&self) -> String {
        render_prefix(&self.prefix)
    }
}
