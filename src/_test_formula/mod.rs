/// **(internal)** End-to-end scenarios and structural properties of the pipeline.
mod _test_formula_properties;

/// **(internal)** Generate pseudo-random formulas and exhaustively verify that the CNF
/// conversion and the clause analysis agree with the original formula.
mod _test_formula_fuzzing;
