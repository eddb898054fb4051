use crate::_impl_prefix::tokens_to_prefix;
use crate::logging::targets::PARSER;
use crate::PropFormula::*;
use crate::{tokenize, BuildError, PropFormula, Token};
use std::str::FromStr;

impl PropFormula {
    /// Build a formula tree from tokens in prefix (Polish) order.
    ///
    /// Tokens are consumed from last to first. Each atom becomes a leaf and each operator
    /// takes its operands from the stack of finished subtrees (the first popped subtree
    /// is the left operand). Fails when an operator lacks operands, when a parenthesis
    /// or an unknown character is encountered, or when the tokens do not describe exactly
    /// one formula.
    pub fn from_prefix(tokens: &[Token]) -> Result<PropFormula, BuildError> {
        let mut stack: Vec<PropFormula> = Vec::new();
        for token in tokens.iter().rev() {
            match token {
                Token::Atom(name) => stack.push(Atom(name.clone())),
                Token::Not => {
                    let operand = pop_operand(&mut stack, token)?;
                    stack.push(Not(Box::new(operand)));
                }
                Token::Binary(op) => {
                    let left = pop_operand(&mut stack, token)?;
                    let right = pop_operand(&mut stack, token)?;
                    stack.push(Binary(*op, Box::new(left), Box::new(right)));
                }
                Token::Open | Token::Close | Token::Other(_) => {
                    return Err(BuildError::UnexpectedToken(token.clone()));
                }
            }
        }

        if stack.len() != 1 {
            log::debug!(target: PARSER, "Prefix tokens left {} subtrees.", stack.len());
            return Err(BuildError::NotSingleTree(stack.len()));
        }
        stack.pop().ok_or(BuildError::NotSingleTree(0))
    }

    /// Parse an infix formula: tokenize, convert to prefix order and build the tree.
    pub fn parse(input: &str) -> Result<PropFormula, BuildError> {
        PropFormula::from_prefix(&tokens_to_prefix(&tokenize(input)))
    }
}

/// **(internal)** Take one finished subtree as an operand of the given operator `token`.
fn pop_operand(stack: &mut Vec<PropFormula>, token: &Token) -> Result<PropFormula, BuildError> {
    stack
        .pop()
        .ok_or_else(|| BuildError::MissingOperand(token.clone()))
}

impl TryFrom<&str> for PropFormula {
    type Error = BuildError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        PropFormula::parse(value)
    }
}

impl FromStr for PropFormula {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropFormula::parse(s)
    }
}
