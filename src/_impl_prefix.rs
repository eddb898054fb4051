//! The conversion reverses the infix tokens, swaps the parentheses and runs the usual
//! operator-precedence stack algorithm, popping only operators with *strictly* higher
//! precedence. Reversing the output then yields prefix notation. As a consequence,
//! operators of equal precedence group to the left in the original formula:
//! `p > q > r` is read as `((p > q) > r)`.
//!
//! The conversion is lenient. Unknown characters are dropped and unbalanced parentheses
//! never fail here. A `(` without a partner pops the whole operator stack. A `)` without
//! a partner is emitted into the output (as `(`), where the tree builder rejects it.

use crate::logging::targets::PARSER;
use crate::{tokenize, Token};

/// Convert an infix formula string into a vector of tokens in prefix (Polish) order.
pub fn infix_to_prefix(input: &str) -> Vec<Token> {
    tokens_to_prefix(&tokenize(input))
}

/// Render prefix tokens as space separated text, e.g. `> p q`.
pub fn render_prefix(tokens: &[Token]) -> String {
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    rendered.join(" ")
}

/// **(internal)** Reorder already tokenized infix input into prefix order.
pub(crate) fn tokens_to_prefix(tokens: &[Token]) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev().map(|t| t.mirrored()) {
        match token {
            Token::Atom(_) => output.push(token),
            Token::Open => operators.push(token),
            Token::Close => {
                while let Some(top) = operators.pop() {
                    if top == Token::Open {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Not | Token::Binary(_) => {
                let precedence = token.precedence();
                while let Some(top) = operators.last() {
                    // A `(` on the stack is not an operator and stops the popping.
                    if top.is_operator() && top.precedence() > precedence {
                        output.extend(operators.pop());
                    } else {
                        break;
                    }
                }
                operators.push(token);
            }
            Token::Other(c) => {
                log::trace!(target: PARSER, "Dropping unknown character {:?}.", c);
            }
        }
    }

    // Any `(` left on the stack comes from an unmatched `)` of the input.
    while let Some(top) = operators.pop() {
        output.push(top);
    }

    output.reverse();
    output
}
