use crate::logging::targets::PARSER;
use crate::{BinaryOp, Token};
use std::fmt::{Display, Error, Formatter};

/// Split an infix formula into a vector of `Token`s.
///
/// Whitespace is skipped, a maximal run of alphanumeric characters and underscores forms
/// one atom, and every other character forms a single token. The sequence is not validated
/// in any way; malformed input is only detected once a tree is built from it.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut output = Vec::new();
    let mut data = input.chars().peekable();
    while let Some(c) = data.next() {
        match c {
            c if c.is_whitespace() => { /* skip whitespace */ }
            '(' => output.push(Token::Open),
            ')' => output.push(Token::Close),
            '~' => output.push(Token::Not),
            '*' => output.push(Token::Binary(BinaryOp::And)),
            '+' => output.push(Token::Binary(BinaryOp::Or)),
            '>' => output.push(Token::Binary(BinaryOp::Imp)),
            c if c.is_ascii_alphanumeric() => {
                let mut name = String::new();
                name.push(c);
                while let Some(c) = data.peek() {
                    if is_atom_char(*c) {
                        name.push(*c);
                        data.next(); // advance iterator
                    } else {
                        break;
                    }
                }
                output.push(Token::Atom(name));
            }
            _ => output.push(Token::Other(c)),
        }
    }
    log::trace!(target: PARSER, "Tokenized {:?} into {} tokens.", input, output.len());
    output
}

/// **(internal)** Characters that can continue (but not necessarily start) an atom name.
fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl BinaryOp {
    /// The symbol used for this operator in the infix syntax.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::And => '*',
            BinaryOp::Or => '+',
            BinaryOp::Imp => '>',
        }
    }
}

impl Token {
    /// Binding strength of an operator token: `~` (3), `*` (2), `+` (1), `>` (0).
    ///
    /// Returns `None` for tokens which are not operators.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::Not => Some(3),
            Token::Binary(BinaryOp::And) => Some(2),
            Token::Binary(BinaryOp::Or) => Some(1),
            Token::Binary(BinaryOp::Imp) => Some(0),
            _ => None,
        }
    }

    /// True for `~`, `*`, `+` and `>`.
    pub fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }

    /// **(internal)** The same token with parentheses swapped. Used when the token sequence
    /// is processed in reverse.
    pub(crate) fn mirrored(&self) -> Token {
        match self {
            Token::Open => Token::Close,
            Token::Close => Token::Open,
            other => other.clone(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Token::Atom(name) => write!(f, "{}", name),
            Token::Not => write!(f, "~"),
            Token::Binary(op) => write!(f, "{}", op.symbol()),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
            Token::Other(c) => write!(f, "{}", c),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}
