//! Contains the error types that can occur while reading the grammar of an expression.

use std::fmt::Display;

use itertools::Itertools as _;

use crate::{
    base::log::{Message, Severity, SourceCodeDisplay},
    lexical::token::{Token, TokenKind},
};

use super::State;

/// An enumeration containing all kinds of syntactic errors that can occur while evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnexpectedSyntax(#[from] UnexpectedSyntax),
}

/// Enumeration containing all kinds of syntax that can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum SyntaxKind {
    Either(&'static [SyntaxKind]),
    Integer,
    Operator,
    EndOfInput,
}

impl SyntaxKind {
    fn expected_binding_str(&self) -> String {
        match self {
            Self::Either(variants) => match variants {
                [] => "nothing".to_string(),
                [single] => single.expected_binding_str(),
                [init @ .., last] => format!(
                    "{} or {}",
                    init.iter().map(Self::expected_binding_str).join(", "),
                    last.expected_binding_str()
                ),
            },
            Self::Integer => "a number".to_string(),
            Self::Operator => "an operator".to_string(),
            Self::EndOfInput => "end of input".to_string(),
        }
    }
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expected_binding_str())
    }
}

/// A token was found that is not allowed in the current state of the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnexpectedSyntax {
    /// The state the evaluator was in.
    pub state: State,

    /// The invalid token that was found.
    pub found: Token,
}

impl UnexpectedSyntax {
    /// Gets the kind of syntax that was expected instead.
    #[must_use]
    pub fn expected(&self) -> SyntaxKind {
        self.state.expected()
    }
}

impl Display for UnexpectedSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expected_binding = self.expected().expected_binding_str();
        let context = match self.state {
            State::ExpectFirstInteger => " at the start of the expression".to_string(),
            State::ExpectSecondInteger(operator) => format!(" after the operator `{operator}`"),
            State::ExpectOperatorOrEnd | State::Done => String::new(),
        };
        let found_binding = match (self.found.kind(), self.found.value()) {
            (TokenKind::EndOfInput, _) => "end of input".to_string(),
            (TokenKind::Integer, Some(value)) => format!("the number `{value}`"),
            _ => format!("the operator `{}`", self.found.span().str()),
        };

        let message = format!("expected {expected_binding}{context}, but found {found_binding}");

        write!(f, "{}", Message::new(Severity::Error, message))?;
        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(self.found.span(), Option::<u8>::None)
        )
    }
}

impl std::error::Error for UnexpectedSyntax {}
