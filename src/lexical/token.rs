//! Contains the [`Token`] struct and its related types.

use std::{fmt::Display, sync::Arc};

use getset::{CopyGetters, Getters};
use num_bigint::BigInt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    arithmetic::Operator,
    base::source::{Source, Span},
};

/// Is an enumeration containing all kinds of tokens an expression is made of.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Multiply,
    Divide,
    EndOfInput,
}

impl TokenKind {
    /// Gets the name of the token kind as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::EndOfInput => "EndOfInput",
        }
    }

    /// Gets the [`Operator`] the token kind stands for, if it is an operator.
    #[must_use]
    pub fn operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Subtract),
            Self::Multiply => Some(Operator::Multiply),
            Self::Divide => Some(Operator::Divide),
            Self::Integer | Self::EndOfInput => None,
        }
    }

    /// Whether the token kind is one of the four binary operators.
    #[must_use]
    pub fn is_operator(self) -> bool {
        self.operator().is_some()
    }

    /// Gets the operator token kind spelled by the given character.
    #[must_use]
    pub fn from_operator_char(character: char) -> Option<Self> {
        Self::iter().find(|kind| {
            kind.operator()
                .is_some_and(|operator| operator.as_char() == character)
        })
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the smallest classified unit of an expression.
///
/// A token is fully determined on construction and never mutated afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    value: Option<BigInt>,

    /// Get the span that makes up the token.
    #[get = "pub"]
    span: Span,
}

impl Token {
    /// Creates an integer token with the given value.
    #[must_use]
    pub fn integer(value: BigInt, span: Span) -> Self {
        Self {
            kind: TokenKind::Integer,
            value: Some(value),
            span,
        }
    }

    /// Creates an operator token.
    ///
    /// Returns [`None`] if `kind` is not an operator kind.
    #[must_use]
    pub fn operator(kind: TokenKind, span: Span) -> Option<Self> {
        kind.is_operator().then_some(Self {
            kind,
            value: None,
            span,
        })
    }

    /// Creates the token marking the end of the given source.
    #[must_use]
    pub fn end_of_input(source: &Arc<Source>) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            value: None,
            span: Span::at_end(source.clone()),
        }
    }

    /// Get the value of the token, only present for [`TokenKind::Integer`].
    #[must_use]
    pub fn value(&self) -> Option<&BigInt> {
        self.value.as_ref()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind.operator(), &self.value) {
            (Some(operator), _) => write!(f, "Token({}, '{}')", self.kind, operator.as_char()),
            (None, Some(value)) => write!(f, "Token({}, {value})", self.kind),
            (None, None) => write!(f, "Token({}, None)", self.kind),
        }
    }
}
