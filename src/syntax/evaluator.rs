//! Contains the [`Evaluator`] folding a token stream into a single integer.

use num_bigint::BigInt;

use crate::{
    arithmetic::{ArithmeticError, DivisionByZero, Operator},
    base::{self, Handler},
    lexical::{
        token::{Token, TokenKind},
        Lexer,
    },
};

use super::{
    error::{SyntaxKind, UnexpectedSyntax},
    Error,
};

/// The position of the evaluator within the grammar `INTEGER (OPERATOR INTEGER)*`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Nothing has been read yet, the expression must start with a number.
    ExpectFirstInteger,
    /// A number has been folded into the result.
    ExpectOperatorOrEnd,
    /// The given operator has been read and waits for its right operand.
    ExpectSecondInteger(Operator),
    /// The end of input has been reached after a complete expression.
    Done,
}

impl State {
    /// Gets the kind of syntax that is allowed in this state.
    #[must_use]
    pub fn expected(self) -> SyntaxKind {
        match self {
            Self::ExpectFirstInteger | Self::ExpectSecondInteger(_) => SyntaxKind::Integer,
            Self::ExpectOperatorOrEnd => {
                SyntaxKind::Either(&[SyntaxKind::Operator, SyntaxKind::EndOfInput])
            }
            Self::Done => SyntaxKind::Either(&[]),
        }
    }
}

/// Pulls tokens from a [`Lexer`] one at a time and folds them strictly from left to right.
///
/// There is no operator precedence: `2+3*4` evaluates as `(2+3)*4`.
#[derive(Debug)]
pub struct Evaluator<'a> {
    lexer: Lexer<'a>,
    state: State,
    result: BigInt,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator reading from the given lexer.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            state: State::ExpectFirstInteger,
            result: BigInt::default(),
        }
    }

    /// Gets the current state of the evaluator.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Evaluates the whole expression and returns its value.
    ///
    /// The first error aborts the evaluation, it is passed to the handler and returned.
    ///
    /// # Errors
    /// - [`base::Error::LexicalError`] - The input contains an invalid character or literal.
    /// - [`base::Error::ParseError`] - The tokens do not form `INTEGER (OPERATOR INTEGER)*`.
    /// - [`base::Error::ArithmeticError`] - The divisor of a division is zero.
    #[tracing::instrument(level = "debug", skip_all, fields(input = %self.lexer.source().content()))]
    pub fn evaluate(mut self, handler: &impl Handler<base::Error>) -> base::Result<BigInt> {
        while self.state != State::Done {
            if let Err(error) = self.step() {
                tracing::debug!(kind = %error.kind(), "evaluation failed");
                handler.receive(error.clone());
                return Err(error);
            }
        }

        tracing::debug!(result = %self.result, "evaluation finished");
        Ok(self.result)
    }

    /// Pulls the next token and advances the state machine by one transition.
    fn step(&mut self) -> base::Result<()> {
        let token = self.lexer.next_token()?;

        let next = match (self.state, token.kind(), token.value()) {
            (State::ExpectFirstInteger, TokenKind::Integer, Some(value)) => {
                self.result = value.clone();
                State::ExpectOperatorOrEnd
            }
            (State::ExpectOperatorOrEnd, TokenKind::EndOfInput, _) => State::Done,
            (State::ExpectOperatorOrEnd, kind, _) => match kind.operator() {
                Some(operator) => State::ExpectSecondInteger(operator),
                None => return Err(self.unexpected(token)),
            },
            (State::ExpectSecondInteger(operator), TokenKind::Integer, Some(value)) => {
                let Some(result) = operator.apply(&self.result, value) else {
                    return Err(ArithmeticError::from(DivisionByZero {
                        dividend: self.result.clone(),
                        span: token.span().clone(),
                    })
                    .into());
                };
                self.result = result;
                State::ExpectOperatorOrEnd
            }
            _ => return Err(self.unexpected(token)),
        };

        tracing::trace!(from = ?self.state, to = ?next, result = %self.result, "transition");
        self.state = next;
        Ok(())
    }

    fn unexpected(&self, found: Token) -> base::Error {
        Error::from(UnexpectedSyntax {
            state: self.state,
            found,
        })
        .into()
    }
}
