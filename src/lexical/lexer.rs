//! Contains the [`Lexer`] that hands out tokens on demand.

use std::sync::Arc;

use num_bigint::BigInt;

use crate::base::source::{Source, SourceIterator};

use super::{
    error::UnrecognizedCharacter,
    token::{Token, TokenKind},
    Error,
};

/// Converts an input line into [`Token`]s, one token per call to [`Lexer::next_token`].
///
/// The cursor only ever moves forward. Once the input is exhausted every further call returns a
/// [`TokenKind::EndOfInput`] token without advancing.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    iter: SourceIterator<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of the given source.
    #[must_use]
    pub fn new(source: &'a Arc<Source>) -> Self {
        Self {
            iter: source.iter(),
            finished: false,
        }
    }

    /// Gets the source the lexer is reading from.
    #[must_use]
    pub fn source(&self) -> &'a Arc<Source> {
        self.iter.source()
    }

    /// Gets the byte offset of the cursor.
    pub fn offset(&mut self) -> usize {
        self.iter.offset()
    }

    /// Lexes the next token of the input.
    ///
    /// Whitespace in front of the token is skipped. A run of digits is always a single
    /// [`TokenKind::Integer`] token, regardless of its length.
    ///
    /// # Errors
    /// - [`Error::UnrecognizedCharacter`] - The next character is not whitespace, a digit or an
    ///   operator.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        Self::walk_iter(&mut self.iter, char::is_whitespace);

        let Some((start, character)) = self.iter.next() else {
            let token = Token::end_of_input(self.iter.source());
            tracing::trace!(%token, "reached end of input");
            return Ok(token);
        };

        let token = if character.is_ascii_digit() {
            self.handle_integer_literal(start)
        } else if let Some(token) = TokenKind::from_operator_char(character)
            .and_then(|kind| Token::operator(kind, self.iter.span_from(start)))
        {
            token
        } else {
            let span = self.iter.span_from(start);
            let error = UnrecognizedCharacter {
                character,
                position: span.position(),
                span,
            };
            tracing::trace!(character = %character.escape_debug(), position = error.position, "unrecognized character");
            return Err(error.into());
        };

        tracing::trace!(%token, "lexed token");
        Ok(token)
    }

    /// Increments the iterator while the predicate returns true.
    fn walk_iter(iter: &mut SourceIterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Handles the maximal run of digits starting at `start`.
    fn handle_integer_literal(&mut self, start: usize) -> Token {
        Self::walk_iter(&mut self.iter, |character| character.is_ascii_digit());

        let span = self.iter.span_from(start);
        let value = BigInt::parse_bytes(span.str().as_bytes(), 10)
            .unwrap_or_else(|| unreachable!("span only contains ascii digits"));

        Token::integer(value, span)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including the first [`TokenKind::EndOfInput`] token or error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = result
            .as_ref()
            .map_or(true, |token| token.kind() == TokenKind::EndOfInput);
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, Option<i64>)> {
        let source = Source::new(input);
        Lexer::new(&source)
            .map(|token| {
                let token = token.unwrap();
                let value = token.value().map(|value| i64::try_from(value).unwrap());
                (token.kind(), value)
            })
            .collect()
    }

    #[test]
    fn next_token() {
        let tests = [
            (TokenKind::Integer, Some(12)),
            (TokenKind::Plus, None),
            (TokenKind::Integer, Some(3)),
            (TokenKind::Minus, None),
            (TokenKind::Integer, Some(40)),
            (TokenKind::Multiply, None),
            (TokenKind::Integer, Some(0)),
            (TokenKind::Divide, None),
            (TokenKind::Integer, Some(7)),
            (TokenKind::EndOfInput, None),
        ];

        assert_eq!(kinds("12+3 - 40\t*0 /7"), tests);
    }

    #[test]
    fn test_multi_digit_integer_is_one_token() {
        let source = Source::new("007 12345");
        let mut lexer = Lexer::new(&source);

        let first = lexer.next_token().unwrap();
        assert_eq!(first.value(), Some(&7.into()));
        assert_eq!(first.span().str(), "007");

        let second = lexer.next_token().unwrap();
        assert_eq!(second.value(), Some(&12345.into()));
        assert_eq!(second.span().position(), 4);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(kinds(""), vec![(TokenKind::EndOfInput, None)]);
        assert_eq!(kinds("  \t "), vec![(TokenKind::EndOfInput, None)]);
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let source = Source::new("5 ");
        let mut lexer = Lexer::new(&source);

        assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Integer);
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind(), TokenKind::EndOfInput);
            assert_eq!(lexer.offset(), 2);
        }
    }

    #[test]
    fn test_unrecognized_character() {
        let source = Source::new("3&4");
        let mut lexer = Lexer::new(&source);

        assert_eq!(lexer.next_token().unwrap().value(), Some(&3.into()));
        let Err(Error::UnrecognizedCharacter(error)) = lexer.next_token() else {
            panic!("expected an unrecognized character error");
        };
        assert_eq!(error.character, '&');
        assert_eq!(error.position, 1);
        assert_eq!(error.span.str(), "&");
    }

    #[test]
    fn test_negative_literal_is_minus_operator() {
        assert_eq!(
            kinds("-7"),
            vec![
                (TokenKind::Minus, None),
                (TokenKind::Integer, Some(7)),
                (TokenKind::EndOfInput, None),
            ]
        );
    }

    #[test]
    fn test_integer_literal_wider_than_i64() {
        let source = Source::new("1 + 99999999999999999999");
        let mut lexer = Lexer::new(&source);

        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), TokenKind::Integer);
        assert_eq!(
            token.value().map(ToString::to_string),
            Some("99999999999999999999".to_string())
        );
        assert_eq!(token.span().str(), "99999999999999999999");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let source = Source::new("1 ? 2");
        let results = Lexer::new(&source).collect::<Vec<_>>();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
