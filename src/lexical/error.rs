use std::fmt::Display;

use derive_more::From;

use crate::base::{
    log::{Message, Severity, SourceCodeDisplay},
    source::Span,
};

/// Represents an error that occurred during the lexical analysis of the input.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error, From)]
pub enum Error {
    #[error(transparent)]
    UnrecognizedCharacter(UnrecognizedCharacter),
}

/// Input contains a character that is neither whitespace, a digit nor an operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub struct UnrecognizedCharacter {
    /// The offending character.
    pub character: char,

    /// Character position (starting at 0) of the offending character.
    pub position: usize,

    /// Span of the offending character.
    pub span: Span,
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "unrecognized character `{}` at position {}",
            self.character.escape_debug(),
            self.position
        );
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(
                &self.span,
                Some("expressions may only contain digits, whitespace and `+ - * /`")
            )
        )
    }
}
