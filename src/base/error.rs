use enum_as_inner::EnumAsInner;

/// An error that occurred during evaluation.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Error {
    #[error(transparent)]
    LexicalError(#[from] crate::lexical::Error),
    #[error(transparent)]
    ParseError(#[from] crate::syntax::Error),
    #[error(transparent)]
    ArithmeticError(#[from] crate::arithmetic::ArithmeticError),
}

impl Error {
    /// Gets the [`ErrorKind`] of the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LexicalError(_) => ErrorKind::Lex,
            Self::ParseError(_) => ErrorKind::Parse,
            Self::ArithmeticError(_) => ErrorKind::Arithmetic,
        }
    }
}

/// The phase of the evaluation an [`Error`] originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum_macros::Display)]
pub enum ErrorKind {
    /// A character could not be turned into a token.
    #[strum(serialize = "LexError")]
    Lex,
    /// The tokens do not form a valid expression.
    #[strum(serialize = "ParseError")]
    Parse,
    /// An operator could not be applied to its operands.
    #[strum(serialize = "ArithmeticError")]
    Arithmetic,
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
