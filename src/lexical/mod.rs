//! The lexical module is responsible for converting raw text into tokens, one token per request.

pub mod token;

mod lexer;
pub use lexer::Lexer;

mod error;
pub use error::{Error, UnrecognizedCharacter};
