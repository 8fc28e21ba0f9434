//! This module contains the evaluator reading the grammar `INTEGER (OPERATOR INTEGER)*`.

pub mod error;
#[doc(inline)]
pub use error::{Error, SyntaxKind, UnexpectedSyntax};

mod evaluator;
pub use evaluator::{Evaluator, State};
