//! A left-to-right integer arithmetic evaluator.
//!
//! Expressions consist of non-negative integer literals and the binary operators `+ - * /`.
//! Operators are applied strictly in the order they appear, there is no precedence. Integers
//! have arbitrary precision, so results never overflow:
//!
//! ```
//! assert_eq!(lrcalc::evaluate("2+3*4"), Ok(20.into()));
//! assert_eq!(lrcalc::evaluate("10 - 2 - 3"), Ok(5.into()));
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod arithmetic;
pub mod base;
pub mod lexical;
pub mod syntax;

use num_bigint::BigInt;

use base::{source::Source, Handler, Result, VoidHandler};
use lexical::Lexer;
use syntax::Evaluator;

/// Evaluates the given single line expression.
///
/// # Errors
/// - If the input contains a character that is not whitespace, a digit or an operator.
/// - If the input is not of the form `INTEGER (OPERATOR INTEGER)*`.
/// - If the divisor of a division is zero.
pub fn evaluate(text: &str) -> Result<BigInt> {
    evaluate_with(&VoidHandler, text)
}

/// Evaluates the given single line expression, passing a failure to the handler.
///
/// # Errors
/// - If the input contains a character that is not whitespace, a digit or an operator.
/// - If the input is not of the form `INTEGER (OPERATOR INTEGER)*`.
/// - If the divisor of a division is zero.
pub fn evaluate_with(handler: &impl Handler<base::Error>, text: &str) -> Result<BigInt> {
    let source = Source::new(text);

    Evaluator::new(Lexer::new(&source)).evaluate(handler)
}
