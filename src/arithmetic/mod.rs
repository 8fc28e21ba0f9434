//! The arithmetic module applies a single binary operator to an accumulated result.

mod error;
#[doc(inline)]
#[allow(clippy::module_name_repetitions)]
pub use error::{ArithmeticError, DivisionByZero};

mod operator;
pub use operator::Operator;
