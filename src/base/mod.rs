//! The base module contains the core functionality shared by every phase of the evaluator.

pub mod source;

mod error;
#[doc(inline)]
pub use error::{Error, ErrorKind, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler, VoidHandler};

pub mod log;
