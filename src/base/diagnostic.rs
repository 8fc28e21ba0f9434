use std::{cell::Cell, fmt::Display};

/// Represents a trait responsible for handling diagnostics in the evaluator.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Handler that prints every received error to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintHandler;

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{error}");
    }
}

/// Handler that only records whether an error has been received.
#[derive(Debug, Default)]
pub struct SilentHandler {
    received: Cell<bool>,
}

impl SilentHandler {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one error has been received.
    #[must_use]
    pub fn has_received(&self) -> bool {
        self.received.get()
    }
}

impl<T> Handler<T> for SilentHandler {
    fn receive(&self, _error: T) {
        self.received.set(true);
    }
}

/// Handler that discards every error.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}
}
