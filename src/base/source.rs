//! Module for handling the evaluated input line and its elements.

use std::{
    cmp::Ordering,
    fmt::Debug,
    iter::{Iterator, Peekable},
    str::CharIndices,
    sync::Arc,
};

use derive_more::Deref;
use getset::{CopyGetters, Getters};

/// Represents a single line of input that is being evaluated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Deref, Getters)]
pub struct Source {
    /// Get the content of the source.
    #[deref]
    #[get = "pub"]
    content: String,
}

impl Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Source").field(&self.content).finish()
    }
}

impl Source {
    /// Creates a new shared source from the given text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            content: content.into(),
        })
    }

    /// Get the [`SourceIterator`] for the source.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> SourceIterator<'a> {
        SourceIterator {
            source: self,
            iterator: self.content().char_indices().peekable(),
        }
    }
}

/// Represents a range of characters in a [`Source`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct Span {
    start: usize,
    /// Exclusive.
    end: usize,

    /// Get the source that the span is located in.
    #[get = "pub"]
    source: Arc<Source>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_ptr_value = Arc::as_ptr(&self.source) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source) as usize;

        self_ptr_value
            .cmp(&other_ptr_value)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source).hash(state);
    }
}

impl Span {
    /// Create a span from the given start and end byte indices in the source.
    ///
    /// Returns [`None`] if the indices are out of order, out of bounds or not on character
    /// boundaries.
    #[must_use]
    pub fn new(source: Arc<Source>, start: usize, end: usize) -> Option<Self> {
        if start > end
            || source.content().len() < end
            || !source.content().is_char_boundary(start)
            || !source.content().is_char_boundary(end)
        {
            return None;
        }

        Some(Self { start, end, source })
    }

    /// Create an empty span located right after the last character of the source.
    #[must_use]
    pub fn at_end(source: Arc<Source>) -> Self {
        let end = source.content().len();
        Self {
            start: end,
            end,
            source,
        }
    }

    /// Get the string slice of the source that the span represents.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source.content()[self.start..self.end]
    }

    /// Get the character position (starting at 0) where the span starts.
    #[must_use]
    pub fn position(&self) -> usize {
        self.source.content()[..self.start].chars().count()
    }

    /// Get the number of characters the span covers.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.str().chars().count()
    }
}

/// Iterator iterating over the characters in a source that can be peeked at.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the source that the iterator is iterating over.
    #[get_copy = "pub"]
    source: &'a Arc<Source>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> SourceIterator<'a> {
    /// Peek at the next character in the source.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.iterator.peek().copied()
    }

    /// Get the byte index of the next character, or the source length if the iterator is
    /// exhausted.
    pub fn offset(&mut self) -> usize {
        self.peek()
            .map_or_else(|| self.source.content().len(), |(index, _)| index)
    }

    /// Creates a span from the given start byte index to the current location of the iterator.
    ///
    /// `start` must be a byte index previously yielded by this iterator.
    pub fn span_from(&mut self, start: usize) -> Span {
        let end = self.offset();
        Span {
            start,
            end,
            source: self.source.clone(),
        }
    }
}

impl<'a> Iterator for SourceIterator<'a> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }
}
