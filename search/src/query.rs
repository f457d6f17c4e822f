//! Search query types.

use typeahead_core::types::{Matching, RecordId};

/// A single search request.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Raw query text; normalized the same way as indexed keys.
    pub text: String,
    pub matching: Matching,
    /// Requested result count, pinned values included. 0 means the index limit.
    pub output_size: usize,
    /// Records forced to the head of the results, in this order.
    pub pinned: Vec<RecordId>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, matching: Matching) -> Self {
        Self {
            text: text.into(),
            matching,
            ..Self::default()
        }
    }

    /// Prefix query: keys starting with `text`.
    pub fn beginning(text: impl Into<String>) -> Self {
        Self::new(text, Matching::Beginning)
    }

    /// Exact query: keys equal to `text`.
    pub fn strict(text: impl Into<String>) -> Self {
        Self::new(text, Matching::Strict)
    }

    pub fn with_output_size(mut self, output_size: usize) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn with_pinned(mut self, pinned: impl IntoIterator<Item = RecordId>) -> Self {
        self.pinned = pinned.into_iter().collect();
        self
    }
}
