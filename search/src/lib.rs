//! Typeahead prefix search over normalized keys.
//!
//! Records are indexed under normalized keys in a character trie and looked
//! up by prefix (or exact key) with deduplication, pinned results and result
//! limits.
//!
//! # Design
//!
//! - Every inserted record gets a [`RecordId`]; results, deduplication and
//!   pinning work on ids, so value-equal records stay distinct.
//! - Trie nodes live in an arena and keep their children in first-insertion
//!   order, which fixes the order results come back in.
//! - Each `append` batch is sorted with the configured comparator before it
//!   is inserted. Batches are never re-sorted against each other.
//! - The index is insert-only and not internally synchronized.
//!
//! # API
//!
//! - `SearchIndex::new()` / `SearchIndex::builder()`: Build an index
//! - `append()`: Add records to an existing index
//! - `search()`: Run a [`SearchQuery`] and get [`SearchResults`]

mod engine;
mod query;
mod results;

pub use engine::{Comparator, Entry, SearchIndex, SearchIndexBuilder, SearchItem};
pub use query::SearchQuery;
pub use results::SearchResults;
pub use typeahead_core::normalize::{Normalizer, PunctuationMode, StopWords};
pub use typeahead_core::types::{IndexConfig, Matching, RecordId};
