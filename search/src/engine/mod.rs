mod builder;
mod trie;

use crate::query::SearchQuery;
use crate::results::SearchResults;
use builder::{Expanded, insert_batch};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use trie::{NodeId, Trie};
use typeahead_core::keys::{expand_keys, lookup_key};
use typeahead_core::normalize::{Normalizer, StopWords, default_normalizer, stopword_set};
use typeahead_core::types::{IndexConfig, Matching, RecordId};

pub use builder::{Comparator, Entry, SearchItem};

/// In-memory prefix search index over records of type `T`.
///
/// Records are owned by the index and addressed by the [`RecordId`] they
/// were given on insertion: records passed to a build get ids `0..n` in
/// input order, and [`SearchIndex::append`] returns the ids it issued.
pub struct SearchIndex<T> {
    trie: Trie,
    records: Vec<T>,
    config: IndexConfig,
    comparator: Option<Comparator<T>>,
    normalizer: Normalizer,
    stopwords: StopWords,
}

/// Configures the strategies of a [`SearchIndex`] before building it.
pub struct SearchIndexBuilder<T> {
    config: IndexConfig,
    comparator: Option<Comparator<T>>,
    normalizer: Option<Normalizer>,
}

impl<T> SearchIndexBuilder<T> {
    /// Orders entries within each build or append batch.
    pub fn comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(Entry<'_, T>, Entry<'_, T>) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(compare));
        self
    }

    /// Replaces the default normalizer for keys, queries and stopwords.
    pub fn normalizer<F>(mut self, normalize: F) -> Self
    where
        F: Fn(&str, &StopWords) -> Vec<String> + Send + Sync + 'static,
    {
        self.normalizer = Some(Arc::new(normalize));
        self
    }

    pub fn build(self, items: Vec<SearchItem<T>>) -> SearchIndex<T> {
        let problems = self.config.validate();
        if !problems.is_empty() {
            warn!(?problems, "building search index with invalid config");
        }

        let normalizer = self
            .normalizer
            .unwrap_or_else(|| default_normalizer(self.config.punctuation));
        let stopwords = stopword_set(&self.config.stopwords, &normalizer);

        let mut index = SearchIndex {
            trie: Trie::new(),
            records: Vec::with_capacity(items.len()),
            config: self.config,
            comparator: self.comparator,
            normalizer,
            stopwords,
        };
        index.append(items);
        index
    }
}

/// Create operations.
impl<T> SearchIndex<T> {
    /// Builds an index with the default comparator and normalizer.
    pub fn new(items: Vec<SearchItem<T>>, config: IndexConfig) -> Self {
        Self::builder(config).build(items)
    }

    pub fn builder(config: IndexConfig) -> SearchIndexBuilder<T> {
        SearchIndexBuilder {
            config,
            comparator: None,
            normalizer: None,
        }
    }

    /// Starts a builder from a TOML config file; a missing file means defaults.
    pub fn builder_from_path(path: &Path) -> typeahead_core::Result<SearchIndexBuilder<T>> {
        let config = IndexConfig::load(path)?;
        Ok(Self::builder(config))
    }
}

/// Mutation operations.
impl<T> SearchIndex<T> {
    /// Adds records without touching existing paths or bucket order.
    ///
    /// The batch is sorted on its own; records landing on an existing key
    /// go after the ones already there.
    pub fn append(&mut self, items: impl IntoIterator<Item = SearchItem<T>>) -> Vec<RecordId> {
        let mut ids = Vec::new();
        let mut batch = Vec::new();

        for item in items {
            let record = RecordId::new(self.records.len());
            let tokens = (self.normalizer)(&item.key, &self.stopwords);
            batch.extend(
                expand_keys(&tokens, self.config.index_parts)
                    .into_iter()
                    .map(|key| Expanded { key, record }),
            );
            self.records.push(item.data);
            ids.push(record);
        }

        let entries = batch.len();
        let keys = insert_batch(
            &mut self.trie,
            batch,
            &self.records,
            self.comparator.as_ref(),
        );

        debug!(
            records = ids.len(),
            entries,
            keys,
            nodes = self.trie.node_count(),
            "appended records to search index"
        );

        ids
    }
}

/// Search operations.
impl<T> SearchIndex<T> {
    /// Runs `query` and returns pinned ids followed by fresh matches.
    ///
    /// A query whose path does not exist, or whose budget is used up by
    /// pinned values, simply yields fewer results.
    pub fn search(&self, query: SearchQuery) -> SearchResults<'_, T> {
        let SearchQuery {
            text,
            matching,
            output_size,
            pinned,
        } = query;

        let budget = self.resolve_output_size(output_size).saturating_sub(pinned.len());
        let key = self.lookup_key(&text);

        let fresh = match self.trie.find(&key) {
            Some(node) => {
                let skip: HashSet<RecordId> = pinned.iter().copied().collect();
                self.collect(node, matching, budget, &skip)
            }
            None => Vec::new(),
        };

        trace!(
            key = %key,
            %matching,
            budget,
            pinned = pinned.len(),
            found = fresh.len(),
            "searched index"
        );

        let mut ids = pinned;
        ids.extend(fresh);

        SearchResults {
            ids,
            records: &self.records,
        }
    }

    /// Pre-order walk from `start`: own bucket first, then children in
    /// stored order. Strict matching never leaves `start`.
    fn collect(
        &self,
        start: NodeId,
        matching: Matching,
        budget: usize,
        pinned: &HashSet<RecordId>,
    ) -> Vec<RecordId> {
        let mut found = Vec::new();
        if budget == 0 {
            return found;
        }

        let mut emitted = HashSet::new();
        let mut pending = vec![start];

        while let Some(node) = pending.pop() {
            for &record in self.trie.bucket(node) {
                if pinned.contains(&record) || !emitted.insert(record) {
                    continue;
                }
                found.push(record);
                if found.len() >= budget {
                    return found;
                }
            }

            if matching == Matching::Beginning {
                pending.extend(self.trie.children(node).rev());
            }
        }

        found
    }

    /// 0 or anything above the configured limit means the limit.
    fn resolve_output_size(&self, requested: usize) -> usize {
        if requested == 0 || requested > self.config.limit {
            self.config.limit
        } else {
            requested
        }
    }

    fn lookup_key(&self, text: &str) -> String {
        lookup_key(&(self.normalizer)(text, &self.stopwords))
    }
}

/// Exact match operations.
impl<T> SearchIndex<T> {
    /// Returns true if `text` normalizes to a key some record is indexed under.
    pub fn has_key(&self, text: &str) -> bool {
        self.trie.find(&self.lookup_key(text)).is_some_and(|node| {
            self.trie.terminal_key(node).is_some() && !self.trie.bucket(node).is_empty()
        })
    }
}

/// Record access.
impl<T> SearchIndex<T> {
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(id.into_inner())
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}
