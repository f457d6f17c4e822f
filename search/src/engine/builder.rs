use super::trie::Trie;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use typeahead_core::types::RecordId;

/// A record to index together with the text it is found by.
#[derive(Debug, Clone)]
pub struct SearchItem<T> {
    pub key: String,
    pub data: T,
}

impl<T> SearchItem<T> {
    pub fn new(key: impl Into<String>, data: T) -> Self {
        Self {
            key: key.into(),
            data,
        }
    }
}

/// One expanded entry as seen by a [`Comparator`]: a normalized key and the
/// record indexed under it.
#[derive(Debug)]
pub struct Entry<'a, T> {
    pub key: &'a str,
    pub data: &'a T,
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

/// Orders entries before insertion; must be a total preorder.
///
/// Entries comparing equal keep their input order. Without a comparator,
/// entries are ordered by key alone.
pub type Comparator<T> = Arc<dyn Fn(Entry<'_, T>, Entry<'_, T>) -> Ordering + Send + Sync>;

#[derive(Debug)]
pub(crate) struct Expanded {
    pub(crate) key: String,
    pub(crate) record: RecordId,
}

/// Sorts one batch of expanded entries, groups them by key and inserts each
/// group into `trie`. Returns the number of distinct keys in the batch.
pub(crate) fn insert_batch<T>(
    trie: &mut Trie,
    mut batch: Vec<Expanded>,
    records: &[T],
    comparator: Option<&Comparator<T>>,
) -> usize {
    match comparator {
        Some(compare) => batch.sort_by(|a, b| {
            compare(
                Entry {
                    key: &a.key,
                    data: &records[a.record.into_inner()],
                },
                Entry {
                    key: &b.key,
                    data: &records[b.record.into_inner()],
                },
            )
        }),
        None => batch.sort_by(|a, b| a.key.cmp(&b.key)),
    }

    let groups = group_by_key(batch);
    let key_count = groups.len();
    for (key, group) in groups {
        trie.insert(&key, group);
    }
    key_count
}

/// Groups entries sharing a key, ordered by each key's first appearance.
fn group_by_key(batch: Vec<Expanded>) -> Vec<(String, Vec<RecordId>)> {
    let mut groups: Vec<(String, Vec<RecordId>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in batch {
        match positions.get(&entry.key) {
            Some(&at) => groups[at].1.push(entry.record),
            None => {
                positions.insert(entry.key.clone(), groups.len());
                groups.push((entry.key, vec![entry.record]));
            }
        }
    }

    groups
}
