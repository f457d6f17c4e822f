//! Search results types.

use typeahead_core::types::RecordId;

/// Ordered search results: pinned ids first, then fresh matches.
///
/// Borrows the records from the index. Pinned ids are returned verbatim;
/// ids the index never issued stay in [`ids`](Self::ids) but are skipped by
/// [`iter`](Self::iter).
#[derive(Debug)]
pub struct SearchResults<'a, T> {
    pub(crate) ids: Vec<RecordId>,
    pub(crate) records: &'a [T],
}

impl<'a, T> SearchResults<'a, T> {
    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn into_ids(self) -> Vec<RecordId> {
        self.ids
    }

    /// Iterates over the records behind the result ids.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        let records = self.records;
        self.ids
            .iter()
            .filter_map(move |id| records.get(id.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
