use nutype::nutype;

/// Stable identity of one record inside an index.
///
/// Ids are issued sequentially as records are inserted, so two records with
/// equal payloads still get distinct ids. Deduplication and pinning compare
/// ids, never payloads.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Into,
    Display,
    Serialize,
    Deserialize,
))]
pub struct RecordId(usize);
