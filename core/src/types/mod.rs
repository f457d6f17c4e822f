pub(crate) mod config;
pub use config::{DEFAULT_LIMIT, IndexConfig};

pub(crate) mod matching;
pub use matching::Matching;

pub(crate) mod record_id;
pub use record_id::RecordId;
