use serde::{Deserialize, Serialize};
use std::fmt;

/// How a lookup key is matched against indexed keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Matching {
    /// Only records whose full key equals the lookup key.
    Strict,
    /// Records whose key starts with the lookup key.
    #[default]
    Beginning,
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matching::Strict => write!(f, "strict"),
            Matching::Beginning => write!(f, "beginning"),
        }
    }
}
