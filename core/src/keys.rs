//! Expansion of normalized tokens into indexable keys.

/// Expands one record's tokens into the keys it is indexed under.
///
/// Without `index_parts` there is a single key, the tokens joined by spaces.
/// With it, every trailing word sequence is a key of its own, so
/// `["company", "betta"]` yields `"company betta"` and `"betta"`.
/// No tokens at all still yields the empty key.
pub fn expand_keys(tokens: &[String], index_parts: bool) -> Vec<String> {
    if tokens.is_empty() {
        return vec![String::new()];
    }
    if !index_parts {
        return vec![tokens.join(" ")];
    }
    (0..tokens.len()).map(|start| tokens[start..].join(" ")).collect()
}

/// Joins query tokens into the key looked up in the index.
pub fn lookup_key(tokens: &[String]) -> String {
    tokens.join(" ")
}
