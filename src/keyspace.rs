//! Deterministic mapping from a per-instance name plus a logical role to a
//! store key, and the uniform text encoding used for every key and value.

use crate::error::{Error, Result};

/// Normalizes caller-supplied text the way every key and value in this
/// crate is normalized: strip surrounding whitespace, lowercase over
/// Unicode code points. Returns an error if the result is empty.
pub fn normalize(text: &str) -> Result<String> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(Error::InvalidArgument(
            "keyword is empty after trimming and lowercasing".into(),
        ));
    }
    Ok(normalized)
}

/// Normalizes text for matching/suggestion queries, where an empty result
/// (e.g. the root state) is legal.
pub fn normalize_lossy(text: &str) -> String {
    text.to_lowercase()
}

/// Reverses a string by Unicode scalar value, matching the definition of
/// the suffix-set in the data model (`reverse(p)` for a prefix `p`).
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Computes the deterministic store keys for one named instance.
#[derive(Debug, Clone)]
pub struct Keyspace {
    name: String,
}

impl Keyspace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `{name}:keyword` — the unordered keyword set K.
    pub fn keyword_key(&self) -> String {
        format!("{}:keyword", self.name)
    }

    /// `{name}:prefix` — the lexicographically ordered prefix set P.
    pub fn prefix_key(&self) -> String {
        format!("{}:prefix", self.name)
    }

    /// `{name}:suffix` — the lexicographically ordered reversed-prefix set S.
    pub fn suffix_key(&self) -> String {
        format!("{}:suffix", self.name)
    }

    /// `{name}:{state}:output` — the output set O(state).
    ///
    /// The source implementation keys this set globally (`{state}:output`,
    /// with no instance prefix), which lets two instances sharing a store
    /// corrupt each other's automata. This implementation always scopes it
    /// by instance name; see DESIGN.md for the rationale.
    pub fn output_key(&self, state: &str) -> String {
        format!("{}:{}:output", self.name, state)
    }

    /// `{name}:{keyword}:node` — the reverse-node index R(keyword).
    pub fn node_key(&self, keyword: &str) -> String {
        format!("{}:{}:node", self.name, keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  HeLLo ").unwrap(), "hello");
    }

    #[test]
    fn normalize_rejects_blank_input() {
        assert!(normalize("   ").is_err());
    }

    #[test]
    fn reverse_is_by_code_point() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn keys_are_scoped_by_instance_name() {
        let keys = Keyspace::new("shop");
        assert_eq!(keys.keyword_key(), "shop:keyword");
        assert_eq!(keys.prefix_key(), "shop:prefix");
        assert_eq!(keys.suffix_key(), "shop:suffix");
        assert_eq!(keys.output_key("he"), "shop:he:output");
        assert_eq!(keys.node_key("he"), "shop:he:node");
    }
}
