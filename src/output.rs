//! The output table and the cluster-repair protocol: the heart of
//! incremental maintenance. See module-level notes in `automaton.rs` for
//! how these procedures are driven.

use crate::error::Result;
use crate::keyspace::{reverse, Keyspace};
use crate::store::StoreAdapter;

/// The longest proper suffix of `s` that is itself a trie node, derived by
/// probing the prefix set rather than stored. Total: the empty string is
/// always present in P, so the probe always terminates.
pub(crate) fn fail(store: &mut impl StoreAdapter, keys: &Keyspace, s: &str) -> Result<String> {
    let chars: Vec<char> = s.chars().collect();
    for i in 1..chars.len() {
        let candidate: String = chars[i..].iter().collect();
        if store.zscore(&keys.prefix_key(), &candidate)?.is_some() {
            return Ok(candidate);
        }
    }
    Ok(String::new())
}

/// Recomputes `O(s)` from scratch and reconciles `R` for every keyword
/// gained or lost in the process.
pub(crate) fn build_output(store: &mut impl StoreAdapter, keys: &Keyspace, s: &str) -> Result<()> {
    let before: std::collections::HashSet<String> =
        store.smembers(&keys.output_key(s))?.into_iter().collect();

    let mut after = std::collections::HashSet::new();
    if store.sismember(&keys.keyword_key(), s)? {
        after.insert(s.to_string());
    }
    let f = fail(store, keys, s)?;
    for w in store.smembers(&keys.output_key(&f))? {
        after.insert(w);
    }

    for w in after.difference(&before) {
        store.sadd(&keys.output_key(s), w)?;
        store.sadd(&keys.node_key(w), s)?;
    }
    for w in before.difference(&after) {
        store.srem(&keys.output_key(s), w)?;
        store.srem(&keys.node_key(w), s)?;
    }
    Ok(())
}

/// Walks the contiguous range of S beginning at `reverse(anchor)` and
/// rebuilds the output of every state it contains. Relies on S's
/// lexicographic order: every reversed-prefix sharing `reverse(anchor)` as
/// a prefix sits in an unbroken run starting at its rank.
pub(crate) fn rebuild_outputs_cluster(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    anchor: &str,
) -> Result<()> {
    let suffix_key = keys.suffix_key();
    let needle = reverse(anchor);
    let Some(start) = store.zrank(&suffix_key, &needle)? else {
        return Ok(());
    };

    let mut rank = start as i64;
    loop {
        let entries = store.zrange(&suffix_key, rank, rank)?;
        let Some(r) = entries.into_iter().next() else {
            break;
        };
        if !r.starts_with(&needle) {
            break;
        }
        let state = reverse(&r);
        build_output(store, keys, &state)?;
        rank += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use crate::trie;

    /// Seeds a trie with the nodes for "h", "he", "s", "sh", "she", and
    /// marks "he" and "she" as accepted keywords. Outputs are left
    /// unbuilt; individual tests build what they need.
    fn seeded(store: &mut MemoryStore, keys: &Keyspace) {
        trie::ensure_root(store, keys).unwrap();
        for p in ["h", "he", "s", "sh", "she"] {
            trie::add_prefix(store, keys, p).unwrap();
        }
        store.sadd(&keys.keyword_key(), "he").unwrap();
        store.sadd(&keys.keyword_key(), "she").unwrap();
    }

    #[test]
    fn fail_finds_the_longest_proper_suffix_present_in_the_trie() {
        let mut store = MemoryStore::new();
        let keys = Keyspace::new("output");
        seeded(&mut store, &keys);

        assert_eq!(fail(&mut store, &keys, "she").unwrap(), "he");
        assert_eq!(fail(&mut store, &keys, "he").unwrap(), "");
        assert_eq!(fail(&mut store, &keys, "h").unwrap(), "");
    }

    #[test]
    fn fail_is_total_at_the_root() {
        let mut store = MemoryStore::new();
        let keys = Keyspace::new("output");
        trie::ensure_root(&mut store, &keys).unwrap();

        assert_eq!(fail(&mut store, &keys, "").unwrap(), "");
        assert_eq!(fail(&mut store, &keys, "zz").unwrap(), "");
    }

    #[test]
    fn build_output_unions_its_own_membership_with_its_failure_states_output() {
        let mut store = MemoryStore::new();
        let keys = Keyspace::new("output");
        seeded(&mut store, &keys);

        build_output(&mut store, &keys, "he").unwrap();
        build_output(&mut store, &keys, "she").unwrap();

        let he_output: std::collections::HashSet<_> =
            store.smembers(&keys.output_key("he")).unwrap().into_iter().collect();
        assert_eq!(he_output, ["he".to_string()].into_iter().collect());

        let she_output: std::collections::HashSet<_> =
            store.smembers(&keys.output_key("she")).unwrap().into_iter().collect();
        assert_eq!(
            she_output,
            ["he".to_string(), "she".to_string()].into_iter().collect()
        );

        assert!(store.sismember(&keys.node_key("he"), "he").unwrap());
        assert!(store.sismember(&keys.node_key("he"), "she").unwrap());
        assert!(store.sismember(&keys.node_key("she"), "she").unwrap());
    }

    #[test]
    fn build_output_replacement_revokes_stale_reverse_node_entries() {
        let mut store = MemoryStore::new();
        let keys = Keyspace::new("output");
        seeded(&mut store, &keys);
        build_output(&mut store, &keys, "he").unwrap();
        build_output(&mut store, &keys, "she").unwrap();

        store.srem(&keys.keyword_key(), "he").unwrap();
        build_output(&mut store, &keys, "he").unwrap();

        assert!(store.smembers(&keys.output_key("he")).unwrap().is_empty());
        assert!(!store.sismember(&keys.node_key("he"), "he").unwrap());
    }

    #[test]
    fn rebuild_outputs_cluster_only_touches_states_ending_with_the_anchor() {
        let mut store = MemoryStore::new();
        let keys = Keyspace::new("output");
        seeded(&mut store, &keys);

        rebuild_outputs_cluster(&mut store, &keys, "he").unwrap();

        assert_eq!(
            store.smembers(&keys.output_key("he")).unwrap(),
            vec!["he".to_string()]
        );
        let she_output: std::collections::HashSet<_> =
            store.smembers(&keys.output_key("she")).unwrap().into_iter().collect();
        assert_eq!(
            she_output,
            ["he".to_string(), "she".to_string()].into_iter().collect()
        );
        // "h" and "s" do not end with "he"; their outputs are untouched.
        assert!(store.smembers(&keys.output_key("h")).unwrap().is_empty());
        assert!(store.smembers(&keys.output_key("s")).unwrap().is_empty());
    }
}
