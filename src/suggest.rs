//! Prefix-based keyword suggestion.

use crate::error::Result;
use crate::keyspace::Keyspace;
use crate::store::StoreAdapter;

/// Enumerates every accepted keyword starting with `query`, in
/// lexicographic order, by range-scanning P from `query`'s rank forward.
pub(crate) fn suggest(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    query: &str,
) -> Result<Vec<String>> {
    let prefix_key = keys.prefix_key();
    let Some(start) = store.zrank(&prefix_key, query)? else {
        return Ok(Vec::new());
    };

    let mut matches = Vec::new();
    let mut rank = start as i64;
    loop {
        let entries = store.zrange(&prefix_key, rank, rank)?;
        let Some(n) = entries.into_iter().next() else {
            break;
        };
        if !n.starts_with(query) {
            break;
        }
        if store.sismember(&keys.keyword_key(), &n)? {
            matches.push(n);
        }
        rank += 1;
    }
    Ok(matches)
}
