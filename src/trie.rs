//! The trie index: the parallel prefix-set (P) and reversed-prefix
//! suffix-set (S), and the scans anchored at a node that the maintenance
//! protocol and the suggester both depend on.

use crate::error::Result;
use crate::keyspace::{reverse, Keyspace};
use crate::store::StoreAdapter;

/// `p ∈ P`.
pub(crate) fn has_prefix(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    p: &str,
) -> Result<bool> {
    Ok(store.zscore(&keys.prefix_key(), p)?.is_some())
}

/// Inserts `p` into P and `reverse(p)` into S. Does not touch the output
/// table; callers are responsible for triggering a cluster rebuild.
pub(crate) fn add_prefix(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    p: &str,
) -> Result<()> {
    store.zadd(&keys.prefix_key(), p)?;
    store.zadd(&keys.suffix_key(), &reverse(p))?;
    Ok(())
}

/// Removes `p` from P and `reverse(p)` from S.
pub(crate) fn remove_prefix(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    p: &str,
) -> Result<()> {
    store.zrem(&keys.prefix_key(), p)?;
    store.zrem(&keys.suffix_key(), &reverse(p))?;
    Ok(())
}

/// Seeds the root (the empty string) into P only; the root is explicitly
/// excluded from S by the data model.
pub(crate) fn ensure_root(store: &mut impl StoreAdapter, keys: &Keyspace) -> Result<()> {
    store.zadd(&keys.prefix_key(), "")?;
    Ok(())
}
