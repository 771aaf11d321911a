//! Automaton maintenance: `add` and `remove`, the two operations that keep
//! the trie index and output table consistent as the keyword dictionary
//! changes.

use crate::error::Result;
use crate::keyspace::Keyspace;
use crate::output::rebuild_outputs_cluster;
use crate::store::StoreAdapter;
use crate::trie;

/// Every non-empty prefix of `keyword`, shortest first.
fn prefixes(keyword: &str) -> Vec<String> {
    let chars: Vec<char> = keyword.chars().collect();
    (1..=chars.len()).map(|i| chars[..i].iter().collect()).collect()
}

/// Inserts `keyword` and repairs every output cluster it disturbs. Returns
/// the resulting cardinality of K.
pub(crate) fn add(store: &mut impl StoreAdapter, keys: &Keyspace, keyword: &str) -> Result<u64> {
    log::debug!("adding keyword {keyword:?} to instance {}", keys.name());
    store.sadd(&keys.keyword_key(), keyword)?;

    for p in prefixes(keyword) {
        if !trie::has_prefix(store, keys, &p)? {
            trie::add_prefix(store, keys, &p)?;
            rebuild_outputs_cluster(store, keys, &p)?;
        } else if store.sismember(&keys.keyword_key(), &p)? {
            rebuild_outputs_cluster(store, keys, &p)?;
        }
    }

    store.scard(&keys.keyword_key())
}

/// Removes `keyword`, revoking its output entries and pruning any trie
/// nodes left with no remaining reason to exist. Returns the resulting
/// cardinality of K.
pub(crate) fn remove(
    store: &mut impl StoreAdapter,
    keys: &Keyspace,
    keyword: &str,
) -> Result<u64> {
    log::debug!("removing keyword {keyword:?} from instance {}", keys.name());
    let node_key = keys.node_key(keyword);
    for state in store.smembers(&node_key)? {
        store.srem(&keys.output_key(&state), keyword)?;
    }
    store.del(&node_key)?;

    store.srem(&keys.keyword_key(), keyword)?;

    for p in prefixes(keyword).into_iter().rev() {
        if p != keyword && store.sismember(&keys.keyword_key(), &p)? {
            break;
        }
        if successor_extends(store, keys, &p)? {
            break;
        }
        trie::remove_prefix(store, keys, &p)?;
    }

    store.scard(&keys.keyword_key())
}

/// True if P's lexicographic successor of `p` still starts with `p`,
/// meaning some other keyword still needs this node.
fn successor_extends(store: &mut impl StoreAdapter, keys: &Keyspace, p: &str) -> Result<bool> {
    let prefix_key = keys.prefix_key();
    let Some(rank) = store.zrank(&prefix_key, p)? else {
        return Ok(false);
    };
    let next_rank = rank as i64 + 1;
    let successor = store
        .zrange(&prefix_key, next_rank, next_rank)?
        .into_iter()
        .next();
    Ok(matches!(successor, Some(s) if s.starts_with(p)))
}
