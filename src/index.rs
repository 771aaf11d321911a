//! The public facade: a named keyword index over a backing store.

use std::sync::Mutex;

use crate::automaton;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::keyspace::{normalize, normalize_lossy, Keyspace};
use crate::matcher;
use crate::store::{RedisStore, StoreAdapter};
use crate::suggest;
use crate::trie;

/// The cardinalities reported by [`KeywordIndex::info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexInfo {
    /// `|K|`, the number of accepted keywords.
    pub keywords: u64,
    /// `|P|`, the number of trie nodes (always at least 1: the root).
    pub nodes: u64,
}

/// An incrementally maintained, store-backed Aho–Corasick keyword matcher.
///
/// A `KeywordIndex` is cheap to clone-by-reference (wrap in an `Arc`) but
/// is not internally serialized against concurrent `add`/`remove` of
/// overlapping keywords; see the crate-level documentation for the
/// concurrency model this design assumes.
pub struct KeywordIndex<S: StoreAdapter = RedisStore> {
    store: Mutex<S>,
    keys: Keyspace,
}

impl KeywordIndex<RedisStore> {
    /// Opens a connection to the store described by `config` and
    /// initializes the instance's root node if this is its first use.
    pub fn connect(config: StoreConfig) -> Result<Self> {
        log::info!(
            "connecting to instance {:?} at {}:{}",
            config.name,
            config.host,
            config.port
        );
        let store = RedisStore::connect(&config)?;
        Self::with_store(store, config.name)
    }
}

impl<S: StoreAdapter> KeywordIndex<S> {
    /// Builds an index over an already-constructed store adapter, useful
    /// for testing against [`crate::testing::MemoryStore`].
    pub fn with_store(mut store: S, name: impl Into<String>) -> Result<Self> {
        let keys = Keyspace::new(name);
        trie::ensure_root(&mut store, &keys)?;
        Ok(Self {
            store: Mutex::new(store),
            keys,
        })
    }

    /// Inserts `keyword`, repairing every disturbed output cluster.
    /// Returns the resulting size of the keyword set.
    pub fn add(&self, keyword: &str) -> Result<u64> {
        let normalized = normalize(keyword)?;
        let mut store = self.store.lock().expect("store mutex poisoned");
        automaton::add(&mut *store, &self.keys, &normalized)
    }

    /// Removes `keyword`, revoking its outputs and pruning orphaned trie
    /// nodes. Returns the resulting size of the keyword set.
    pub fn remove(&self, keyword: &str) -> Result<u64> {
        let normalized = normalize(keyword)?;
        let mut store = self.store.lock().expect("store mutex poisoned");
        automaton::remove(&mut *store, &self.keys, &normalized)
    }

    /// Runs the Aho–Corasick walk over `text`, returning every matched
    /// keyword in scan order (duplicates preserved).
    pub fn find(&self, text: &str) -> Result<Vec<String>> {
        let normalized = normalize_lossy(text);
        let mut store = self.store.lock().expect("store mutex poisoned");
        matcher::find(&mut *store, &self.keys, &normalized)
    }

    /// Enumerates every accepted keyword starting with `query`, in
    /// lexicographic order.
    pub fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let normalized = normalize_lossy(query);
        let mut store = self.store.lock().expect("store mutex poisoned");
        suggest::suggest(&mut *store, &self.keys, &normalized)
    }

    /// Reports the current cardinalities of K and P.
    pub fn info(&self) -> Result<IndexInfo> {
        let mut store = self.store.lock().expect("store mutex poisoned");
        Ok(IndexInfo {
            keywords: store.scard(&self.keys.keyword_key())?,
            nodes: store.zcard(&self.keys.prefix_key())?,
        })
    }

    /// Deletes every per-keyword output and reverse-node set named after a
    /// currently accepted keyword, then deletes K, P and S, and re-seeds
    /// the root so the instance remains usable without reconnecting.
    pub fn flush(&self) -> Result<()> {
        log::warn!("flushing instance {}", self.keys.name());
        let mut store = self.store.lock().expect("store mutex poisoned");
        for keyword in store.smembers(&self.keys.keyword_key())? {
            store.del(&self.keys.output_key(&keyword))?;
            store.del(&self.keys.node_key(&keyword))?;
        }
        store.del(&self.keys.prefix_key())?;
        store.del(&self.keys.suffix_key())?;
        store.del(&self.keys.keyword_key())?;
        trie::ensure_root(&mut *store, &self.keys)?;
        Ok(())
    }
}
