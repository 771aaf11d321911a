//! An incrementally maintainable, store-backed Aho–Corasick keyword
//! matcher.
//!
//! The dictionary and every piece of automaton state — the trie of
//! keyword prefixes, the reversed-prefix index that drives output repair,
//! and the output table itself — live in an external key/value store
//! (Redis, by default) rather than in process memory. That makes a
//! [`KeywordIndex`] a handle onto shared state: many stateless clients can
//! add, remove, and query keywords against the same named instance
//! concurrently, at the cost of giving up linearizability on `find` and
//! `suggest` during concurrent writes. See [`automaton`] for the
//! incremental maintenance protocol and its concurrency caveats.
//!
//! ```no_run
//! use redis_ac_keywords::{KeywordIndex, StoreConfig};
//!
//! # fn main() -> redis_ac_keywords::Result<()> {
//! let index = KeywordIndex::connect(StoreConfig::with_name("demo"))?;
//! index.add("he")?;
//! index.add("she")?;
//! index.add("his")?;
//! index.add("hers")?;
//! assert!(index.find("ushers")?.contains(&"she".to_string()));
//! # Ok(())
//! # }
//! ```

mod automaton;
mod config;
mod error;
mod index;
mod keyspace;
mod matcher;
mod output;
mod store;
mod suggest;
mod trie;

pub mod testing;

pub use config::{Encoding, StoreConfig};
pub use error::{Error, Result};
pub use index::{IndexInfo, KeywordIndex};
pub use store::{RedisStore, StoreAdapter};
