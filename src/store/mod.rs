//! The store adapter: a thin capability layer over whatever external
//! key/value store backs an instance. The automaton never talks to a
//! concrete client directly, only through this trait, so that tests can
//! run against an in-memory fake (see [`crate::testing`]).

mod redis_store;

pub use redis_store::RedisStore;

use crate::error::Result;

/// The capability set a backing store must provide, matching the
/// operations enumerated in the external interfaces section of the
/// design: unordered sets, lexicographically ordered sorted sets, and
/// scalar key deletion.
pub trait StoreAdapter {
    /// `PING` — used once at connection time to fail fast if the store is
    /// unreachable.
    fn ping(&mut self) -> Result<()>;

    /// `SADD key member` — returns whether the member was newly added.
    fn sadd(&mut self, key: &str, member: &str) -> Result<bool>;
    /// `SREM key member` — returns whether the member was present.
    fn srem(&mut self, key: &str, member: &str) -> Result<bool>;
    /// `SMEMBERS key`.
    fn smembers(&mut self, key: &str) -> Result<Vec<String>>;
    /// `SCARD key`.
    fn scard(&mut self, key: &str) -> Result<u64>;
    /// `SISMEMBER key member`.
    fn sismember(&mut self, key: &str, member: &str) -> Result<bool>;

    /// `ZADD key 1.0 member` — the score is a fixed, arbitrary constant;
    /// ordering within the set is always by member bytes.
    fn zadd(&mut self, key: &str, member: &str) -> Result<bool>;
    /// `ZREM key member`.
    fn zrem(&mut self, key: &str, member: &str) -> Result<bool>;
    /// `ZRANK key member` — `None` if `member` is not in the set.
    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>>;
    /// `ZRANGE key start stop` — inclusive bounds, Redis-style negative
    /// indices count from the end of the set.
    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>>;
    /// `ZSCORE key member` — `None` if `member` is not in the set.
    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>>;
    /// `ZCARD key`.
    fn zcard(&mut self, key: &str) -> Result<u64>;

    /// `DEL key`. Deleting an absent key is not an error.
    fn del(&mut self, key: &str) -> Result<()>;
}
