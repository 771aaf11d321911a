use redis::Commands;

use super::StoreAdapter;
use crate::config::StoreConfig;
use crate::error::Result;

/// A [`StoreAdapter`] backed by a single synchronous connection to a Redis
/// (or Redis-compatible) server.
///
/// A `RedisStore` is not `Sync`: [`crate::KeywordIndex`] wraps it in a
/// mutex so a handle can be shared across threads within one process. That
/// wrapping exists only to satisfy the connection's own `&mut self`
/// contract — it is not a substitute for the external per-instance
/// serialization the concurrency model requires for overlapping writes.
pub struct RedisStore {
    connection: redis::Connection,
}

impl RedisStore {
    /// Opens a connection to the store described by `config` and checks
    /// liveness with `PING`.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let url = format!(
            "redis://{host}:{port}/{db}",
            host = config.host,
            port = config.port,
            db = config.db
        );
        let client = redis::Client::open(url)?;
        let mut connection = match config.connect_timeout_ms {
            Some(ms) => {
                client.get_connection_with_timeout(std::time::Duration::from_millis(ms))?
            }
            None => client.get_connection()?,
        };
        redis::cmd("PING").query::<String>(&mut connection)?;
        Ok(Self { connection })
    }
}

impl StoreAdapter for RedisStore {
    fn ping(&mut self) -> Result<()> {
        redis::cmd("PING").query::<String>(&mut self.connection)?;
        Ok(())
    }

    fn sadd(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self.connection.sadd(key, member)?)
    }

    fn srem(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self.connection.srem(key, member)?)
    }

    fn smembers(&mut self, key: &str) -> Result<Vec<String>> {
        Ok(self.connection.smembers(key)?)
    }

    fn scard(&mut self, key: &str) -> Result<u64> {
        Ok(self.connection.scard(key)?)
    }

    fn sismember(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self.connection.sismember(key, member)?)
    }

    fn zadd(&mut self, key: &str, member: &str) -> Result<bool> {
        // The score is irrelevant to ordering; fixed to an arbitrary
        // constant as in the source implementation.
        const FIXED_SCORE: f64 = 1.0;
        let added: u64 = self.connection.zadd(key, member, FIXED_SCORE)?;
        Ok(added > 0)
    }

    fn zrem(&mut self, key: &str, member: &str) -> Result<bool> {
        let removed: u64 = self.connection.zrem(key, member)?;
        Ok(removed > 0)
    }

    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>> {
        Ok(self.connection.zrank(key, member)?)
    }

    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        Ok(self.connection.zrange(key, start as isize, stop as isize)?)
    }

    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>> {
        Ok(self.connection.zscore(key, member)?)
    }

    fn zcard(&mut self, key: &str) -> Result<u64> {
        Ok(self.connection.zcard(key)?)
    }

    fn del(&mut self, key: &str) -> Result<()> {
        let _: u64 = self.connection.del(key)?;
        Ok(())
    }
}
