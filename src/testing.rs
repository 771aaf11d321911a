//! An in-memory [`StoreAdapter`] for unit and integration tests, so the
//! automaton's logic can be exercised without a live Redis server.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::Result;
use crate::store::StoreAdapter;

/// A fake store backed by in-process collections. Sorted sets are modeled
/// with [`BTreeSet`], which shares the lexicographic-ordering guarantee
/// the design depends on; unordered sets are modeled with [`HashSet`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: HashMap<String, HashSet<String>>,
    sorted_sets: HashMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreAdapter for MemoryStore {
    fn ping(&mut self) -> Result<()> {
        Ok(())
    }

    fn sadd(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self.sets.entry(key.to_string()).or_default().insert(member.to_string()))
    }

    fn srem(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self
            .sets
            .get_mut(key)
            .map(|set| set.remove(member))
            .unwrap_or(false))
    }

    fn smembers(&mut self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .sets
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn scard(&mut self, key: &str) -> Result<u64> {
        Ok(self.sets.get(key).map(|set| set.len() as u64).unwrap_or(0))
    }

    fn sismember(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self.sets.get(key).is_some_and(|set| set.contains(member)))
    }

    fn zadd(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self
            .sorted_sets
            .entry(key.to_string())
            .or_default()
            .insert(member.to_string()))
    }

    fn zrem(&mut self, key: &str, member: &str) -> Result<bool> {
        Ok(self
            .sorted_sets
            .get_mut(key)
            .map(|set| set.remove(member))
            .unwrap_or(false))
    }

    fn zrank(&mut self, key: &str, member: &str) -> Result<Option<u64>> {
        Ok(self.sorted_sets.get(key).and_then(|set| {
            set.iter()
                .position(|m| m == member)
                .map(|pos| pos as u64)
        }))
    }

    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        let Some(set) = self.sorted_sets.get(key) else {
            return Ok(Vec::new());
        };
        let len = set.len() as i64;
        let resolve = |idx: i64| -> i64 {
            if idx < 0 {
                (len + idx).max(0)
            } else {
                idx
            }
        };
        let start = resolve(start);
        let stop = resolve(stop);
        if start > stop || start >= len {
            return Ok(Vec::new());
        }
        let stop = stop.min(len - 1);
        Ok(set
            .iter()
            .skip(start as usize)
            .take((stop - start + 1) as usize)
            .cloned()
            .collect())
    }

    fn zscore(&mut self, key: &str, member: &str) -> Result<Option<f64>> {
        Ok(self
            .sorted_sets
            .get(key)
            .filter(|set| set.contains(member))
            .map(|_| 1.0))
    }

    fn zcard(&mut self, key: &str) -> Result<u64> {
        Ok(self.sorted_sets.get(key).map(|set| set.len() as u64).unwrap_or(0))
    }

    fn del(&mut self, key: &str) -> Result<()> {
        self.sets.remove(key);
        self.sorted_sets.remove(key);
        Ok(())
    }
}
