use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use parking_lot::RwLock;

use crate::chain::Chain;
use crate::chained_hash_table::{bucket_index, fmt_bucket, Location, BUCKET_COUNT};
use crate::error::HashTableError;

/// Thread-safe variant of [`crate::ChainedHashTable`] with one lock per bucket.
///
/// Writers to the same bucket exclude each other; readers share the bucket
/// lock. Operations on different buckets never contend.
pub struct SharedChainedHashTable {
    buckets: [RwLock<Chain>; BUCKET_COUNT],
    count: AtomicUsize,
}

impl SharedChainedHashTable {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| RwLock::new(Chain::new())),
            count: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, value: i32, key: i32) -> Location {
        let bucket = bucket_index(key);
        let mut chain = self.buckets[bucket].write();
        chain.push_front(value);
        // Counted under the bucket lock so a racing delete of this entry is ordered after it.
        self.count.fetch_add(1, Ordering::Relaxed);
        drop(chain);

        debug!("inserted {} into shared bucket {}", value, bucket);
        Location { bucket, position: 0 }
    }

    pub fn search(&self, value: i32, key: i32) -> Option<Location> {
        let bucket = bucket_index(key);
        let chain = self.buckets[bucket].read();
        chain
            .find(value)
            .map(|(position, _)| Location { bucket, position })
    }

    pub fn delete(&self, value: i32, key: i32) -> Result<Location, HashTableError> {
        let bucket = bucket_index(key);
        let mut chain = self.buckets[bucket].write();

        match chain.remove_first(value) {
            Some(position) => {
                self.count.fetch_sub(1, Ordering::Relaxed);
                drop(chain);
                debug!("deleted {} from shared bucket {}", value, bucket);
                Ok(Location { bucket, position })
            }
            None => Err(HashTableError::NotFound { value, key, bucket }),
        }
    }

    /// Values of every bucket. Each bucket is read under its own lock, so the
    /// result is consistent per bucket but not across buckets.
    pub fn snapshot(&self) -> Vec<Vec<i32>> {
        self.buckets
            .iter()
            .map(|bucket| bucket.read().values().collect())
            .collect()
    }

    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, |chain| chain.read().len())
    }

    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SharedChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SharedChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let chain = bucket.read();
            fmt_bucket(f, index, chain.values())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainedHashTable;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_matches_single_threaded_table() {
        let shared = SharedChainedHashTable::new();
        let mut table = ChainedHashTable::new();

        for (value, key) in [(5, 15), (25, 25), (3, 3), (5, 5)] {
            assert_eq!(shared.insert(value, key), table.insert(value, key));
        }
        assert_eq!(shared.search(5, 5), table.search(5, 5).map(|found| found.location));
        assert_eq!(shared.delete(25, 5), table.delete(25, 5));
        assert_eq!(shared.delete(99, 5), table.delete(99, 5));

        assert_eq!(shared.to_string(), table.to_string());
        assert_eq!(shared.len(), table.len());
    }

    #[test]
    fn test_empty_table() {
        let shared = SharedChainedHashTable::new();

        assert!(shared.is_empty());
        assert_eq!(shared.search(1, 1), None);
        assert!(shared.delete(1, 1).is_err());
        assert_eq!(shared.snapshot(), vec![Vec::<i32>::new(); BUCKET_COUNT]);
    }

    #[test]
    fn test_parallel_inserts_are_all_visible() {
        let shared = Arc::new(SharedChainedHashTable::new());
        let threads: Vec<_> = (0..4)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..250 {
                        shared.insert(t * 1000 + i, i);
                    }
                })
            })
            .collect();

        for handle in threads {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 1000);
        for bucket in 0..BUCKET_COUNT {
            assert_eq!(shared.bucket_len(bucket), 100);
        }
        for t in 0..4 {
            for i in 0..250 {
                assert!(shared.search(t * 1000 + i, i).is_some());
            }
        }
    }

    #[test]
    fn test_parallel_deletes_remove_each_value_once() {
        let shared = Arc::new(SharedChainedHashTable::new());
        for i in 0..100 {
            shared.insert(i, i);
        }

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || (0..100).filter(|&i| shared.delete(i, i).is_ok()).count())
            })
            .collect();

        let deleted: usize = threads.into_iter().map(|handle| handle.join().unwrap()).sum();
        assert_eq!(deleted, 100);
        assert!(shared.is_empty());
    }

    #[test]
    fn test_len_stays_in_bounds_while_writers_race_on_one_bucket() {
        const ROUNDS: usize = 20_000;
        let shared = Arc::new(SharedChainedHashTable::new());
        let done = Arc::new(AtomicBool::new(false));

        let inserter = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    shared.insert(1, 1);
                }
            })
        };
        let deleter = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut deleted = 0;
                while deleted < ROUNDS {
                    if shared.delete(1, 11).is_ok() {
                        deleted += 1;
                    }
                }
            })
        };
        let reader = {
            let shared = Arc::clone(&shared);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    let len = shared.len();
                    assert!(len <= ROUNDS, "len out of bounds: {}", len);
                }
            })
        };

        inserter.join().unwrap();
        deleter.join().unwrap();
        done.store(true, Ordering::Relaxed);
        reader.join().unwrap();

        let total: usize = (0..BUCKET_COUNT).map(|bucket| shared.bucket_len(bucket)).sum();
        assert_eq!(shared.len(), total);
        assert!(shared.is_empty());
    }
}
