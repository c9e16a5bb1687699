use std::fmt;

use log::{debug, trace};

use crate::chain::{Chain, Entry};
use crate::error::HashTableError;

pub const BUCKET_COUNT: usize = 10;

/// Logical position of an entry: its bucket and its offset from the chain head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub bucket: usize,
    pub position: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bucket {} position {}", self.bucket, self.position)
    }
}

#[derive(Debug)]
pub struct Found<'a> {
    pub entry: &'a Entry,
    pub location: Location,
}

/// Negative keys wrap around instead of producing a negative index.
pub fn bucket_index(key: i32) -> usize {
    key.rem_euclid(BUCKET_COUNT as i32) as usize
}

/// Fixed-size hash table of integers with separate chaining.
///
/// Values are routed by `key mod 10`; the key itself is not stored. Every
/// chain keeps its newest entry at the head, and equal values may repeat.
pub struct ChainedHashTable {
    buckets: [Chain; BUCKET_COUNT],
    count: usize,
}

impl ChainedHashTable {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Chain::new()),
            count: 0,
        }
    }

    pub fn insert(&mut self, value: i32, key: i32) -> Location {
        let bucket = bucket_index(key);
        self.buckets[bucket].push_front(value);
        self.count += 1;

        debug!("inserted {} into bucket {} (key {})", value, bucket, key);
        Location { bucket, position: 0 }
    }

    pub fn search(&self, value: i32, key: i32) -> Option<Found<'_>> {
        let bucket = bucket_index(key);
        let found = self.buckets[bucket]
            .find(value)
            .map(|(position, entry)| Found {
                entry,
                location: Location { bucket, position },
            });

        trace!("search {} in bucket {}: {:?}", value, bucket, found.as_ref().map(|f| f.location));
        found
    }

    pub fn delete(&mut self, value: i32, key: i32) -> Result<Location, HashTableError> {
        let bucket = bucket_index(key);
        let chain = &mut self.buckets[bucket];

        if chain.is_empty() {
            debug!("delete {} from empty bucket {}", value, bucket);
            return Err(HashTableError::NotFound { value, key, bucket });
        }

        match chain.remove_first(value) {
            Some(position) => {
                self.count -= 1;
                debug!("deleted {} from bucket {} at position {}", value, bucket, position);
                Ok(Location { bucket, position })
            }
            None => Err(HashTableError::NotFound { value, key, bucket }),
        }
    }

    pub fn chain(&self, bucket: usize) -> Option<&Chain> {
        self.buckets.get(bucket)
    }

    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.chain(bucket).map_or(0, Chain::len)
    }

    /// Buckets in ascending index order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &Chain)> {
        self.buckets.iter().enumerate()
    }

    /// Every stored value with its bucket, bucket by bucket, head to tail.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.buckets()
            .flat_map(|(bucket, chain)| chain.values().map(move |value| (bucket, value)))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.count = 0;
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.buckets()).finish()
    }
}

pub(crate) fn fmt_bucket(
    f: &mut fmt::Formatter<'_>,
    bucket: usize,
    mut values: impl Iterator<Item = i32>,
) -> fmt::Result {
    write!(f, "Key {} : ", bucket)?;
    match values.next() {
        None => write!(f, "No value at this key"),
        Some(first) => {
            write!(f, "{}", first)?;
            values.try_for_each(|value| write!(f, "\t{}", value))
        }
    }
}

/// One line per bucket: `Key <i> : <v1>\t<v2>...` or an empty marker.
impl fmt::Display for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bucket, chain) in self.buckets() {
            if bucket > 0 {
                writeln!(f)?;
            }
            fmt_bucket(f, bucket, chain.values())?;
        }
        Ok(())
    }
}
