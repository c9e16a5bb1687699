pub mod chain;
pub mod chained_hash_table;
pub mod concurrent;
pub mod error;
pub mod logger;
pub mod menu;

pub use chain::{Chain, Entry};
pub use chained_hash_table::{bucket_index, ChainedHashTable, Found, Location, BUCKET_COUNT};
pub use concurrent::SharedChainedHashTable;
pub use error::{HashTableError, SessionError};
