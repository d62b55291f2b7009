//! # Bucketed Table
//!
//! A Rust implementation of a hash table using separate chaining.
//!
//! `HashTable` maps each key to one of its buckets by `hash(key) % capacity` and resolves
//! collisions by scanning the bucket linearly for an equal key. Key insertion order is
//! tracked separately, so `items`, `keys`, `values` and iteration are deterministic.
//!
//! The table grows pre-emptively: when an insertion finds the load factor already at the
//! configured threshold, the bucket count is doubled and every pair is rehashed before the new
//! pair is added.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bucketed_table::{HashTable, TableError};
//!
//! // Create a new table with 100 buckets
//! let mut table: HashTable<String, i32> = HashTable::new(100)?;
//!
//! // Insert values
//! table.set("apple".to_string(), 1);
//! table.set("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//! assert_eq!(table.get_or_default("cherry", &0), &0);
//!
//! // Update values
//! table.set("apple".to_string(), 10);
//! assert_eq!(table.get("apple"), Ok(&10));
//!
//! // Remove values
//! table.delete("apple")?;
//! assert_eq!(table.get("apple"), Err(TableError::KeyNotFound("apple".to_string())));
//!
//! assert_eq!(table.to_string(), r#"{"banana": 2}"#);
//! # Ok::<(), TableError<String>>(())
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use bucketed_table::HashTable;
//!
//! let mut table: HashTable<i32, &str> = HashTable::new(2)?;
//! table.set(1, "one");
//! table.set(2, "two");
//! assert_eq!(table.capacity(), 2);
//!
//! // load factor is 1.0 here, above the default 0.6, so the table doubles before inserting
//! table.set(3, "three");
//! assert_eq!(table.capacity(), 4);
//! assert_eq!(table.keys(), [1, 2, 3]);
//! # Ok::<(), bucketed_table::TableError<i32>>(())
//! ```

/// Error type shared by all table operations
mod error;
/// Module implementing the chained hash table and its core operations
mod hash_table;
/// `Display` and `Debug` renderings
mod render;
/// Insertion-ordered views and iterators
mod views;

pub use error::TableError;
pub use hash_table::{DEFAULT_LOAD_FACTOR_THRESHOLD, DefaultHashBuilder, GROWTH_FACTOR, HashTable};
pub use views::{Entries, Keys};
