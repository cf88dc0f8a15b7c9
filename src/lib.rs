#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Error type shared by the fallible operations of the crate.
pub mod error;

/// An open-addressing hash table using linear probing and tombstones.
///
/// This module provides the raw `HashTable` engine. It never hashes values
/// itself; callers pass precomputed hashes and equality predicates.
pub mod hash_table;

/// A hash set built on the linear-probing `HashTable`.
///
/// This module provides `OpenAddressingSet`, which pairs the table with a
/// hashing strategy and exposes a standard set interface.
pub mod hash_set;

/// Hash and equality strategies used to parameterize the set.
pub mod strategy;

pub use error::SetError;
pub use hash_set::OpenAddressingSet;
pub use hash_table::HashTable;
pub use hash_table::INITIAL_CAPACITY;
pub use hash_table::MAX_LOAD_FACTOR;
pub use strategy::BuildHasherStrategy;
#[cfg(any(feature = "foldhash", feature = "std"))]
pub use strategy::DefaultStrategy;
pub use strategy::FnStrategy;
pub use strategy::HashStrategy;
