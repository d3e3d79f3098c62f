//! Bloom filter sized from an expected item count and a false positive rate.
//!
//! ```
//! use bloomfilter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01)?;
//! filter.add(b"apple")?;
//! assert!(filter.contains(b"apple")?);
//! # Ok::<(), bloomfilter::Error>(())
//! ```

pub mod bit_array;
pub mod bloom_filters;
pub mod error;
pub mod hashing;

pub use self::bloom_filters::{optimal_bit_array_size, optimal_hash_count, BloomFilter, Filter};
pub use self::error::{Error, Result};
