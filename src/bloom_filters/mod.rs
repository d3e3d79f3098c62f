mod base;
mod bloom_filter;
mod sizing;

pub use self::base::Filter;
pub use self::bloom_filter::BloomFilter;
pub use self::sizing::{optimal_bit_array_size, optimal_hash_count};
