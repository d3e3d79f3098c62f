use xxhash_rust::xxh3::xxh3_64_with_seed;

/// XXH3-64 of `value` under `seed`. Stable for a given seed.
#[inline]
pub fn seeded_hash(seed: u64, value: &[u8]) -> u64 {
    xxh3_64_with_seed(value, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_hash() {
        let value = [1u8, 2, 3, 4, 5];
        assert_eq!(seeded_hash(42, &value), seeded_hash(42, &value));
    }

    #[test]
    fn seed_changes_hash() {
        let value = b"bloom";
        assert_ne!(seeded_hash(0, value), seeded_hash(1, value));
        assert_ne!(seeded_hash(7, b""), seeded_hash(8, b""));
    }
}
