use rand::{thread_rng, Rng};
use tracing::{debug, warn};

use crate::bit_array::BitArray;
use crate::bloom_filters::sizing::{optimal_bit_array_size, optimal_hash_count};
use crate::bloom_filters::Filter;
use crate::error::{Error, Result};
use crate::hashing::seeded_hash;

const INVALID_N_MESSAGE: &str = "should be greater than zero";
const INVALID_P_LOW_MESSAGE: &str = "should be greater than zero";
const INVALID_P_HIGH_MESSAGE: &str = "should be less than one";

/// Bloom filter sized from an expected number of items and a target false
/// positive rate.
///
/// Each of the `k` hash functions is XXH3 under its own random seed. The
/// filter does no locking: share it behind a `Mutex` or give one writer
/// exclusive access. `clone` copies the whole bit array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilter {
    /// number of hash functions
    k: u64,
    /// number of elements the filter was sized for
    n: u64,
    /// number of bits in the filter
    m: u64,

    bits: BitArray,
    seeds: Vec<u64>,
}

impl BloomFilter {
    /// n -- number of elements to insert
    /// p -- the false positive rate, in (0, 1)
    ///
    /// Hash seeds are drawn from the thread local generator, so two filters
    /// built with the same arguments hash differently.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        Self::with_rng(n, p, &mut thread_rng())
    }

    /// Same as [`BloomFilter::new`] but draws the hash seeds from `rng`.
    ///
    /// ```
    /// use bloomfilter::BloomFilter;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a = BloomFilter::with_rng(1000, 0.01, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = BloomFilter::with_rng(1000, 0.01, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a.seeds(), b.seeds());
    /// ```
    pub fn with_rng<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> Result<Self> {
        if n == 0 {
            warn!(n, "rejected bloom filter capacity");
            return Err(Error::invalid_argument("n", n, INVALID_N_MESSAGE));
        }
        if p.is_nan() || p <= 0.0 {
            warn!(p, "rejected bloom filter false positive rate");
            return Err(Error::invalid_argument("p", p, INVALID_P_LOW_MESSAGE));
        }
        if p >= 1.0 {
            warn!(p, "rejected bloom filter false positive rate");
            return Err(Error::invalid_argument("p", p, INVALID_P_HIGH_MESSAGE));
        }

        let m = optimal_bit_array_size(n, p);
        let k = optimal_hash_count(n, m);
        let bits = BitArray::new(m).map_err(Error::Allocation)?;
        let seeds = (0..k).map(|_| rng.gen::<u64>()).collect();

        debug!(n, p, m, k, "created bloom filter");
        Ok(Self {
            k,
            n,
            m,
            bits,
            seeds,
        })
    }

    pub fn add(&mut self, value: &[u8]) -> Result<()> {
        for idx in Self::bit_indexes(&self.seeds, self.m, value) {
            self.bits.turn_on(idx).map_err(Error::Write)?;
        }
        Ok(())
    }

    /// Stops at the first bit that is off.
    pub fn contains(&self, value: &[u8]) -> Result<bool> {
        for idx in Self::bit_indexes(&self.seeds, self.m, value) {
            if !self.bits.get(idx).map_err(Error::Read)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn capacity(&self) -> u64 {
        self.n
    }

    pub fn num_bits(&self) -> u64 {
        self.m
    }

    pub fn num_hashes(&self) -> u64 {
        self.k
    }

    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    // one position per seed, in seed order; duplicates are kept
    fn bit_indexes<'a>(
        seeds: &'a [u64],
        m: u64,
        value: &'a [u8],
    ) -> impl Iterator<Item = u64> + 'a {
        seeds.iter().map(move |&seed| seeded_hash(seed, value) % m)
    }
}

impl Filter for BloomFilter {
    fn add(&mut self, value: &[u8]) -> Result<()> {
        BloomFilter::add(self, value)
    }

    fn contains(&self, value: &[u8]) -> Result<bool> {
        BloomFilter::contains(self, value)
    }

    fn num_bits(&self) -> u64 {
        self.m
    }

    fn num_hashes(&self) -> u64 {
        self.k
    }
}
