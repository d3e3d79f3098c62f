use crate::error::Result;

/// Operations shared by the filters of this crate.
pub trait Filter {
    /// Record `value` in the filter.
    fn add(&mut self, value: &[u8]) -> Result<()>;

    /// `false` means `value` was never added; `true` means it probably was.
    fn contains(&self, value: &[u8]) -> Result<bool>;

    /// number of bits in the filter (m)
    fn num_bits(&self) -> u64;

    /// number of hash functions (k)
    fn num_hashes(&self) -> u64;
}
