use std::f64::consts::LN_2;

/// m = -(n * ln(p)) / (ln2)^2, rounded up
///
/// Expects `n > 0` and `0 < p < 1`; validation is left to the filter
/// constructors. Never returns less than 1.
pub fn optimal_bit_array_size(n: u64, p: f64) -> u64 {
    let m = (-(n as f64) * p.ln() / LN_2.powi(2)).ceil();
    (m as u64).max(1)
}

/// k = m/n * ln2, rounded up
///
/// Expects `n > 0`. Never returns less than 1.
pub fn optimal_hash_count(n: u64, m: u64) -> u64 {
    let k = (m as f64 * LN_2 / n as f64).ceil();
    (k as u64).max(1)
}
