use bit_vec::BitVec;
use thiserror::Error;

/// Largest bit array the filter will try to allocate. Sizes below this are
/// still allocated infallibly.
pub const MAX_NUM_BITS: u64 = i32::MAX as u64 * 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitArrayError {
    #[error("bit array size must be greater than zero")]
    ZeroSize,

    #[error("bit array of {size} bits exceeds the maximum of {max} bits")]
    TooLarge { size: u64, max: u64 },

    #[error("index {index} is out of range for bit array of {size} bits")]
    OutOfRange { index: u64, size: u64 },
}

/// Fixed size array of bits, all off on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    storage: BitVec,
}

impl BitArray {
    pub fn new(size: u64) -> Result<Self, BitArrayError> {
        if size == 0 {
            return Err(BitArrayError::ZeroSize);
        }
        let too_large = BitArrayError::TooLarge {
            size,
            max: MAX_NUM_BITS,
        };
        if size > MAX_NUM_BITS {
            return Err(too_large);
        }
        let len = usize::try_from(size).map_err(|_| too_large)?;

        Ok(Self {
            storage: BitVec::from_elem(len, false),
        })
    }

    pub fn len(&self) -> u64 {
        self.storage.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn turn_on(&mut self, index: u64) -> Result<(), BitArrayError> {
        let idx = self.checked(index)?;
        self.storage.set(idx, true);
        Ok(())
    }

    pub fn get(&self, index: u64) -> Result<bool, BitArrayError> {
        let idx = self.checked(index)?;
        Ok(self.storage[idx])
    }

    /// Number of bits currently on.
    pub fn count_ones(&self) -> u64 {
        self.storage.blocks().map(|block| block.count_ones() as u64).sum()
    }

    fn checked(&self, index: u64) -> Result<usize, BitArrayError> {
        let out_of_range = BitArrayError::OutOfRange {
            index,
            size: self.len(),
        };
        match usize::try_from(index) {
            Ok(idx) if idx < self.storage.len() => Ok(idx),
            _ => Err(out_of_range),
        }
    }
}
