use thiserror::Error;

use crate::bit_array::BitArrayError;

#[derive(Debug, Error)]
pub enum Error {
    /// A constructor argument is outside its accepted range.
    #[error("invalid argument [{name}] = {value}: {message}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        message: &'static str,
    },

    #[error("failed to allocate bit array")]
    Allocation(#[source] BitArrayError),

    #[error("failed to turn on bit")]
    Write(#[source] BitArrayError),

    #[error("failed to read bit")]
    Read(#[source] BitArrayError),
}

impl Error {
    pub(crate) fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        message: &'static str,
    ) -> Self {
        Error::InvalidArgument {
            name,
            value: value.to_string(),
            message,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
