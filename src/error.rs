//! Error types for the reconstruction library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The modulus handed to a reconstruction was not greater than one.
    #[error("modulus must be greater than one")]
    InvalidModulus,

    /// An extension-variant reconstruction was requested before a quadratic
    /// extension generator was attached with `set_lambda`.
    #[error("quadratic extension generator not set; call set_lambda first")]
    MissingLambda,

    /// Exact rational division by a fraction whose numerator is zero.
    #[error("division by zero in exact rational arithmetic")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
