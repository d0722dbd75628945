//! Error types for amlich.
//!
//! Calendar arithmetic over the supported range never fails; errors only
//! arise from validating constructors and from the strict variants of the
//! conversion functions.  The `ensure!` and `fail!` macros keep those
//! checks to one line each.

use thiserror::Error;

/// The top-level error type used throughout amlich.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (produced by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (produced by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Civil (solar) date error.
    #[error("date error: {0}")]
    Date(String),

    /// A lunar date that does not exist, e.g. a leap flag on a month that is
    /// not the leap month of its year.
    #[error("invalid lunar date: {0}")]
    InvalidLunarDate(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout amlich.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use amlich_core::{ensure, errors::Error};
/// fn month(m: u8) -> amlich_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use amlich_core::fail;
/// fn always_err() -> amlich_core::errors::Result<()> {
///     fail!("no new moon found");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(x: i32) -> Result<i32> {
        ensure!(x >= 0, "x must be non-negative, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(-1),
            Err(Error::Precondition("x must be non-negative, got -1".into()))
        );
    }

    #[test]
    fn display_messages() {
        let e = Error::InvalidLunarDate("leap month 3 of 2024".into());
        assert_eq!(e.to_string(), "invalid lunar date: leap month 3 of 2024");
        assert_eq!(Error::Date("bad".into()).to_string(), "date error: bad");
    }
}
