use thiserror::Error;

/// Errors raised by sequence construction and the terminal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A count, step or bound was rejected at call time.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// `find` found no element accepted by the predicate.
    #[error("No matching element")]
    NotFound,
    /// The operation is not available on this cursor or sequence.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
    /// A cursor was advanced past its last element.
    #[error("Cursor exhausted")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fail with [`Error::InvalidArgument`] unless `condition` holds.
pub(crate) fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(true, "unused"), Ok(()));
        assert_eq!(
            require(false, "n must be positive"),
            Err(Error::InvalidArgument("n must be positive".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidArgument("step must not be zero".to_string()).to_string(),
            "Invalid argument: step must not be zero"
        );
        assert_eq!(Error::Unsupported("remove").to_string(), "Unsupported operation: remove");
    }
}
