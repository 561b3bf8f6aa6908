use thiserror::Error;

/// Precondition and resource failures reported by the fallible constructors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("chunk must be of positive size, but {0} given")]
    ChunkSize(usize),
    #[error("count must be non-negative, but {0} given")]
    NegativeCount(isize),
    #[error("failed to spawn pull worker: {0}")]
    Spawn(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Converts a signed count into a `usize`, rejecting negative values.
pub(crate) fn checked_count(n: isize) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::NegativeCount(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_count() {
        assert_eq!(checked_count(3).ok(), Some(3));
        assert_eq!(checked_count(0).ok(), Some(0));
        assert!(matches!(checked_count(-1), Err(Error::NegativeCount(-1))));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::ChunkSize(0).to_string(),
            "chunk must be of positive size, but 0 given"
        );
        assert_eq!(
            Error::NegativeCount(-2).to_string(),
            "count must be non-negative, but -2 given"
        );
    }
}
