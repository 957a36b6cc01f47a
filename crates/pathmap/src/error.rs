use thiserror::Error;

use crate::mapping::Side;

/// Reasons a path was rejected by [`PathMapping`](crate::PathMapping).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Path is empty or whitespace only
    #[error("{0} path is empty")]
    EmptyPath(Side),

    /// Path contains an interior NUL byte
    #[error("{0} path contains a NUL byte: {1:?}")]
    NulByte(Side, String),
}

impl Error {
    /// Returns true if the rejected path was blank
    pub fn is_empty_path(&self) -> bool {
        matches!(self, Error::EmptyPath(_))
    }

    /// Which side of the mapping the error refers to
    pub fn side(&self) -> Side {
        match self {
            Error::EmptyPath(side) | Error::NulByte(side, _) => *side,
        }
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let empty = Error::EmptyPath(Side::Local);
        assert!(empty.is_empty_path());
        assert_eq!(empty.side(), Side::Local);

        let nul = Error::NulByte(Side::Remote, "a\0b".into());
        assert!(!nul.is_empty_path());
        assert_eq!(nul.side(), Side::Remote);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::EmptyPath(Side::Remote).to_string(),
            "remote path is empty"
        );
        assert_eq!(
            Error::NulByte(Side::Local, "a\0b".into()).to_string(),
            "local path contains a NUL byte: \"a\\0b\""
        );
    }
}
