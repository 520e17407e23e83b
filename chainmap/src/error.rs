use thiserror::Error;

use crate::config::{ID_LEN, MAX_GPA, MIN_GPA};

/// Errors that can occur when building records or working with a `FixedBucketHashMap`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainMapError {
    /// A table needs at least one bucket
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Identifier is not exactly `ID_LEN` characters long
    #[error("identifier must be {} characters long, got {len}", ID_LEN)]
    InvalidIdLength { len: usize },

    /// Identifier has the right length but contains something other than ASCII digits
    #[error("identifier {id:?} must contain only digits")]
    NonNumericId { id: String },

    #[error("GPA {gpa} is outside {}..={}", MIN_GPA, MAX_GPA)]
    GpaOutOfRange { gpa: f64 },

    /// The record's bucket index does not address a bucket of this table
    #[error("bucket {bucket} is out of range for a table of {capacity} buckets")]
    BucketOutOfRange { bucket: usize, capacity: usize },

    /// The record's bucket index disagrees with the hash of its identifier
    #[error("record {id} belongs in bucket {expected}, not {actual}")]
    MisplacedRecord {
        id: String,
        expected: usize,
        actual: usize,
    },
}

impl ChainMapError {
    /// True for rejected input values (identifier, GPA), as opposed to capacity or placement errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChainMapError::InvalidIdLength { .. }
                | ChainMapError::NonNumericId { .. }
                | ChainMapError::GpaOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChainMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ChainMapError::InvalidIdLength { len: 3 }.to_string(),
            "identifier must be 10 characters long, got 3"
        );
        assert_eq!(
            ChainMapError::ZeroCapacity.to_string(),
            "capacity must be greater than zero"
        );
        assert_eq!(
            ChainMapError::BucketOutOfRange {
                bucket: 97,
                capacity: 97
            }
            .to_string(),
            "bucket 97 is out of range for a table of 97 buckets"
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(ChainMapError::InvalidIdLength { len: 0 }.is_validation());
        assert!(
            ChainMapError::NonNumericId {
                id: "90000000a1".to_string()
            }
            .is_validation()
        );
        assert!(!ChainMapError::ZeroCapacity.is_validation());
        assert!(
            !ChainMapError::BucketOutOfRange {
                bucket: 1,
                capacity: 1
            }
            .is_validation()
        );
    }
}
