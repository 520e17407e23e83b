/// Bucket count used by `FixedBucketHashMap::default()`.
pub const DEFAULT_CAPACITY: usize = 97;

/// Exact number of characters in a student identifier.
pub const ID_LEN: usize = 10;

/// Starting value of a DJBX33A digest.
pub const DJBX33A_SEED: u64 = 5381;

/// DJBX33A multiplier ("times 33").
pub const DJBX33A_MULTIPLIER: u64 = 33;

/// Lowest grade-point average a record may carry.
pub const MIN_GPA: f64 = 0.0;

/// Highest grade-point average a record may carry.
pub const MAX_GPA: f64 = 4.0;
