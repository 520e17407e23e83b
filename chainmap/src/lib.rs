//! A separate-chaining hash table of student records over a fixed number of
//! buckets, addressed by the DJBX33A digest of each record's identifier.
//!
//! ```
//! use chainmap::{FixedBucketHashMap, StudentId};
//!
//! let mut table = FixedBucketHashMap::default();
//! let id = StudentId::parse("9000000001")?;
//! let record = table.record("Nora Quinn", id, 20, 3.9)?;
//! table.put(record)?;
//!
//! assert_eq!(table.lookup("9000000001")?.map(|r| r.name()), Some("Nora Quinn"));
//! assert_eq!(table.lookup("9000000002")?, None);
//! assert!(table.lookup("42").is_err());
//! # Ok::<(), chainmap::ChainMapError>(())
//! ```
mod bucket_array;
pub mod chain_map;
pub mod config;
pub mod djbx33a;
pub mod entry;
pub mod error;
pub mod logger;
pub mod record;
pub use bucket_array::BucketArray;
pub use chain_map::{Bucket, ChainIter, FixedBucketHashMap, FxFixedBucketHashMap};
pub use djbx33a::{Digest, Djbx33aBuildHasher, Djbx33aHasher, djbx33a, digest_with};
pub use error::{ChainMapError, Result};
pub use record::{Record, StudentId};
