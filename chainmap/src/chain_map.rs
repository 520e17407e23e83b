use std::fmt;
use std::hash::BuildHasher;

use log::{debug, trace};
use rustc_hash::FxBuildHasher;

use crate::bucket_array::BucketArray;
use crate::config::DEFAULT_CAPACITY;
use crate::djbx33a::{Digest, Djbx33aBuildHasher, digest_with};
use crate::entry::{BucketHead, NodeId};
use crate::error::{ChainMapError, Result};
use crate::record::{Record, StudentId};

/// Same table, bucketed with FxHash instead of DJBX33A.
pub type FxFixedBucketHashMap = FixedBucketHashMap<FxBuildHasher>;

#[derive(Debug)]
struct Node {
    record: Record,
    next: Option<NodeId>,
}

/// A separate-chaining hash table over a fixed number of buckets.
///
/// Records live in a node arena owned by the table. Each bucket head is
/// either empty or names the first and last node of its chain, and every
/// node names its successor, so a chain is walked in insertion order.
/// The bucket count never changes after construction and records are never
/// removed; dropping the table releases every record exactly once.
pub struct FixedBucketHashMap<S = Djbx33aBuildHasher> {
    heads: BucketArray<BucketHead>,
    nodes: Vec<Node>,
    hasher: S,
}

impl Default for FixedBucketHashMap {
    fn default() -> Self {
        Self {
            heads: BucketArray::zeroed(DEFAULT_CAPACITY),
            nodes: Vec::new(),
            hasher: Djbx33aBuildHasher,
        }
    }
}

impl FixedBucketHashMap {
    /// Creates a DJBX33A-bucketed table with `capacity` empty buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, Djbx33aBuildHasher)
    }
}

impl<S: BuildHasher> FixedBucketHashMap<S> {
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity == 0 {
            return Err(ChainMapError::ZeroCapacity);
        }
        debug!("creating table with {capacity} buckets");
        Ok(Self {
            heads: BucketArray::zeroed(capacity),
            nodes: Vec::new(),
            hasher,
        })
    }

    /// Digest of an identifier under this table's hasher.
    pub fn digest(&self, id: &str) -> Digest {
        digest_with(&self.hasher, id.as_bytes())
    }

    /// The bucket `id` belongs in: its digest modulo the capacity.
    pub fn bucket_index(&self, id: &StudentId) -> usize {
        (self.digest(id.as_str()) % self.capacity() as u64) as usize
    }

    /// Builds a record already addressed to the right bucket of this table.
    pub fn record(
        &self,
        name: impl Into<String>,
        id: StudentId,
        age: u32,
        gpa: f64,
    ) -> Result<Record> {
        let bucket = self.bucket_index(&id);
        Record::new(name, id, age, gpa, bucket)
    }

    /// Appends `record` to the tail of the chain named by its bucket index.
    ///
    /// The index is checked against the table: it must be in range and equal
    /// to `bucket_index(record.id())`. Duplicate identifiers are accepted.
    pub fn put(&mut self, record: Record) -> Result<()> {
        let capacity = self.capacity();
        let bucket = record.bucket();
        if bucket >= capacity {
            return Err(ChainMapError::BucketOutOfRange { bucket, capacity });
        }
        let expected = self.bucket_index(record.id());
        if expected != bucket {
            return Err(ChainMapError::MisplacedRecord {
                id: record.id().to_string(),
                expected,
                actual: bucket,
            });
        }

        trace!("put {} into bucket {bucket}", record.id());
        let node = self.nodes.len();
        self.nodes.push(Node { record, next: None });

        let head = self.heads[bucket];
        self.heads[bucket] = match head.last_node() {
            None => BucketHead::chained(node, node),
            Some(tail) => {
                self.nodes[tail].next = Some(node);
                head.with_tail(node)
            }
        };
        Ok(())
    }

    /// First record stored under `id`, if any.
    pub fn get(&self, id: &StudentId) -> Option<&Record> {
        let bucket = self.bucket_index(id);
        self.chain(bucket).find(|record| record.id() == id)
    }

    /// Looks up a raw identifier string.
    ///
    /// A malformed identifier is an error; a well-formed one that was never
    /// inserted is `Ok(None)`.
    pub fn lookup(&self, id: &str) -> Result<Option<&Record>> {
        let id = StudentId::parse(id)?;
        let found = self.get(&id);
        match found {
            Some(_) => debug!("lookup {id}: found in bucket {}", self.bucket_index(&id)),
            None => debug!("lookup {id}: not found"),
        }
        Ok(found)
    }
}

impl<S> FixedBucketHashMap<S> {
    pub fn capacity(&self) -> usize {
        self.heads.len()
    }

    /// Number of records stored, placeholder heads not included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records per bucket (len / capacity).
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    fn chain(&self, bucket: usize) -> ChainIter<'_> {
        ChainIter {
            nodes: &self.nodes,
            next: self.heads[bucket].first_node(),
        }
    }

    /// View of one bucket, `None` past the last bucket.
    pub fn bucket(&self, index: usize) -> Option<Bucket<'_>> {
        let head = *self.heads.get(index)?;
        Some(Bucket {
            index,
            head,
            nodes: &self.nodes,
        })
    }

    /// Every bucket in index order, empty ones included.
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = Bucket<'_>> {
        self.heads.iter().enumerate().map(|(index, &head)| Bucket {
            index,
            head,
            nodes: &self.nodes,
        })
    }

    /// All records, bucket by bucket, each chain in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.buckets().flat_map(|bucket| bucket.records())
    }

    /// Drops every record and resets all buckets to empty.
    pub fn clear(&mut self) {
        self.heads.fill(BucketHead::empty());
        self.nodes.clear();
    }

    /// Tears the table down, handing back each record once in `iter()` order.
    pub fn into_records(self) -> Vec<Record> {
        let order: Vec<NodeId> = self
            .heads
            .iter()
            .flat_map(|head| NodeIds {
                nodes: &self.nodes,
                next: head.first_node(),
            })
            .collect();

        let mut slots: Vec<Option<Record>> =
            self.nodes.into_iter().map(|node| Some(node.record)).collect();
        order
            .into_iter()
            .filter_map(|node| slots[node].take())
            .collect()
    }
}

impl<S> fmt::Display for FixedBucketHashMap<S> {
    /// One `Hash Value: <index>` line per bucket followed by its records,
    /// with a blank line between buckets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capacity = self.capacity();
        for bucket in self.buckets() {
            writeln!(f, "Hash Value: {}", bucket.index())?;
            for record in bucket.records() {
                writeln!(f, "{record}")?;
            }
            if bucket.index() + 1 != capacity {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<S> fmt::Debug for FixedBucketHashMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBucketHashMap")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

/// Read-only view of one bucket.
#[derive(Debug, Clone, Copy)]
pub struct Bucket<'a> {
    index: usize,
    head: BucketHead,
    nodes: &'a [Node],
}

impl<'a> Bucket<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    /// Number of records in the chain.
    pub fn len(&self) -> usize {
        self.records().count()
    }

    /// The chain's records in insertion order.
    pub fn records(&self) -> ChainIter<'a> {
        ChainIter {
            nodes: self.nodes,
            next: self.head.first_node(),
        }
    }
}

/// Iterator over one chain's records.
pub struct ChainIter<'a> {
    nodes: &'a [Node],
    next: Option<NodeId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.next?];
        self.next = node.next;
        Some(&node.record)
    }
}

struct NodeIds<'a> {
    nodes: &'a [Node],
    next: Option<NodeId>,
}

impl Iterator for NodeIds<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.nodes[id].next;
        Some(id)
    }
}
