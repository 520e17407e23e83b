use bytemuck::{Pod, Zeroable};
use modular_bitfield::prelude::B63;
use modular_bitfield::{Specifier, bitfield};

/// Handle of a chain node inside the table's node arena.
pub type NodeId = usize;

#[derive(Specifier, Debug, PartialEq)]
pub enum HeadStatus {
    Empty,
    Chained,
}

/// Head of one bucket's chain.
///
/// An all-zero head is `Empty`, so a zeroed bucket array is a table with no
/// records. A `Chained` head holds the arena handles of the first and last
/// node of the chain.
#[bitfield(bits = 128)]
#[derive(Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct BucketHead {
    #[bits = 1]
    status: HeadStatus,
    first: B63,
    last: u64,
}

impl BucketHead {
    pub fn empty() -> Self {
        BucketHead::new()
    }

    pub fn chained(first: NodeId, last: NodeId) -> Self {
        assert!((first as u64) < (1 << 63), "node handle {first} exceeds 63 bits");
        BucketHead::new()
            .with_status(HeadStatus::Chained)
            .with_first(first as u64)
            .with_last(last as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.status() == HeadStatus::Empty
    }

    pub fn first_node(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| self.first() as NodeId)
    }

    pub fn last_node(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| self.last() as NodeId)
    }

    /// Same chain, new tail.
    pub fn with_tail(self, last: NodeId) -> Self {
        debug_assert!(!self.is_empty());
        self.with_last(last as u64)
    }
}

impl std::fmt::Debug for BucketHead {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.first_node(), self.last_node()) {
            (Some(first), Some(last)) => f
                .debug_struct("BucketHead")
                .field("first", &first)
                .field("last", &last)
                .finish(),
            _ => f.write_str("BucketHead(Empty)"),
        }
    }
}
