use std::ops::{Deref, DerefMut};

use bytemuck::Pod;

/// A fixed-length array of `Pod` slots, zero-initialised on creation.
///
/// Unlike a `Vec` it has no way to grow or shrink: the slot count chosen at
/// construction is the slot count for the array's whole lifetime.
pub struct BucketArray<T: Pod> {
    slots: Box<[T]>,
}

impl<T: Pod> BucketArray<T> {
    /// Creates `len` zeroed slots.
    pub fn zeroed(len: usize) -> Self {
        Self {
            slots: vec![T::zeroed(); len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw view of the slots, mostly for tests and debugging.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.slots)
    }
}

impl<T: Pod> Deref for BucketArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.slots
    }
}

impl<T: Pod> DerefMut for BucketArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_operations() {
        let mut arr = BucketArray::<u32>::zeroed(10);
        assert_eq!(arr.len(), 10);
        assert!(!arr.is_empty());
        assert!(arr.iter().all(|&v| v == 0));

        arr[3] = 42;
        assert_eq!(arr.get(3), Some(&42));
        assert_eq!(arr.get(10), None);
        assert_eq!(arr.len(), 10);
    }

    #[test]
    fn test_zero_length() {
        let arr = BucketArray::<u64>::zeroed(0);
        assert!(arr.is_empty());
        assert!(arr.as_bytes().is_empty());
    }

    proptest! {
        #[test]
        fn prop_test_store_retrieval(len in 1usize..128, index in 0usize..128, value in any::<u32>()) {
            let index = index % len;
            let mut arr = BucketArray::<u32>::zeroed(len);
            arr[index] = value;
            prop_assert_eq!(arr.get(index), Some(&value));
            prop_assert_eq!(arr.len(), len);
            prop_assert_eq!(arr.as_bytes().len(), len * 4);
        }
    }
}
