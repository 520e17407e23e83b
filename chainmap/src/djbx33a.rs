use std::hash::{BuildHasher, Hasher};

use crate::config::{DJBX33A_MULTIPLIER, DJBX33A_SEED};

/// Digest produced by [`djbx33a`].
pub type Digest = u64;

/// Bernstein's "times 33 add" hash over the raw bytes of `s`.
///
/// Every byte is consumed as an unsigned value, nothing is case-folded or
/// trimmed, and the arithmetic wraps modulo 2^64.
///
/// ```
/// use chainmap::djbx33a;
///
/// assert_eq!(djbx33a(""), 5381);
/// assert_eq!(djbx33a("a"), 5381 * 33 + 97);
/// ```
pub fn djbx33a(s: &str) -> Digest {
    djbx33a_bytes(s.as_bytes())
}

pub fn djbx33a_bytes(bytes: &[u8]) -> Digest {
    digest_with(&Djbx33aBuildHasher, bytes)
}

/// Digests raw bytes with a fresh hasher from `build`.
///
/// Unlike `BuildHasher::hash_one`, no length prefix or terminator is mixed in,
/// so with [`Djbx33aBuildHasher`] this is exactly [`djbx33a_bytes`].
pub fn digest_with<S: BuildHasher>(build: &S, bytes: &[u8]) -> Digest {
    let mut hasher = build.build_hasher();
    hasher.write(bytes);
    hasher.finish()
}

/// Streaming form of [`djbx33a`].
///
/// `write` is a straight continuation of the digest, so feeding a string in
/// several pieces yields the same value as feeding it at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Djbx33aHasher {
    digest: Digest,
}

impl Default for Djbx33aHasher {
    fn default() -> Self {
        Self {
            digest: DJBX33A_SEED,
        }
    }
}

impl Hasher for Djbx33aHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.digest = self
                .digest
                .wrapping_mul(DJBX33A_MULTIPLIER)
                .wrapping_add(b as u64);
        }
    }

    fn finish(&self) -> u64 {
        self.digest
    }
}

/// `BuildHasher` for [`Djbx33aHasher`], the default hasher of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djbx33aBuildHasher;

impl BuildHasher for Djbx33aBuildHasher {
    type Hasher = Djbx33aHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djbx33aHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seed_for_empty_input() {
        assert_eq!(djbx33a(""), 5381);
    }

    #[test]
    fn test_known_digests() {
        // 5381 * 33 + 'a'
        assert_eq!(djbx33a("a"), 177_670);
        // (5381 * 33 + 'a') * 33 + 'b'
        assert_eq!(djbx33a("ab"), 5_863_208);
    }

    #[test]
    fn test_order_sensitive() {
        assert_ne!(djbx33a("ab"), djbx33a("ba"));
        assert_ne!(djbx33a("9000000001"), djbx33a("1000000009"));
    }

    #[test]
    fn test_no_case_folding() {
        assert_ne!(djbx33a("Rusty"), djbx33a("rusty"));
    }

    #[test]
    fn test_wraps_instead_of_overflowing() {
        // 64 bytes is far past the point where 33^n overflows a u64
        let long = "9".repeat(64);
        let mut expected: u64 = 5381;
        for _ in 0..64 {
            expected = expected.wrapping_mul(33).wrapping_add(b'9' as u64);
        }
        assert_eq!(djbx33a(&long), expected);
    }

    #[test]
    fn test_high_bytes_are_unsigned() {
        // 'é' is 0xC3 0xA9 in UTF-8; both bytes must be added as values above 127
        let expected = (5381u64 * 33 + 0xC3) * 33 + 0xA9;
        assert_eq!(djbx33a("é"), expected);
    }

    #[test]
    fn test_build_hasher_matches_free_function() {
        let id = "9000000001";
        assert_eq!(digest_with(&Djbx33aBuildHasher, id.as_bytes()), djbx33a(id));
    }

    proptest! {
        #[test]
        fn prop_deterministic(s in ".*") {
            prop_assert_eq!(djbx33a(&s), djbx33a(&s));
        }

        #[test]
        fn prop_streaming_matches_one_shot(s in "[0-9]{0,32}", split in 0usize..32) {
            let split = split.min(s.len());
            let (a, b) = s.split_at(split);
            let mut h = Djbx33aHasher::default();
            h.write(a.as_bytes());
            h.write(b.as_bytes());
            prop_assert_eq!(h.finish(), djbx33a(&s));
        }
    }
}
