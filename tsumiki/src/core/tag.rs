/// Maximum number of tags a mask can address.
pub const MAX_TAGS: usize = 32;

/// A set of tags stored as a bitmask. Bit `i` is tag `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tag(u32);

impl Tag {
    /// The single tag at index `n` (0-based).
    pub fn nth(n: usize) -> Self {
        assert!(n < MAX_TAGS);
        Self(1 << n)
    }

    pub fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// Every tag of a `count`-tag configuration.
    pub fn full(count: usize) -> Self {
        if count >= MAX_TAGS {
            Self(u32::MAX)
        } else {
            Self((1u32 << count) - 1)
        }
    }

    pub fn mask(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersects(self, other: Tag) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn union(self, other: Tag) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Tag) -> Self {
        Self(self.0 & other.0)
    }

    pub fn toggle(self, other: Tag) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Tags of `full` not in this set.
    pub fn complement(self, full: Tag) -> Self {
        Self(!self.0 & full.0)
    }

    /// Index of the lowest set tag.
    pub fn first_tag(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_creates_correct_bitmask() {
        assert_eq!(Tag::nth(0).mask(), 0b0001);
        assert_eq!(Tag::nth(1).mask(), 0b0010);
        assert_eq!(Tag::nth(2).mask(), 0b0100);
        assert_eq!(Tag::nth(8).mask(), 1 << 8);
        assert_eq!(Tag::nth(31).mask(), 1 << 31);
    }

    #[test]
    #[should_panic]
    fn test_nth_panics_on_32() {
        Tag::nth(32);
    }

    #[test]
    fn test_full() {
        assert_eq!(Tag::full(9).mask(), 0x1ff);
        assert_eq!(Tag::full(1).mask(), 1);
        assert_eq!(Tag::full(32).mask(), u32::MAX);
        assert!(Tag::full(0).is_empty());
    }

    #[test]
    fn test_intersects() {
        let tag0 = Tag::nth(0);
        let tag1 = Tag::nth(1);
        let tag01 = Tag::from_mask(0b0011);

        assert!(tag0.intersects(tag01));
        assert!(tag1.intersects(tag01));
        assert!(!tag0.intersects(tag1));
        assert!(!Tag::from_mask(0b1100).intersects(Tag::from_mask(0b0011)));
    }

    #[test]
    fn test_union_is_commutative_and_associative() {
        let masks = [0u32, 1, 0b1010, 0x1ff, 0b100_0001];
        for &a in &masks {
            for &b in &masks {
                let (a, b) = (Tag::from_mask(a), Tag::from_mask(b));
                assert_eq!(a.union(b), b.union(a));
                for &c in &masks {
                    let c = Tag::from_mask(c);
                    assert_eq!(a.union(b).union(c), a.union(b.union(c)));
                }
            }
        }
    }

    #[test]
    fn test_intersection_with_full_is_identity() {
        let full = Tag::full(9);
        for mask in [0u32, 1, 0b1_0000_0000, 0x1ff, 0b0110] {
            let m = Tag::from_mask(mask);
            assert_eq!(m.intersection(full), m);
        }
    }

    #[test]
    fn test_toggle() {
        let toggled = Tag::nth(0).toggle(Tag::nth(1));
        assert_eq!(toggled.mask(), 0b0011);

        let toggled_off = toggled.toggle(Tag::nth(0));
        assert_eq!(toggled_off.mask(), 0b0010);
    }

    #[test]
    fn test_complement() {
        let full = Tag::full(9);
        for mask in [0u32, 1, 0b1_0100_0010, 0x1ff] {
            let m = Tag::from_mask(mask);
            let rest = m.complement(full);
            assert!(!rest.intersects(m));
            assert_eq!(m.union(rest), full);
            assert_eq!(rest.complement(full), m);
        }
        assert!(full.complement(full).is_empty());
        // bits outside `full` never appear
        assert_eq!(Tag::from_mask(1 << 12).complement(full), full);
    }

    #[test]
    fn test_first_tag() {
        assert_eq!(Tag::nth(0).first_tag(), Some(0));
        assert_eq!(Tag::nth(31).first_tag(), Some(31));
        assert_eq!(Tag::from_mask(0b1010).first_tag(), Some(1));
        assert_eq!(Tag::from_mask(0b1_0001_0100).first_tag(), Some(2));
        assert_eq!(Tag::from_mask(0).first_tag(), None);
    }
}
