//! Structural equality, lexicographic ordering and hashing.
//!
//! Only the live prefix `[0, len)` takes part; capacity and spare slots
//! never do. Every ordering operator is derived from a single `cmp` /
//! `partial_cmp` on the live slices, so `<`, `>`, `<=`, `>=` and `==`
//! are always mutually consistent.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::vector::Pow2Vec;

impl<T: PartialEq> PartialEq for Pow2Vec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Pow2Vec<T> {}

impl<T: PartialOrd> PartialOrd for Pow2Vec<T> {
    /// Lexicographic: elementwise up to the shorter length, then the
    /// shorter container is less.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Pow2Vec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Pow2Vec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn from_bits(len: usize, mask: u32) -> (Pow2Vec<i32>, Vec<i32>) {
        let mut v = Pow2Vec::new();
        for i in 0..len {
            v.push_back(if mask & (1 << i) != 0 { 1 } else { 0 }).unwrap();
        }
        let model = v.as_slice().to_vec();
        (v, model)
    }

    fn check_all_operators<T: Ord + std::fmt::Debug>(a: &T, b: &T, a_less: bool, b_less: bool) {
        assert_eq!(a < b, a_less, "{a:?} < {b:?}");
        assert_eq!(b < a, b_less, "{b:?} < {a:?}");
        assert_eq!(a == b, !(a_less || b_less));
        assert_eq!(a != b, a_less || b_less);
        assert_eq!(a > b, b_less);
        assert_eq!(a <= b, !b_less);
        assert_eq!(a >= b, !a_less);
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_containers_are_equal() {
        let a: Pow2Vec<i32> = Pow2Vec::new();
        let b: Pow2Vec<i32> = Pow2Vec::new();
        check_all_operators(&a, &b, false, false);
    }

    #[test]
    fn capacity_does_not_affect_equality() {
        let a = Pow2Vec::with_value(5, String::from("abacaba")).unwrap();
        let mut b = a.clone();
        b.reserve(64).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let empty = Pow2Vec::new();
        check_all_operators(&empty, &a, true, false);
    }

    #[test]
    fn spare_slots_are_ignored() {
        let mut a = Pow2Vec::from_slice(&[1, 2, 3, 4]).unwrap();
        a.pop_back().unwrap();
        a.data_mut().unwrap()[3] = 99;
        let b = Pow2Vec::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prefix_and_tail_changes() {
        let mut a = Pow2Vec::new();
        for i in 0..16usize {
            a.push_back(i).unwrap();
        }
        let b = a.clone();
        check_all_operators(&a, &b, false, false);

        a.push_back(16).unwrap();
        check_all_operators(&a, &b, false, true);

        a.erase_range(15, 17).unwrap();
        check_all_operators(&a, &b, true, false);

        a.push_back(10).unwrap();
        check_all_operators(&a, &b, true, false);

        *a.back_mut().unwrap() = 20;
        check_all_operators(&a, &b, false, true);
    }

    #[test]
    fn exhaustive_short_bit_strings_match_slice_order() {
        const MAX_LEN: usize = 5;
        for len_a in 0..=MAX_LEN {
            for mask_a in 0..(1u32 << len_a) {
                let (a, ea) = from_bits(len_a, mask_a);
                for len_b in 0..=MAX_LEN {
                    for mask_b in 0..(1u32 << len_b) {
                        let (b, eb) = from_bits(len_b, mask_b);
                        check_all_operators(&a, &b, ea < eb, eb < ea);
                    }
                }
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exactly_one_relation_holds(
                xs in proptest::collection::vec(0u8..3, 0..8),
                ys in proptest::collection::vec(0u8..3, 0..8),
            ) {
                let a = Pow2Vec::from_slice(&xs).unwrap();
                let b = Pow2Vec::from_slice(&ys).unwrap();
                let relations = [a < b, b < a, a == b];
                prop_assert_eq!(relations.iter().filter(|&&r| r).count(), 1);
                prop_assert_eq!(a.cmp(&b), xs.cmp(&ys));
                prop_assert_eq!(a == b, xs.len() == ys.len() && xs == ys);
            }
        }
    }
}
