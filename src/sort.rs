use std::mem::size_of;

use crate::{search, util, Less};

/// Sorts `v` in place by growing a sorted prefix: the element at `i` is
/// binary searched into `v[0..=i - 1]`, then rotated into place. Elements
/// behind `i` keep their relative order until their turn comes.
pub(crate) fn binary_insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    F: Less<T>,
{
    // Sorting has no meaningful behavior on zero-sized types. Do nothing.
    if size_of::<T>() == 0 {
        return;
    }
    for i in 1..v.len() {
        let index = search::insertion_index(v, &v[i], Some(i - 1), is_less);
        // Rotating right by one drops the element at `i` into `index` and
        // shifts the slack along, the same net order as remove-then-insert.
        v[index..=i].rotate_right(1);
        debug_assert!(util::is_sorted_by_less(&v[..=i], is_less));
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::binary_insertion_sort;
    use crate::util::is_sorted_by_less;

    #[test]
    fn empty_and_single() {
        let mut v: Vec<u32> = vec![];
        binary_insertion_sort(&mut v, &u32::lt);
        assert!(v.is_empty());

        let mut v = vec![3];
        binary_insertion_sort(&mut v, &u32::lt);
        assert_eq!(v, [3]);
    }

    #[test]
    fn reverse_input() {
        let mut v: Vec<u32> = (0..64).rev().collect();
        binary_insertion_sort(&mut v, &u32::lt);
        let expected: Vec<u32> = (0..64).collect();
        assert_eq!(v, expected);
    }

    #[test]
    fn all_equal_input() {
        let mut v = vec![7u32; 32];
        binary_insertion_sort(&mut v, &u32::lt);
        assert_eq!(v, vec![7u32; 32]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut v: Vec<i64> = (0..300).map(|_| rng.gen_range(-100..100)).collect();
        binary_insertion_sort(&mut v, &i64::lt);
        let once = v.clone();
        binary_insertion_sort(&mut v, &i64::lt);
        assert_eq!(v, once);
    }

    #[test]
    fn random_inputs_end_up_sorted() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let len = rng.gen_range(0..256);
            let mut v: Vec<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut expected = v.clone();
            expected.sort();
            binary_insertion_sort(&mut v, &i32::lt);
            assert!(is_sorted_by_less(&v, &i32::lt));
            assert_eq!(v, expected);
        }
    }
}
