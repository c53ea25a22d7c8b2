use std::cmp::Ordering;

mod search;
mod sort;
mod util;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Returns the index at which `new` can be inserted into the sorted region of
/// `v` so that the region stays sorted. Does not modify `v`.
///
/// `end` is the inclusive upper bound of the sorted region: `None` searches
/// all of `v`, `Some(e)` searches only the prefix `v[0..=e]` and ignores
/// everything behind it. `Some(e)` with `e >= v.len()` is a caller error and
/// is only checked in debug builds.
///
/// If `new` compares equal to an element of the region, the index of some
/// element of that equal run is returned, not necessarily the first one.
#[inline]
pub fn insertion_index<T>(v: &[T], new: &T, end: Option<usize>) -> usize
where
    T: Ord,
{
    search::insertion_index(v, new, end, &T::lt)
}

/// Like [`insertion_index`], ordered by a comparator function.
#[inline]
pub fn insertion_index_by<T, F>(v: &[T], new: &T, end: Option<usize>, compare: F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    search::insertion_index(v, new, end, &|a: &T, b: &T| compare(a, b) == Ordering::Less)
}

/// Like [`insertion_index`], ordered by a key extraction function.
#[inline]
pub fn insertion_index_by_key<T, K, F>(v: &[T], new: &T, end: Option<usize>, f: F) -> usize
where
    F: Fn(&T) -> K,
    K: Ord,
{
    search::insertion_index(v, new, end, &|a: &T, b: &T| f(a).lt(&f(b)))
}

/// Sorts the slice in place with binary insertion sort: *O*(*n* log *n*)
/// comparisons, *O*(*n*^2) worst-case element moves.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort::binary_insertion_sort(v, &T::lt);
    debug_assert!(util::is_sorted_by_less(v, &T::lt));
}

/// Sorts the slice in place with a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    sort::binary_insertion_sort(v, &is_less);
    debug_assert!(util::is_sorted_by_less(v, &is_less));
}

/// Sorts the slice in place with a key extraction function.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let is_less = |a: &T, b: &T| f(a).lt(&f(b));
    sort::binary_insertion_sort(v, &is_less);
    debug_assert!(util::is_sorted_by_less(v, &is_less));
}
