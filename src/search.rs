use crate::Less;

/// Binary search for the position at which `new` belongs within the sorted
/// region `v[0..=end]` (whole slice when `end` is `None`).
///
/// The region must already be ascending by `is_less`; if it is not, the
/// returned index is still in bounds but meaningless. The slice is never read
/// outside `[0, end]` and never written.
pub(crate) fn insertion_index<T, F>(v: &[T], new: &T, end: Option<usize>, is_less: &F) -> usize
where
    F: Less<T>,
{
    if let Some(end) = end {
        debug_assert!(end < v.len());
    }
    let mut end = match end {
        Some(end) => end,
        // Empty region: prepend.
        None => match v.len().checked_sub(1) {
            Some(end) => end,
            None => return 0,
        },
    };
    let mut start = 0;

    loop {
        // Search space exhausted, `start` is the insertion point.
        if start > end {
            return start;
        }
        let middle = start + (end - start) / 2;

        // Equal keys short-circuit: any position inside an equal run is a
        // valid insertion point, so take the one the search landed on.
        if !is_less(&v[middle], new) && !is_less(new, &v[middle]) {
            return middle;
        }
        // `new` sits strictly between `middle - 1` and `middle`.
        if middle > 0 && is_less(&v[middle - 1], new) && is_less(new, &v[middle]) {
            return middle;
        }

        if is_less(new, &v[middle]) {
            // Once `middle` reaches the front, `new` is smaller than the
            // whole remaining region.
            if middle == 0 {
                return 0;
            }
            end = middle - 1;
        } else {
            start = middle + 1;
        }
    }
}
