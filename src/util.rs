use crate::Less;

#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(debug_assertions)]
            {
                std::println!("{:?}", $($x)*);
            }
        }
    };
}

/// Ascending by `is_less`, equal neighbors allowed.
pub(crate) fn is_sorted_by_less<T, F>(v: &[T], is_less: &F) -> bool
where
    F: Less<T>,
{
    (1..v.len()).all(|i| !is_less(&v[i], &v[i - 1]))
}
