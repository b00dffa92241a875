/// Returns `v` sorted in ascending order.
pub fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort_unstable();
    v
}

/// Whether `a` and `b` hold the same elements with the same multiplicities.
pub fn same_multiset<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && sorted(a.to_vec()) == sorted(b.to_vec())
}
