/// Number of leaves still to come from a set of pending subtrees, one per
/// entry in `levels`, where each subtree fans out `branching` ways per level.
///
/// Returned as an iterator size hint: exact when the total fits in `usize`,
/// `(usize::MAX, None)` otherwise.
#[must_use]
pub fn leaf_count(branching: usize, mut levels: impl Iterator<Item = u32>) -> (usize, Option<usize>) {
    let exact = levels.try_fold(0usize, |total, level| {
        branching
            .checked_pow(level)
            .and_then(|leaves| total.checked_add(leaves))
    });

    match exact {
        Some(count) => (count, Some(count)),
        None => (usize::MAX, None),
    }
}
