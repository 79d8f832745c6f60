use log::{debug, trace};

use crate::cs::select::partition::{three_way_partition, Rank};
use crate::error::{validate_rank, Result, SelectError};

/// Size of the groups whose medians are used to pick the pivot.
pub const GROUP_SIZE: usize = 5;

/// Finds the k-th smallest element (0-indexed) of `data` in worst-case linear time using the
/// median-of-medians pivot rule.
///
/// `data` is not modified; each level of recursion works on freshly built partitions.
///
/// # Arguments
/// * `data` - The collection to select from. Duplicates are allowed.
/// * `k` - The rank to select, `0` being the minimum.
///
/// # Returns
/// * `Ok(value)` - The element that would be at index `k` if `data` were sorted ascending
/// * `Err(SelectError)` - If `data` is empty or `k >= data.len()`
///
/// # Examples
/// ```
/// use kselect::select_deterministic;
///
/// let arr = [12, 3, 5, 7, 19, 1, 4, 10, 6];
/// assert_eq!(select_deterministic(&arr, 3).unwrap(), 5);
/// assert_eq!(select_deterministic(&arr, 4).unwrap(), 6);
/// ```
///
/// # Complexity
/// * Time: O(n) worst case, since the pivot discards at least ~30% of the elements each round
/// * Space: O(n) for the partitions
pub fn select_deterministic<T: Ord + Clone>(data: &[T], k: usize) -> Result<T> {
    validate_rank(data.len(), k)?;
    debug!("deterministic select: len={}, k={}", data.len(), k);
    Ok(select(data, k))
}

/// Returns the pivot the deterministic selector would choose for `data`: the median of the
/// medians of consecutive groups of five.
///
/// # Errors
/// * `EmptyInput` if `data` is empty
pub fn median_of_medians<T: Ord + Clone>(data: &[T]) -> Result<T> {
    if data.is_empty() {
        return Err(SelectError::EmptyInput);
    }
    Ok(pivot(data))
}

fn select<T: Ord + Clone>(data: &[T], k: usize) -> T {
    if data.len() <= GROUP_SIZE {
        return sorted_nth(data, k);
    }

    let pivot = pivot(data);
    let parts = three_way_partition(data, &pivot);
    trace!(
        "len={} k={} -> low={} equal={} high={}",
        data.len(),
        k,
        parts.low.len(),
        parts.equal,
        parts.high.len()
    );

    match parts.locate(k) {
        Rank::Low(k) => select(&parts.low, k),
        Rank::Pivot => pivot,
        Rank::High(k) => select(&parts.high, k),
    }
}

fn pivot<T: Ord + Clone>(data: &[T]) -> T {
    let medians: Vec<T> = data.chunks(GROUP_SIZE).map(group_median).collect();
    let mid = medians.len() / 2;
    select(&medians, mid)
}

/// Lower median of a group, so the result is always one of the group's elements.
fn group_median<T: Ord + Clone>(group: &[T]) -> T {
    sorted_nth(group, (group.len() - 1) / 2)
}

fn sorted_nth<T: Ord + Clone>(data: &[T], k: usize) -> T {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    sorted.swap_remove(k)
}
