use log::{debug, trace};
use rand::Rng;

use crate::cs::select::partition::{partition_in_place, three_way_partition, Rank};
use crate::error::{validate_rank, Result};

/// Finds the k-th smallest element (0-indexed) of `data` with randomized quickselect, drawing
/// pivots from the thread-local RNG.
///
/// See [`select_randomized_with`] to supply a seeded generator.
///
/// # Examples
/// ```
/// use kselect::select_randomized;
///
/// let arr = [12, 3, 5, 7, 19, 1, 4, 10, 6];
/// assert_eq!(select_randomized(&arr, 4).unwrap(), 6);
/// ```
pub fn select_randomized<T: Ord + Clone>(data: &[T], k: usize) -> Result<T> {
    select_randomized_with(data, k, &mut rand::thread_rng())
}

/// Finds the k-th smallest element (0-indexed) of `data` with randomized quickselect, drawing
/// pivots uniformly from `rng`.
///
/// The result does not depend on the generator: only the running time does.
///
/// # Returns
/// * `Ok(value)` - The element that would be at index `k` if `data` were sorted ascending
/// * `Err(SelectError)` - If `data` is empty or `k >= data.len()`
///
/// # Complexity
/// * Time: O(n) expected, O(n^2) worst case when the pivot draws are consistently unlucky
/// * Space: O(n) for the partitions
pub fn select_randomized_with<T, R>(data: &[T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    validate_rank(data.len(), k)?;
    debug!("randomized select: len={}, k={}", data.len(), k);
    Ok(quickselect(data, k, rng))
}

/// In-place variant of [`select_randomized_with`]. Avoids allocating partitions by
/// rearranging `data` around each pivot; `data` is left permuted.
///
/// # Examples
/// ```
/// use kselect::select_randomized_in_place;
///
/// let mut arr = [7, 1, 3, 4, 6, 2, 5];
/// let kth = select_randomized_in_place(&mut arr, 3, &mut rand::thread_rng()).unwrap();
/// assert_eq!(kth, 4);
/// ```
pub fn select_randomized_in_place<T, R>(data: &mut [T], k: usize, rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    validate_rank(data.len(), k)?;
    debug!("randomized select in place: len={}, k={}", data.len(), k);
    Ok(quickselect_in_place(data, k, rng))
}

fn quickselect<T, R>(data: &[T], k: usize, rng: &mut R) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if data.len() == 1 {
        return data[0].clone();
    }

    let pivot = data[rng.gen_range(0..data.len())].clone();
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
        Rank::Low(k) => quickselect(&parts.low, k, rng),
        Rank::Pivot => pivot,
        Rank::High(k) => quickselect(&parts.high, k, rng),
    }
}

fn quickselect_in_place<T, R>(arr: &mut [T], k: usize, rng: &mut R) -> T
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    if arr.len() == 1 {
        return arr[0].clone();
    }
    let pivot_index = rng.gen_range(0..arr.len());
    let (lt, gt) = partition_in_place(arr, pivot_index);
    if k < lt {
        quickselect_in_place(&mut arr[..lt], k, rng)
    } else if k < gt {
        arr[k].clone()
    } else {
        quickselect_in_place(&mut arr[gt..], k - gt, rng)
    }
}
