use std::cmp::Ordering;

/// The result of splitting a collection around a pivot value.
///
/// `low` holds the elements strictly less than the pivot and `high` the elements strictly
/// greater, each in their original relative order. Elements equal to the pivot are only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub low: Vec<T>,
    pub high: Vec<T>,
    pub equal: usize,
}

/// Where a rank falls once a collection has been partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Inside `low`, at the given rank.
    Low(usize),
    /// Inside the run of elements equal to the pivot.
    Pivot,
    /// Inside `high`, at the given (shifted) rank.
    High(usize),
}

impl<T> Partition<T> {
    /// Maps rank `k` of the partitioned collection onto one of its three blocks.
    pub fn locate(&self, k: usize) -> Rank {
        let low = self.low.len();
        if k < low {
            Rank::Low(k)
        } else if k < low + self.equal {
            Rank::Pivot
        } else {
            Rank::High(k - low - self.equal)
        }
    }
}

/// Splits `data` into elements less than, equal to, and greater than `pivot`.
///
/// The pivot does not need to be an element of `data`; in that case `equal` is zero.
///
/// # Examples
/// ```
/// use kselect::cs::select::partition::three_way_partition;
///
/// let parts = three_way_partition(&[4, 1, 4, 7, 2, 4], &4);
/// assert_eq!(parts.low, vec![1, 2]);
/// assert_eq!(parts.high, vec![7]);
/// assert_eq!(parts.equal, 3);
/// ```
pub fn three_way_partition<T: Ord + Clone>(data: &[T], pivot: &T) -> Partition<T> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    for x in data {
        match x.cmp(pivot) {
            Ordering::Less => low.push(x.clone()),
            Ordering::Greater => high.push(x.clone()),
            Ordering::Equal => {}
        }
    }
    let equal = data.len() - low.len() - high.len();
    Partition { low, high, equal }
}

/// Rearranges `data` in place into `[< pivot | == pivot | > pivot]`, where the pivot is the
/// element initially at `pivot_index`.
///
/// Returns `(lt, gt)` such that `data[lt..gt]` is exactly the block equal to the pivot.
///
/// # Panics
/// - if `pivot_index >= data.len()`.
pub fn partition_in_place<T: Ord + Clone>(data: &mut [T], pivot_index: usize) -> (usize, usize) {
    let pivot = data[pivot_index].clone();
    let mut lt = 0;
    let mut i = 0;
    let mut gt = data.len();
    // data[..lt] < pivot, data[lt..i] == pivot, data[gt..] > pivot
    while i < gt {
        match data[i].cmp(&pivot) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
