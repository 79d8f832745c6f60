//! Order-statistic selection.
//!
//! Two ways of finding the k-th smallest element of an unordered slice:
//!
//! * [`select_deterministic`]: median-of-medians, worst-case O(n).
//! * [`select_randomized`]: randomized quickselect, expected O(n), worst-case O(n^2).
//!
//! ```
//! use kselect::{select_deterministic, select_randomized};
//!
//! let arr = [12, 3, 5, 7, 19, 1, 4, 10, 6];
//! assert_eq!(select_deterministic(&arr, 3), select_randomized(&arr, 3));
//! ```

pub mod cs;
pub mod error;

pub use cs::select;
pub use cs::select::{
    median_of_medians, select_deterministic, select_randomized, select_randomized_in_place,
    select_randomized_with, DeterministicSelector, RandomizedSelector, Selector,
};
pub use error::{Error, Result};
