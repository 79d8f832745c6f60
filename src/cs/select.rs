pub mod analysis;
pub mod median_of_medians;
pub mod partition;
pub mod randomized_quickselect;
pub mod selector;

pub use median_of_medians::{median_of_medians, select_deterministic};
pub use partition::{partition_in_place, three_way_partition, Partition, Rank};
pub use randomized_quickselect::{
    select_randomized, select_randomized_in_place, select_randomized_with,
};
pub use selector::{DeterministicSelector, RandomizedSelector, RandomizedSelectorBuilder, Selector};
