//! Operations over container trees.
//!
//! Every function here is pure: inputs are borrowed, results are newly built
//! trees or scalars. The submodules group the operations by concern and are all
//! re-exported at this level.

pub mod access;
pub mod diff;
pub mod elements;
pub mod flatten;
pub mod matching;
pub mod metrics;

pub use access::{group_by_keys, path_get, path_set};
pub use diff::{SetDifference, diff_assoc_recursive, difference_of_sets, intersect_keys_recursive};
pub use elements::{
    all, all_blank, any, any_blank, append_element, flip_sequential, has_all, has_any,
    move_element, partition, replace_element, replace_elements, splat, trim, unique_callback,
    zip,
};
pub use flatten::{flatten, flatten_assoc, flatten_prefixed_values, flatten_values};
pub use matching::{glob_match, matches};
pub use metrics::{
    deep_count, depth, find_highest_count, flat_count, has_empty_values, is_associative,
    is_sequential,
};
