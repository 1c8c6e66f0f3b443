pub mod filter;
pub mod sort;

pub use filter::{filter, FilterOptions, FilterSet};
pub use sort::{sort, sort_in_place};
