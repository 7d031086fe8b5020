pub mod catalog;
pub mod filter;
pub mod placeholder;
pub mod record;

pub use catalog::{Catalog, TagLabel};
pub use filter::{FilterKey, compute_subset, filter_key_from_attr};
pub use record::GameRecord;
