pub mod catalog;

pub use catalog::{RegionTab, COUNTRIES};
