pub mod demo;
pub mod dto;
pub mod summary;

pub use dto::*;
