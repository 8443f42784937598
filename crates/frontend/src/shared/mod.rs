pub mod components;
pub mod dataset;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod page;
pub mod theme;
