pub mod pages;
pub mod properties;
