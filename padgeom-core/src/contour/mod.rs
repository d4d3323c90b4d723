pub mod builder;
pub mod cache;
