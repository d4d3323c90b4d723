pub mod catalog;
pub mod pad;
