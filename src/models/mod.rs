pub mod data;
pub mod field;

pub use data::*;
pub use field::*;
