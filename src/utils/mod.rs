pub mod error;

pub use error::{MapperError, Result};
