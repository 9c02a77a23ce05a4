mod error;
pub mod recipe;

pub use error::*;
