mod catalog;
mod import;
mod types;

pub use catalog::*;
pub use import::*;
pub use types::*;
