mod catalog;
mod generate;
pub mod menu;

pub use catalog::*;
pub use generate::*;
