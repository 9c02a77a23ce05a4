pub mod catalog;
pub mod cli;
pub mod config;
pub mod observability;
pub mod planner;

pub use planner::{Planner, UserState};
