mod generate;
mod random;
mod types;

pub use generate::*;
pub use random::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "export")] {
        mod export;

        pub use export::*;
    }
}
