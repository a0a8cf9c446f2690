pub mod client;
pub mod error;
pub mod ssh;

pub use error::*;
