pub mod config;
pub mod error;
pub mod hostlist;
pub mod logging;
pub mod outcome;
pub mod runner;

pub use error::Error;
pub use error::Result;
