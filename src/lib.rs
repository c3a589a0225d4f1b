pub mod error;
pub use error::*;

pub mod config;
pub mod fetcher;
pub mod record;
pub mod wrapper;
