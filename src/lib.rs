pub mod config;
pub mod endpoints;
pub mod error;
pub mod proxy;
pub mod server;

pub use error::{Error, Result};
