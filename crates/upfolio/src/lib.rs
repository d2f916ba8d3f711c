pub mod cli;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod normalize;
pub mod output;

pub use config::Config;
pub use error::{Error, Result};
