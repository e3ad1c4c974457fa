pub mod board;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod insights;
pub mod logging;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod tui;

pub use error::{Error, Result};
