//! Common error and logging infrastructure shared by the salesviz crates.

pub mod error;
pub mod logging;

pub use error::{Result, SalesVizError};
