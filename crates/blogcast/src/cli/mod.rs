//! Command-line interface module.

mod commands;
mod generate;
mod models;

pub use commands::{Cli, Commands, GenerateArgs};
pub use generate::run_generate;
pub use models::list_models;

use blogcast::{BlogcastConfig, BlogcastResult};
use std::path::Path;

/// Load configuration from `path`, or from the standard locations.
pub(crate) fn load_config(path: Option<&Path>) -> BlogcastResult<BlogcastConfig> {
    match path {
        Some(path) => BlogcastConfig::from_file(path),
        None => BlogcastConfig::load(),
    }
}
