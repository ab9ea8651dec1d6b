//! Model listing command handler.

use super::load_config;
use blogcast::BlogcastResult;
use std::path::Path;

/// Print the model catalog in fallback order, marking the default.
pub fn list_models(config: Option<&Path>) -> BlogcastResult<()> {
    let config = load_config(config)?;
    for candidate in config.catalog().candidates() {
        let marker = if candidate.id() == config.models().default() {
            "*"
        } else {
            " "
        };
        println!("{} {:<32} {}", marker, candidate.id(), candidate.label());
    }
    Ok(())
}
