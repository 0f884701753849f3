//! Error types for the rowmap crate
//!
//! This module contains all error types that can be returned by `Reflector` operations.

use mapper_config::ConfigError;
use record_mapper::MapperError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowmapError {
    #[error("Mapping error: {0}")]
    Mapping(#[from] MapperError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
