//! HarperDB Core Library
//!
//! This crate provides the pure building blocks of the HarperDB client:
//! - Operation names and typed parameters
//! - Request payload construction with snake_case key normalization
//! - Total projection of responses onto typed results
//! - Client configuration and credential encoding

pub mod config;
pub mod models;
pub mod operations;
pub mod request;
pub mod response;
pub mod utils;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigError, Credentials};
pub use models::*;
pub use operations::Operation;
pub use request::{OperationRequest, RequestError};
pub use response::{MutationResult, SearchResult, StatusResult};
