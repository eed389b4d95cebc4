//! HarperDB Client Library
//!
//! Async client for the HarperDB operations API. Every call is a single
//! `POST` of a JSON operation to the configured endpoint.
//!
//! ```rust,no_run
//! use harperdb_rs::{Client, ClientConfig, CreateTableParams};
//!
//! #[tokio::main]
//! async fn main() -> harperdb_rs::Result<()> {
//!     let db = Client::new(ClientConfig::with_credentials(
//!         "http://localhost:9925",
//!         "admin",
//!         "password",
//!     ))?;
//!
//!     db.create_schema("dev").await?;
//!     let result = db
//!         .create_table(&CreateTableParams::new("dev", "dog", "id"))
//!         .await?;
//!     println!("{} {:?}", result.status, result.message);
//!     Ok(())
//! }
//! ```

mod client;

pub use client::Client;
pub use harperdb_core::{
    AttributeParams, ClientConfig, ConfigError, CreateTableParams, HashValue, MutationResult,
    Operation, Operator, RequestError, SearchByConditionParams, SearchCondition, SearchParams,
    SearchResult, SearchType, StatusResult, TableParams,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid request payload: {0}")]
    Payload(#[from] RequestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, ClientError>;
