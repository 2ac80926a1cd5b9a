//! # ProductLayer client types
//!
//! Data-transfer objects and client configuration for the ProductLayer
//! product-information REST API. This crate provides the payload shapes and
//! the connection-parameter model that the HTTP transport layer builds on:
//!
//! - [`ErrorMessage`] - the error payload the API returns in HTTP error
//!   response bodies, with constructors for capturing caught errors as
//!   transportable diagnostic text
//! - [`RankingEntry`] - the generic element of ranked-list responses,
//!   serializing under the API's `pl-rank`/`pl-score`/`pl-entity` wire keys
//! - [`RestClientConfig`] - schema, host, port, version, application key,
//!   and optional proxy routing, with sensible defaults and value-semantic
//!   cloning for deriving per-environment variants
//!
//! ## Quick Start
//!
//! ```
//! use productlayer::{DomainObject, RankingEntry, RestClientConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Product {
//!     gtin: String,
//!     name: String,
//! }
//!
//! impl DomainObject for Product {}
//!
//! fn main() -> Result<(), productlayer::Error> {
//!     // Configure the client connection. Clone the template to customize
//!     // a variant without mutating the original.
//!     let config = RestClientConfig::default().with_api_key("my-app-key");
//!     let base_url = config.base_url()?;
//!     assert_eq!(base_url.as_str(), "https://api.productlayer.com:80/0.5/");
//!
//!     // Deserialize one element of a ranked-list response.
//!     let entry: RankingEntry<Product> = serde_json::from_str(
//!         r#"{"pl-rank":1,"pl-score":982,"pl-entity":{"gtin":"4029764001807","name":"Club-Mate"}}"#,
//!     ).map_err(productlayer::Error::from)?;
//!     assert_eq!(entry.rank, Some(1));
//!     assert_eq!(entry.entity.name, "Club-Mate");
//!
//!     Ok(())
//! }
//! ```
//!
//! The transport itself (request signing, endpoint definitions, retries) is a
//! separate concern; this crate only defines the values that cross its
//! boundary.

pub mod config;
mod error;
pub mod message;
pub mod ranking;

pub use config::RestClientConfig;
pub use error::{Error, Result};
pub use message::{ApiStatus, ErrorMessage};
pub use ranking::{DomainObject, RankingEntry};
