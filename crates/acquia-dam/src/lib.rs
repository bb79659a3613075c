//! HTTP client SDK for the Acquia DAM (Widen Collective) API.
//!
//! This crate provides a typed client for both versions of the DAM REST API.
//! A single [`ApiClient`] owns the access token and the base URL of each
//! version; resource clients obtained from it translate method calls into
//! requests and parse the responses.
//!
//! # Example
//!
//! ```no_run
//! use acquia_dam::{ApiClient, AssetRef, BasicSearchParams, GetAssetOptions, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = ApiClient::builder()
//!     .access_token("wat_acme_0123456789abcdef")
//!     .build()?;
//!
//! // Search assets
//! let results = client
//!     .assets()
//!     .search(
//!         &BasicSearchParams {
//!             query: Some("cats".into()),
//!             limit: Some(10),
//!             ..Default::default()
//!         }
//!         .into(),
//!     )
//!     .await?;
//! println!("{} matching assets", results.total_count);
//!
//! // Look an asset up by filename
//! let asset = client
//!     .assets()
//!     .get(&AssetRef::filename("cat.jpg"), &GetAssetOptions::default())
//!     .await?;
//! println!("{} was uploaded {}", asset.filename, asset.file_upload_date);
//! # Ok(())
//! # }
//! ```
//!
//! # Tokens and API versions
//!
//! Tokens look like `wat_<collective>_...` (personal) or `<collective>/...`
//! (OAuth). The collective key becomes the subdomain of the v1 host; the v2
//! host is fixed. Anything else is rejected with
//! [`Error::MalformedCredential`].
//!
//! # API Coverage
//!
//! - **Assets**: search, retrieve, upload (direct and chunked), update
//!   metadata and security, versions, integration links
//! - **Categories** and **Collections**: list, create, membership
//! - **Metadata**: fields, types, controlled vocabularies
//! - **Orders**: create, inspect, zip archives, conversions
//! - **Products**, **Attributes**: the product catalog
//! - **Webhooks**, **Workflow**: subscriptions, projects, deliverables
//! - **Analytics**, **Usage**, **Users**, **Search connector**

pub mod api;
pub mod client;
pub mod credential;
pub mod error;
pub mod json;
pub mod request;
pub mod types;

pub use client::{ApiClient, ClientBuilder};
pub use credential::ApiVersion;
pub use error::{Error, ErrorKind, ResponseBody, Result};
pub use json::{coerce_dates, JsonValue};
pub use request::{ApiRequest, FileContent, FormBody, FormPart, QueryParams, RequestBody};
pub use types::*;
