//! Async client for the Medium data API served through RapidAPI.
//!
//! Every endpoint is a GET returning the upstream JSON untouched, wrapped in
//! [`Reply`]. A non-2xx status is a [`Reply::Failed`], not an error.
//!
//! ```no_run
//! # async fn run() -> medium_core::Result<()> {
//! let client = medium_api::MediumClient::new("rapidapi-key");
//! let user_id = client.get_user_id("someone").await?.into_result()?;
//! let info = client.get_user_info(&user_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
mod endpoints;
pub mod request;

pub use client::{MediumClient, API_BASE_URL, API_HOST};
pub use medium_core::{extract_article_id, models::FeedMode, ApiFailure, MediumError, Reply, Result};
pub use request::{QueryValue, Request};
