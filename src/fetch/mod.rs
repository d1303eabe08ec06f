//! Page fetching for the audit pipeline
//!
//! This module handles all HTTP requests, including:
//! - Building an HTTP client with a proper user agent string
//! - GET requests for the index and detail pages
//! - Transparent response caching keyed on the URL

mod cache;
mod client;

pub use cache::PageCache;
pub use client::{build_http_client, Fetcher};
