//! Read access to the headless content store.
//!
//! The store is an external collaborator: sections only depend on the
//! [`ContentStore`] trait, and the production [`HttpContentStore`] is
//! constructed once at startup and handed to each loader.

pub mod client;
pub mod error;
pub mod image;
pub mod query;

use std::future::Future;

use serde_json::Value;

pub use client::HttpContentStore;
pub use error::{ContentError, FetchErrorKind};
pub use image::{AssetRef, ImageRef, ImageUrlBuilder};
pub use query::{Field, Query, Shape};

/// Single-document read accessor.
pub trait ContentStore: Send + Sync + 'static {
    /// Run `query` and return the matched document, or `None` when the
    /// query matched nothing.
    fn fetch(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Option<Value>, ContentError>> + Send;
}
