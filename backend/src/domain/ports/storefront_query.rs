//! Driving port for the storefront read models.
//!
//! Inbound adapters depend on this trait rather than on the service type so
//! handlers can be exercised against mocks.

use async_trait::async_trait;

use crate::domain::{
    CatalogTotals, CreationsBatch, DesignLookup, Error, PageRequest, ShowcaseView,
    view_model::{DEFAULT_BIO, DEFAULT_PROFILE_URL},
};

/// Port exposing the storefront pages as view models.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorefrontQuery: Send + Sync {
    /// Home page: seller header, totals, featured and listed creations.
    async fn showcase(&self) -> Result<ShowcaseView, Error>;

    /// Detail page for the creation addressed by a raw path segment.
    async fn design(&self, raw_slug: &str) -> Result<DesignLookup, Error>;

    /// One raw page of the seller's creations.
    async fn creations(&self, page: PageRequest) -> Result<CreationsBatch, Error>;
}

/// Fixture implementation serving an empty storefront.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureStorefrontQuery;

#[async_trait]
impl StorefrontQuery for FixtureStorefrontQuery {
    async fn showcase(&self) -> Result<ShowcaseView, Error> {
        Ok(ShowcaseView {
            bio: DEFAULT_BIO.to_owned(),
            profile_url: DEFAULT_PROFILE_URL.to_owned(),
            avatar_url: None,
            models_indexed: 0,
            totals: CatalogTotals::default(),
            total_views: "0".to_owned(),
            total_downloads: "0".to_owned(),
            donations: "$0.00".to_owned(),
            featured: Vec::new(),
            cards: Vec::new(),
        })
    }

    async fn design(&self, _raw_slug: &str) -> Result<DesignLookup, Error> {
        Ok(DesignLookup::NotFound)
    }

    async fn creations(&self, _page: PageRequest) -> Result<CreationsBatch, Error> {
        Ok(CreationsBatch::default())
    }
}
