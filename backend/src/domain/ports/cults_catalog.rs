//! Driven port for reading the seller catalog from Cults3D.
//!
//! The domain owns the record shapes and the failure taxonomy; the adapter
//! owns GraphQL documents, authentication, and DTO decoding.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{
    CreationDetail, CreationsBatch, Currency, Locale, PageRequest, Slug, UserHeader,
};

define_port_error! {
    /// Errors surfaced while querying Cults3D.
    pub enum CultsQueryError {
        /// Endpoint answered with a non-success status.
        Http { status: u16, body: String } =>
            "cults3d request failed with status {status}: {body}",
        /// Transport failed before a status was received.
        Network { message: String } =>
            "cults3d transport failed: {message}",
        /// GraphQL envelope carried an error; only the first is kept.
        Remote { message: String } =>
            "cults3d query error: {message}",
        /// Envelope carried neither data nor errors.
        EmptyResponse =>
            "cults3d returned no data",
        /// Body or data did not match the expected shape.
        Decode { message: String } =>
            "cults3d response decode failed: {message}",
    }
}

impl CultsQueryError {
    /// Whether the failure originated upstream rather than in this service.
    ///
    /// Decode failures mean the adapter's view of the schema is wrong, so
    /// they are not upstream faults.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::Decode { .. })
    }
}

/// Port for reading catalog records of one seller account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CultsCatalog: Send + Sync {
    /// Fetch one page of the authenticated seller's creations.
    async fn creations_batch(
        &self,
        page: PageRequest,
        locale: Locale,
        currency: Currency,
    ) -> Result<CreationsBatch, CultsQueryError>;

    /// Fetch the full record for a creation, or `None` when the slug is
    /// unknown.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use storefront::domain::ports::{CultsCatalog, FixtureCultsCatalog};
    /// use storefront::domain::{Currency, Locale, Slug};
    ///
    /// let slug = Slug::parse("p6-front-handle")?;
    /// let detail = FixtureCultsCatalog
    ///     .creation_by_slug(&slug, Locale::En, Currency::Usd)
    ///     .await?;
    /// assert!(detail.is_none());
    /// ```
    async fn creation_by_slug(
        &self,
        slug: &Slug,
        locale: Locale,
        currency: Currency,
    ) -> Result<Option<CreationDetail>, CultsQueryError>;

    /// Fetch the public profile header for `nick`, or `None` when the
    /// account does not exist.
    async fn user_header(&self, nick: &str) -> Result<Option<UserHeader>, CultsQueryError>;
}

/// Fixture implementation backed by an empty catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCultsCatalog;

#[async_trait]
impl CultsCatalog for FixtureCultsCatalog {
    async fn creations_batch(
        &self,
        _page: PageRequest,
        _locale: Locale,
        _currency: Currency,
    ) -> Result<CreationsBatch, CultsQueryError> {
        Ok(CreationsBatch {
            total: Some(0),
            results: Vec::new(),
        })
    }

    async fn creation_by_slug(
        &self,
        _slug: &Slug,
        _locale: Locale,
        _currency: Currency,
    ) -> Result<Option<CreationDetail>, CultsQueryError> {
        Ok(None)
    }

    async fn user_header(&self, _nick: &str) -> Result<Option<UserHeader>, CultsQueryError> {
        Ok(None)
    }
}
