//! Storefront domain service.
//!
//! Orchestrates catalog port calls for each page and maps port failures into
//! the transport-agnostic [`Error`] exactly once.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CultsCatalog, CultsQueryError, StorefrontQuery};
use crate::domain::{
    CreationsBatch, Currency, DesignView, Error, Locale, PageRequest, ShowcaseView, Slug,
};

const UNAVAILABLE_MESSAGE: &str = "Catalog temporarily unavailable.";

/// Per-deployment values sent with every catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogContext {
    /// Locale for names, URLs and tags.
    pub locale: Locale,
    /// Currency for prices and sales.
    pub currency: Currency,
    /// Account whose profile header is shown on the showcase.
    pub nick: String,
}

/// Outcome of a design lookup with a well-formed slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignLookup {
    /// The creation exists.
    Found(Box<DesignView>),
    /// Cults3D has no creation under that slug.
    NotFound,
}

/// Storefront service implementing [`StorefrontQuery`].
#[derive(Clone)]
pub struct StorefrontService<C: ?Sized> {
    catalog: Arc<C>,
    context: CatalogContext,
}

impl<C: ?Sized> StorefrontService<C> {
    /// Create a service over a catalog port.
    #[must_use]
    pub fn new(catalog: Arc<C>, context: CatalogContext) -> Self {
        Self { catalog, context }
    }
}

impl<C> StorefrontService<C>
where
    C: CultsCatalog + ?Sized,
{
    /// The adapter has already logged `error` with a bounded body preview.
    fn map_query_error(operation: &'static str, error: CultsQueryError) -> Error {
        if error.is_upstream() {
            Error::service_unavailable(UNAVAILABLE_MESSAGE)
        } else {
            Error::internal(format!("{operation}: {error}"))
        }
    }
}

#[async_trait]
impl<C> StorefrontQuery for StorefrontService<C>
where
    C: CultsCatalog + ?Sized,
{
    async fn showcase(&self) -> Result<ShowcaseView, Error> {
        let context = &self.context;
        let (batch, header) = futures_util::try_join!(
            self.catalog
                .creations_batch(PageRequest::default(), context.locale, context.currency),
            self.catalog.user_header(&context.nick),
        )
        .map_err(|error| Self::map_query_error("showcase", error))?;

        Ok(ShowcaseView::assemble(
            &batch,
            header.as_ref(),
            context.currency,
        ))
    }

    async fn design(&self, raw_slug: &str) -> Result<DesignLookup, Error> {
        let slug = Slug::parse(raw_slug).map_err(|error| Error::invalid_request(error.to_string()))?;
        let detail = self
            .catalog
            .creation_by_slug(&slug, self.context.locale, self.context.currency)
            .await
            .map_err(|error| Self::map_query_error("design", error))?;

        Ok(detail.map_or(DesignLookup::NotFound, |found| {
            DesignLookup::Found(Box::new(DesignView::from_detail(
                found,
                self.context.currency,
            )))
        }))
    }

    async fn creations(&self, page: PageRequest) -> Result<CreationsBatch, Error> {
        self.catalog
            .creations_batch(page, self.context.locale, self.context.currency)
            .await
            .map_err(|error| Self::map_query_error("creations", error))
    }
}

#[cfg(test)]
#[path = "storefront_service_tests.rs"]
mod tests;
