//! Domain primitives, view-model assembly, and storefront services.
//!
//! Purpose: define the catalog records fetched from Cults3D, the pure
//! functions that turn them into display-ready values, and the services that
//! orchestrate port calls for each page. Nothing in this module knows about
//! HTTP frameworks or GraphQL transport.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Slug / SlugError: validated Cults3D design identifier.
//! - StorefrontService: showcase, design, and raw batch use-cases.

pub mod catalog;
pub mod error;
pub mod ports;
pub mod slug;
pub mod storefront_service;
pub mod trace_id;
pub mod view_model;

pub use self::catalog::{
    Blueprint, Creation, CreationDetail, CreationsBatch, Creator, Currency, Locale, PageRequest,
    UnknownVariant, UserHeader,
};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::slug::{Slug, SlugError, slug_from_url};
pub use self::storefront_service::{CatalogContext, DesignLookup, StorefrontService};
pub use self::trace_id::TraceId;
pub use self::view_model::{
    CatalogTotals, CreationCard, DesignView, ShowcaseView, format_compact, format_price,
    format_published, format_sales,
};

/// Convenient result alias for domain services.
///
/// # Examples
/// ```
/// use storefront::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("Not found."))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
