//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::StorefrontQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storefront read models.
    pub storefront: Arc<dyn StorefrontQuery>,
}

impl HttpState {
    /// Construct state around a storefront port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use storefront::domain::ports::FixtureStorefrontQuery;
    /// use storefront::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureStorefrontQuery));
    /// let _storefront = state.storefront.clone();
    /// ```
    pub fn new(storefront: Arc<dyn StorefrontQuery>) -> Self {
        Self { storefront }
    }
}
