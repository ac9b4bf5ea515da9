//! Resolved inputs for [`super::create_server`].

use std::net::SocketAddr;
use std::sync::Arc;

use storefront::domain::ports::StorefrontQuery;

/// Listener address plus the storefront use-cases served behind it.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) storefront: Arc<dyn StorefrontQuery>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, storefront: Arc<dyn StorefrontQuery>) -> Self {
        Self {
            bind_addr,
            storefront,
        }
    }
}
