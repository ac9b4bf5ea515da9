//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cults_catalog;
mod storefront_query;

#[cfg(test)]
pub use cults_catalog::MockCultsCatalog;
pub use cults_catalog::{CultsCatalog, CultsQueryError, FixtureCultsCatalog};
#[cfg(test)]
pub use storefront_query::MockStorefrontQuery;
pub use storefront_query::{FixtureStorefrontQuery, StorefrontQuery};
