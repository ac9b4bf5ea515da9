//! Cults3D outbound adapters.
//!
//! [`GraphQlClient`] owns authentication and envelope handling;
//! [`CultsGraphQlCatalog`] implements the `CultsCatalog` port on top of it
//! using the documents in [`queries`].

mod catalog;
mod dto;
mod graphql;
pub mod queries;

pub use catalog::CultsGraphQlCatalog;
pub use graphql::{GraphQlClient, GraphQlTransport, RawResponse, ReqwestTransport, USER_AGENT};
