//! SouzaLabz storefront backend library.
//!
//! Fetches the seller's catalog from the Cults3D GraphQL API and assembles
//! display-ready view models served as JSON.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
