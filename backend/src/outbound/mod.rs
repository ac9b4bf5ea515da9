//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **cults**: Cults3D GraphQL client and the `CultsCatalog` adapter built
//!   on it.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod cults;
