//! HTTP inbound adapter exposing the storefront JSON endpoints.

pub mod cache_control;
pub mod creations;
pub mod designs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod showcase;
pub mod state;
pub mod validation;

pub use error::ApiResult;
