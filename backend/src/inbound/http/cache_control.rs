//! Shared cache-control policy for HTTP handlers.

/// Catalog data is fetched fresh per request and must never be reused.
pub const NO_STORE: &str = "no-store";

/// Build the standard cache-control header tuple for storefront responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
