//! OpenAPI mirrors of the domain error payload.
//!
//! `domain::Error` stays free of utoipa, so the document describes it through
//! these stand-ins registered under the domain type's name.

use utoipa::ToSchema;

/// Machine-readable failure category.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode, rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// Malformed slug or pagination parameter.
    InvalidRequest,
    /// No creation matches the slug.
    NotFound,
    /// Cults3D failed or answered with an error.
    ServiceUnavailable,
    /// Fault inside the storefront; message redacted.
    InternalError,
}

/// Body of every non-2xx storefront response.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(dead_code, reason = "only read by the utoipa derive")]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Not found.")]
    message: String,
    /// Request correlation id, echoed in the `trace-id` header.
    #[schema(example = "6f1c2a4e-2b7d-4c3e-9a51-0d8e7f6b5a43", format = Uuid)]
    trace_id: Option<String>,
    /// Structured context, e.g. `{"field": "limit"}`.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::PartialSchema;

    use super::*;

    fn rendered<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_fields_follow_wire_casing() {
        let json = rendered::<ErrorSchema>();
        assert!(json.contains("\"traceId\""));
        assert!(!json.contains("\"trace_id\""));
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("service_unavailable")]
    #[case("internal_error")]
    fn code_variants_match_serde_names(#[case] variant: &str) {
        assert!(rendered::<ErrorCodeSchema>().contains(variant));
    }
}
