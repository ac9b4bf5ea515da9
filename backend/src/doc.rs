//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every storefront endpoint, the health probes, and
//! the schema wrappers that keep domain types free of utoipa derives. The
//! document backs Swagger UI in debug builds and is exported by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::creations::{BlueprintBody, CreationBody, CreationsBatchBody, MoneyBody};
use crate::inbound::http::designs::DesignBody;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::showcase::{CardBody, ShowcaseBody, TotalsBody};

/// OpenAPI document for the storefront API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SouzaLabz storefront API",
        description = "View models assembled from the seller's Cults3D catalog."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::showcase::get_showcase,
        crate::inbound::http::designs::get_design,
        crate::inbound::http::creations::list_my_creations,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ShowcaseBody,
        TotalsBody,
        CardBody,
        DesignBody,
        CreationsBatchBody,
        CreationBody,
        MoneyBody,
        BlueprintBody,
        ErrorSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "storefront", description = "Catalog view models"),
        (name = "catalog", description = "Raw Cults3D catalog data"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema fields.
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/showcase")]
    #[case("/api/designs/{slug}")]
    #[case("/api/cults/my-creations")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("ShowcaseBody", "modelsIndexed")]
    #[case("DesignBody", "cultsUrl")]
    #[case("CreationBody", "totalSalesAmount")]
    fn body_schemas_use_camel_case(#[case] name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("registered schema");
        assert_object_schema_has_field(schema, field);
    }
}
