//! Raw catalog batch endpoint.
//!
//! ```text
//! GET /api/cults/my-creations?limit=60&offset=0
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Blueprint, Creation, CreationsBatch, PageRequest, catalog::DEFAULT_PAGE_LIMIT};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_u32_param};

/// Query parameters accepted by the batch endpoint.
///
/// Kept as strings so malformed numbers produce the JSON error envelope
/// rather than Actix's plain-text extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreationsQuery {
    limit: Option<String>,
    offset: Option<String>,
}

impl CreationsQuery {
    fn page(&self) -> ApiResult<PageRequest> {
        Ok(PageRequest {
            limit: parse_u32_param(
                self.limit.as_deref(),
                FieldName::new("limit"),
                DEFAULT_PAGE_LIMIT,
            )?,
            offset: parse_u32_param(self.offset.as_deref(), FieldName::new("offset"), 0)?,
        })
    }
}

/// Monetary amount in minor units.
#[derive(Debug, Serialize, ToSchema)]
pub struct MoneyBody {
    /// Amount in minor units of the configured currency.
    #[schema(example = 1999)]
    pub cents: i64,
}

/// Printable file attached to a creation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintBody {
    /// Download URL.
    pub file_url: Option<String>,
    /// Preview image URL.
    pub image_url: Option<String>,
}

impl From<Blueprint> for BlueprintBody {
    fn from(blueprint: Blueprint) -> Self {
        Self {
            file_url: blueprint.file_url,
            image_url: blueprint.image_url,
        }
    }
}

/// One creation as returned by Cults3D.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreationBody {
    /// Localised display name.
    #[schema(example = "InMotion P6 Front Handle")]
    pub name: String,
    /// Canonical localised URL.
    pub url: String,
    /// Cover illustration.
    pub illustration_image_url: Option<String>,
    /// Lifetime downloads.
    pub downloads_count: Option<u64>,
    /// Lifetime views.
    pub views_count: Option<u64>,
    /// Lifetime sales.
    pub total_sales_amount: Option<MoneyBody>,
    /// Attached files.
    pub blueprints: Vec<BlueprintBody>,
}

impl From<Creation> for CreationBody {
    fn from(creation: Creation) -> Self {
        Self {
            name: creation.name,
            url: creation.url,
            illustration_image_url: creation.illustration_image_url,
            downloads_count: creation.downloads_count,
            views_count: creation.views_count,
            total_sales_amount: creation.total_sales_cents.map(|cents| MoneyBody { cents }),
            blueprints: creation.blueprints.into_iter().map(BlueprintBody::from).collect(),
        }
    }
}

/// One page of the seller's creations.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreationsBatchBody {
    /// Total across all pages, when reported.
    pub total: Option<u64>,
    /// Creations in this page.
    pub results: Vec<CreationBody>,
}

impl From<CreationsBatch> for CreationsBatchBody {
    fn from(batch: CreationsBatch) -> Self {
        Self {
            total: batch.total,
            results: batch.results.into_iter().map(CreationBody::from).collect(),
        }
    }
}

/// Fetch one raw page of the seller's creations.
#[utoipa::path(
    get,
    path = "/api/cults/my-creations",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, default 60"),
        ("offset" = Option<u32>, Query, description = "Records skipped, default 0")
    ),
    responses(
        (
            status = 200,
            description = "Creations batch",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = CreationsBatchBody
        ),
        (status = 400, description = "Invalid limit or offset", body = ErrorSchema),
        (status = 503, description = "Cults3D unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalog"],
    operation_id = "listMyCreations"
)]
#[get("/cults/my-creations")]
pub async fn list_my_creations(
    state: web::Data<HttpState>,
    query: web::Query<CreationsQuery>,
) -> ApiResult<HttpResponse> {
    let page = query.into_inner().page()?;
    let batch = state.storefront.creations(page).await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(CreationsBatchBody::from(batch)))
}
