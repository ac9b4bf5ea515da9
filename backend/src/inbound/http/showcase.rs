//! Home page view-model endpoint.
//!
//! ```text
//! GET /api/showcase
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CatalogTotals, CreationCard, ShowcaseView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Raw sums across the catalog batch.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalsBody {
    /// Sum of view counts.
    pub views: u64,
    /// Sum of download counts.
    pub downloads: u64,
    /// Sum of sales in minor units.
    pub revenue_cents: i64,
}

impl From<CatalogTotals> for TotalsBody {
    fn from(totals: CatalogTotals) -> Self {
        Self {
            views: totals.views,
            downloads: totals.downloads,
            revenue_cents: totals.revenue_cents,
        }
    }
}

/// Listing card for one creation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardBody {
    /// Link target for the design page; empty when the URL has none.
    #[schema(example = "inmotion-p6-front-handle")]
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Canonical Cults3D URL.
    pub url: String,
    /// Illustration or first blueprint preview.
    pub image_url: Option<String>,
    /// Compact view count, `—` when unknown.
    #[schema(example = "1.2K")]
    pub views: String,
    /// Compact download count, `—` when unknown.
    #[schema(example = "37")]
    pub downloads: String,
    /// Formatted sales amount.
    #[schema(example = "$19.99")]
    pub sales: String,
}

impl From<CreationCard> for CardBody {
    fn from(card: CreationCard) -> Self {
        Self {
            slug: card.slug,
            name: card.name,
            url: card.url,
            image_url: card.image_url,
            views: card.views,
            downloads: card.downloads,
            sales: card.sales,
        }
    }
}

/// Home page payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseBody {
    /// Seller biography.
    pub bio: String,
    /// Seller profile link.
    pub profile_url: String,
    /// Seller avatar.
    pub avatar_url: Option<String>,
    /// Number of creations on offer.
    pub models_indexed: u64,
    /// Raw sums.
    pub totals: TotalsBody,
    /// Compact total views.
    pub total_views: String,
    /// Compact total downloads.
    pub total_downloads: String,
    /// Formatted total sales.
    pub donations: String,
    /// Highlighted creations.
    pub featured: Vec<CardBody>,
    /// Every creation in the batch.
    pub cards: Vec<CardBody>,
}

impl From<ShowcaseView> for ShowcaseBody {
    fn from(view: ShowcaseView) -> Self {
        Self {
            bio: view.bio,
            profile_url: view.profile_url,
            avatar_url: view.avatar_url,
            models_indexed: view.models_indexed,
            totals: view.totals.into(),
            total_views: view.total_views,
            total_downloads: view.total_downloads,
            donations: view.donations,
            featured: view.featured.into_iter().map(CardBody::from).collect(),
            cards: view.cards.into_iter().map(CardBody::from).collect(),
        }
    }
}

/// Assemble the home page from the catalog and the seller header.
#[utoipa::path(
    get,
    path = "/api/showcase",
    responses(
        (
            status = 200,
            description = "Showcase view model",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = ShowcaseBody
        ),
        (status = 503, description = "Cults3D unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["storefront"],
    operation_id = "getShowcase"
)]
#[get("/showcase")]
pub async fn get_showcase(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let view = state.storefront.showcase().await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(ShowcaseBody::from(view)))
}

#[cfg(test)]
mod tests {
    //! Handler coverage with fixture and mocked storefront ports.
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{FixtureStorefrontQuery, MockStorefrontQuery, StorefrontQuery};

    async fn call(storefront: Arc<dyn StorefrontQuery>) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(storefront)))
                .service(web::scope("/api").service(get_showcase)),
        )
        .await;
        actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/showcase").to_request(),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn serialises_view_in_camel_case() {
        let response = call(Arc::new(FixtureStorefrontQuery)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["modelsIndexed"], 0);
        assert_eq!(body["totals"]["revenueCents"], 0);
        assert_eq!(body["totalViews"], "0");
        assert_eq!(body["profileUrl"], "https://cults3d.com/");
        assert!(body["featured"].as_array().is_some_and(Vec::is_empty));
    }

    #[rstest]
    #[actix_web::test]
    async fn upstream_failure_is_503_with_json_body() {
        let mut storefront = MockStorefrontQuery::new();
        storefront
            .expect_showcase()
            .return_once(|| Err(Error::service_unavailable("Catalog temporarily unavailable.")));

        let response = call(Arc::new(storefront)).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "service_unavailable");
        assert_eq!(body["message"], "Catalog temporarily unavailable.");
    }
}
