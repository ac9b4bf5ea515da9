//! Design detail endpoint.
//!
//! ```text
//! GET /api/designs/{slug}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DesignLookup, DesignView, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_store_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const NOT_FOUND_MESSAGE: &str = "Not found.";

/// Detail page payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignBody {
    /// Display name.
    pub name: String,
    /// Cover illustration.
    pub image_url: Option<String>,
    /// Link to the creation on Cults3D.
    pub cults_url: String,
    /// Localised category name.
    pub category: Option<String>,
    /// Localised license name, `—` when unknown.
    pub license: String,
    /// Publication date, e.g. `Jan 5, 2026`.
    pub published: Option<String>,
    /// Compact view count.
    pub views: String,
    /// Compact like count.
    pub likes: String,
    /// Compact download count.
    pub downloads: String,
    /// Localised tags.
    pub tags: Vec<String>,
    /// Formatted price or `FREE`.
    #[schema(example = "$4.50")]
    pub price: String,
    /// Author nickname.
    pub creator_nick: Option<String>,
    /// Author profile link.
    pub creator_url: Option<String>,
}

impl From<DesignView> for DesignBody {
    fn from(view: DesignView) -> Self {
        Self {
            name: view.name,
            image_url: view.image_url,
            cults_url: view.cults_url,
            category: view.category,
            license: view.license,
            published: view.published,
            views: view.views,
            likes: view.likes,
            downloads: view.downloads,
            tags: view.tags,
            price: view.price,
            creator_nick: view.creator_nick,
            creator_url: view.creator_url,
        }
    }
}

/// Fetch the detail view for one creation.
#[utoipa::path(
    get,
    path = "/api/designs/{slug}",
    params(("slug" = String, Path, description = "Cults3D design slug, percent-encoded")),
    responses(
        (
            status = 200,
            description = "Design view model",
            headers(("Cache-Control" = String, description = "Always no-store")),
            body = DesignBody
        ),
        (status = 400, description = "Invalid slug", body = ErrorSchema),
        (status = 404, description = "Unknown design", body = ErrorSchema),
        (status = 503, description = "Cults3D unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["storefront"],
    operation_id = "getDesign"
)]
#[get("/designs/{slug}")]
pub async fn get_design(
    state: web::Data<HttpState>,
    request: actix_web::HttpRequest,
) -> ApiResult<HttpResponse> {
    // Read the undecoded segment so percent-decoding happens exactly once.
    let raw_slug = request.match_info().get("slug").unwrap_or_default();
    match state.storefront.design(raw_slug).await? {
        DesignLookup::Found(view) => Ok(HttpResponse::Ok()
            .insert_header(no_store_header())
            .json(DesignBody::from(*view))),
        DesignLookup::NotFound => Err(Error::not_found(NOT_FOUND_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    //! Handler coverage with a mocked storefront port.
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::ports::MockStorefrontQuery;

    fn view() -> DesignView {
        DesignView {
            name: "P6 Front Handle".to_owned(),
            image_url: None,
            cults_url: "https://cults3d.com/:1".to_owned(),
            category: Some("Gadget".to_owned()),
            license: "CC BY".to_owned(),
            published: Some("Jan 5, 2026".to_owned()),
            views: "1.2K".to_owned(),
            likes: "0".to_owned(),
            downloads: "—".to_owned(),
            tags: vec!["euc".to_owned()],
            price: "FREE".to_owned(),
            creator_nick: Some("nikkasouza".to_owned()),
            creator_url: None,
        }
    }

    async fn call(storefront: MockStorefrontQuery, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(Arc::new(storefront))))
                .service(web::scope("/api").service(get_design)),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_design_view() {
        let mut storefront = MockStorefrontQuery::new();
        storefront
            .expect_design()
            .withf(|slug| slug == "p6-front-handle")
            .times(1)
            .return_once(|_| Ok(DesignLookup::Found(Box::new(view()))));

        let response = call(storefront, "/api/designs/p6-front-handle").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["cultsUrl"], "https://cults3d.com/:1");
        assert_eq!(body["price"], "FREE");
        assert_eq!(body["creatorNick"], "nikkasouza");
    }

    #[rstest]
    #[actix_web::test]
    async fn passes_encoded_segment_through() {
        let mut storefront = MockStorefrontQuery::new();
        storefront
            .expect_design()
            .withf(|slug| slug == "foo%2Fbar")
            .times(1)
            .return_once(|_| Err(Error::invalid_request("Invalid slug: foo/bar")));

        let response = call(storefront, "/api/designs/foo%2Fbar").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["message"], "Invalid slug: foo/bar");
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_design_is_404() {
        let mut storefront = MockStorefrontQuery::new();
        storefront
            .expect_design()
            .return_once(|_| Ok(DesignLookup::NotFound));

        let response = call(storefront, "/api/designs/missing").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], NOT_FOUND_MESSAGE);
    }
}
