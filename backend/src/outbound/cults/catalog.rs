//! `CultsCatalog` adapter backed by the Cults3D GraphQL API.

use async_trait::async_trait;

use super::dto::{CreationBySlugData, MyCreationsData, UserHeaderData};
use super::graphql::GraphQlClient;
use super::queries::{
    CREATION_BY_SLUG, CreationBySlugVariables, MY_CREATIONS, MyCreationsVariables, USER_HEADER,
    UserHeaderVariables,
};
use crate::domain::ports::{CultsCatalog, CultsQueryError};
use crate::domain::{
    CreationDetail, CreationsBatch, Currency, Locale, PageRequest, Slug, UserHeader,
};

/// Catalog adapter issuing one GraphQL query per port call.
#[derive(Clone)]
pub struct CultsGraphQlCatalog {
    client: GraphQlClient,
}

impl CultsGraphQlCatalog {
    /// Wrap an authenticated client.
    #[must_use]
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CultsCatalog for CultsGraphQlCatalog {
    async fn creations_batch(
        &self,
        page: PageRequest,
        locale: Locale,
        currency: Currency,
    ) -> Result<CreationsBatch, CultsQueryError> {
        let variables = MyCreationsVariables {
            limit: page.limit,
            offset: page.offset,
            locale: locale.as_str(),
            currency: currency.as_str(),
        };
        let data: MyCreationsData = self.client.execute(&MY_CREATIONS, &variables).await?;
        let myself = data
            .myself
            .ok_or_else(|| CultsQueryError::remote("myself is null; check the API credentials"))?;
        let batch = myself
            .creations_batch
            .ok_or_else(|| CultsQueryError::decode("myself.creationsBatch is null"))?;
        batch.into_domain().map_err(CultsQueryError::decode)
    }

    async fn creation_by_slug(
        &self,
        slug: &Slug,
        locale: Locale,
        currency: Currency,
    ) -> Result<Option<CreationDetail>, CultsQueryError> {
        let variables = CreationBySlugVariables {
            slug: slug.as_str(),
            locale: locale.as_str(),
            currency: currency.as_str(),
        };
        let data: CreationBySlugData = self.client.execute(&CREATION_BY_SLUG, &variables).await?;
        data.creation
            .map(|creation| creation.into_domain().map_err(CultsQueryError::decode))
            .transpose()
    }

    async fn user_header(&self, nick: &str) -> Result<Option<UserHeader>, CultsQueryError> {
        let data: UserHeaderData = self
            .client
            .execute(&USER_HEADER, &UserHeaderVariables { nick })
            .await?;
        Ok(data.user.map(UserHeader::from))
    }
}

#[cfg(test)]
mod tests {
    //! Adapter coverage over a canned transport.

    use std::sync::{Arc, Mutex};

    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::outbound::cults::{GraphQlTransport, RawResponse};
    use crate::settings::CultsCredentials;

    struct CannedTransport {
        body: String,
        sent: Mutex<Option<Value>>,
    }

    impl CannedTransport {
        fn new(body: Value) -> Arc<Self> {
            Arc::new(Self {
                body: body.to_string(),
                sent: Mutex::new(None),
            })
        }

        fn sent_variables(&self) -> Value {
            self.sent
                .lock()
                .expect("sent lock")
                .as_ref()
                .map(|envelope| envelope["variables"].clone())
                .expect("request sent")
        }
    }

    #[async_trait]
    impl GraphQlTransport for CannedTransport {
        async fn post(
            &self,
            body: String,
            _authorization: &str,
        ) -> Result<RawResponse, CultsQueryError> {
            let envelope = serde_json::from_str(&body).expect("request body is JSON");
            *self.sent.lock().expect("sent lock") = Some(envelope);
            Ok(RawResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    fn catalog(transport: Arc<CannedTransport>) -> CultsGraphQlCatalog {
        let credentials = CultsCredentials::new("user", "pass").expect("valid credentials");
        CultsGraphQlCatalog::new(GraphQlClient::with_transport(transport, &credentials))
    }

    #[rstest]
    #[tokio::test]
    async fn batch_sends_page_and_enum_spellings() {
        let transport = CannedTransport::new(json!({
            "data": { "myself": { "creationsBatch": { "total": 0, "results": [] } } }
        }));
        let batch = catalog(transport.clone())
            .creations_batch(
                PageRequest {
                    limit: 10,
                    offset: 20,
                },
                Locale::De,
                Currency::Gbp,
            )
            .await
            .expect("batch succeeds");

        assert_eq!(batch.total, Some(0));
        assert_eq!(
            transport.sent_variables(),
            json!({ "limit": 10, "offset": 20, "locale": "DE", "currency": "GBP" })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn null_myself_is_a_remote_error() {
        let transport = CannedTransport::new(json!({ "data": { "myself": null } }));
        let error = catalog(transport)
            .creations_batch(PageRequest::default(), Locale::En, Currency::Usd)
            .await
            .expect_err("unauthenticated batch fails");
        assert!(matches!(error, CultsQueryError::Remote { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_slug_is_none() {
        let transport = CannedTransport::new(json!({ "data": { "creation": null } }));
        let slug = Slug::parse("missing-design").expect("valid slug");
        let detail = catalog(transport.clone())
            .creation_by_slug(&slug, Locale::En, Currency::Usd)
            .await
            .expect("lookup succeeds");

        assert!(detail.is_none());
        assert_eq!(transport.sent_variables()["slug"], "missing-design");
    }

    #[rstest]
    #[tokio::test]
    async fn header_is_decoded() {
        let transport = CannedTransport::new(json!({
            "data": { "user": { "shortUrl": "https://cults3d.com/u", "bio": "Hi", "imageUrl": null, "creationsCount": 7 } }
        }));
        let header = catalog(transport.clone())
            .user_header("nikkasouza")
            .await
            .expect("header succeeds")
            .expect("user exists");

        assert_eq!(header.bio.as_deref(), Some("Hi"));
        assert_eq!(header.creations_count, Some(7));
        assert_eq!(transport.sent_variables(), json!({ "nick": "nikkasouza" }));
    }
}
