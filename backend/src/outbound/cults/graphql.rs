//! Authenticated GraphQL client for the Cults3D API.
//!
//! The client owns the Basic token and the response envelope rules; the HTTP
//! exchange itself sits behind [`GraphQlTransport`] so tests can script
//! responses without a network.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::queries::QueryDocument;
use crate::domain::ports::CultsQueryError;
use crate::settings::CultsCredentials;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("souzalabz-storefront/", env!("CARGO_PKG_VERSION"));

/// Status and body text of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Full response body.
    pub body: String,
}

/// Sends one encoded GraphQL request and returns the raw response.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// POST `body` with the given `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`CultsQueryError::Network`] when no status was received.
    async fn post(&self, body: String, authorization: &str)
    -> Result<RawResponse, CultsQueryError>;
}

/// Reqwest-backed transport bound to one endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: Url,
}

impl ReqwestTransport {
    /// Build a transport with the storefront's fixed request headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl GraphQlTransport for ReqwestTransport {
    async fn post(
        &self,
        body: String,
        authorization: &str,
    ) -> Result<RawResponse, CultsQueryError> {
        let mut auth_value = HeaderValue::from_str(authorization)
            .map_err(|error| CultsQueryError::network(format!("invalid credentials: {error}")))?;
        auth_value.set_sensitive(true);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, auth_value)
            .body(body)
            .send()
            .await
            .map_err(|error| CultsQueryError::network(error.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|error| CultsQueryError::network(error.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[derive(Serialize)]
struct QueryEnvelope<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorDto>>,
}

#[derive(Deserialize)]
struct GraphQlErrorDto {
    message: String,
}

/// Cults3D GraphQL client.
#[derive(Clone)]
pub struct GraphQlClient {
    transport: Arc<dyn GraphQlTransport>,
    authorization: Arc<Zeroizing<String>>,
}

impl GraphQlClient {
    /// Build a client that talks to `endpoint` over HTTPS.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, credentials: &CultsCredentials) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(endpoint)?;
        Ok(Self::with_transport(Arc::new(transport), credentials))
    }

    /// Build a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(
        transport: Arc<dyn GraphQlTransport>,
        credentials: &CultsCredentials,
    ) -> Self {
        Self {
            transport,
            authorization: Arc::new(basic_authorization(credentials)),
        }
    }

    /// Run `document` with `variables` and decode the `data` member as `T`.
    ///
    /// # Errors
    ///
    /// - [`CultsQueryError::Network`] when the transport fails.
    /// - [`CultsQueryError::Http`] for a non-2xx status.
    /// - [`CultsQueryError::Remote`] with the first GraphQL error message.
    /// - [`CultsQueryError::EmptyResponse`] when `data` is absent or null.
    /// - [`CultsQueryError::Decode`] when the body or `data` has the wrong
    ///   shape.
    pub async fn execute<T, V>(
        &self,
        document: &QueryDocument,
        variables: &V,
    ) -> Result<T, CultsQueryError>
    where
        T: DeserializeOwned,
        V: Serialize + Sync,
    {
        let started = Instant::now();
        let result = self.exchange(document, variables).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => debug!(operation = document.operation, elapsed_ms, "cults3d query completed"),
            Err(error) => warn!(
                operation = document.operation,
                elapsed_ms,
                error = %error_summary(error),
                "cults3d query failed"
            ),
        }
        result
    }

    async fn exchange<T, V>(
        &self,
        document: &QueryDocument,
        variables: &V,
    ) -> Result<T, CultsQueryError>
    where
        T: DeserializeOwned,
        V: Serialize + Sync,
    {
        let body = serde_json::to_string(&QueryEnvelope {
            query: document.text,
            variables,
        })
        .map_err(|error| CultsQueryError::decode(format!("failed to encode variables: {error}")))?;
        let response = self.transport.post(body, self.authorization.as_str()).await?;
        unwrap_envelope(response)
    }
}

fn basic_authorization(credentials: &CultsCredentials) -> Zeroizing<String> {
    let pair = Zeroizing::new(format!(
        "{}:{}",
        credentials.identifier(),
        credentials.secret()
    ));
    Zeroizing::new(format!("Basic {}", STANDARD.encode(pair.as_bytes())))
}

fn unwrap_envelope<T: DeserializeOwned>(response: RawResponse) -> Result<T, CultsQueryError> {
    let RawResponse { status, body } = response;
    if !(200..300).contains(&status) {
        return Err(CultsQueryError::http(status, body));
    }

    let envelope: ResponseEnvelope = serde_json::from_str(&body).map_err(|error| {
        CultsQueryError::decode(format!("invalid GraphQL JSON payload: {error}"))
    })?;
    if let Some(first) = envelope.errors.and_then(|errors| errors.into_iter().next()) {
        return Err(CultsQueryError::remote(first.message));
    }
    let data = envelope.data.ok_or_else(CultsQueryError::empty_response)?;
    serde_json::from_value(data)
        .map_err(|error| CultsQueryError::decode(format!("unexpected data shape: {error}")))
}

fn error_summary(error: &CultsQueryError) -> String {
    match error {
        CultsQueryError::Http { status, body } => {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("status {status}")
            } else {
                format!("status {status}: {preview}")
            }
        }
        other => other.to_string(),
    }
}

fn body_preview(body: &str) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
