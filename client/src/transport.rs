//! Transport traits the stores call through, plus the reqwest-backed
//! implementation speaking the server's JSON envelope.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{ClientError, FieldError};
use crate::resources::{AdminResource, CreatableResource};
use crate::types::{SiteContent, SiteSetting};

#[async_trait]
pub trait ResourceTransport<R: AdminResource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError>;
    async fn update(&self, id: Uuid, patch: &R::Patch) -> Result<R::Record, ClientError>;
    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

#[async_trait]
pub trait CreateTransport<R: CreatableResource>: ResourceTransport<R> {
    async fn create(&self, payload: &R::New) -> Result<R::Record, ClientError>;
}

#[async_trait]
pub trait ContentTransport: Send + Sync {
    async fn get_section(&self, section: &str) -> Result<SiteContent, ClientError>;
    async fn put_section(&self, section: &str, content: &Value) -> Result<SiteContent, ClientError>;
}

#[async_trait]
pub trait SettingsTransport: Send + Sync {
    async fn get_all(&self) -> Result<BTreeMap<String, Value>, ClientError>;
    async fn put_setting(&self, key: &str, value: &Value) -> Result<SiteSetting, ClientError>;
}

//
// ──────────────────────────────────────────────────────────
// Reqwest implementation
// ──────────────────────────────────────────────────────────
//

/// HTTP transport against a running server. Cheap to clone; one
/// instance feeds every store of an admin panel.
#[derive(Debug, Clone)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Session token attached as a bearer header to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn admin(&self, path: &str) -> String {
        format!("{}/api/admin/{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        Ok(request.send().await?)
    }
}

#[async_trait]
impl<R: AdminResource> ResourceTransport<R> for HttpApi {
    async fn list(&self) -> Result<Vec<R::Record>, ClientError> {
        let response = self.send(self.http.get(self.admin(R::PATH))).await?;
        into_data(response).await
    }

    async fn update(&self, id: Uuid, patch: &R::Patch) -> Result<R::Record, ClientError> {
        let url = format!("{}/{}", self.admin(R::PATH), id);
        let response = self.send(self.http.put(url).json(patch)).await?;
        into_data(response).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.admin(R::PATH), id);
        let response = self.send(self.http.delete(url)).await?;
        into_ack(response).await
    }
}

#[async_trait]
impl<R: CreatableResource> CreateTransport<R> for HttpApi {
    async fn create(&self, payload: &R::New) -> Result<R::Record, ClientError> {
        let response = self
            .send(self.http.post(self.admin(R::PATH)).json(payload))
            .await?;
        into_data(response).await
    }
}

#[async_trait]
impl ContentTransport for HttpApi {
    async fn get_section(&self, section: &str) -> Result<SiteContent, ClientError> {
        let url = self.admin(&format!("content/{section}"));
        let response = self.send(self.http.get(url)).await?;
        into_data(response).await
    }

    async fn put_section(&self, section: &str, content: &Value) -> Result<SiteContent, ClientError> {
        // The body is the whole section document, stored verbatim.
        let url = self.admin(&format!("content/{section}"));
        let response = self.send(self.http.put(url).json(content)).await?;
        into_data(response).await
    }
}

#[async_trait]
impl SettingsTransport for HttpApi {
    async fn get_all(&self) -> Result<BTreeMap<String, Value>, ClientError> {
        let response = self.send(self.http.get(self.admin("settings"))).await?;
        into_data(response).await
    }

    async fn put_setting(&self, key: &str, value: &Value) -> Result<SiteSetting, ClientError> {
        let body = json!({ "key": key, "value": value });
        let response = self
            .send(self.http.put(self.admin("settings")).json(&body))
            .await?;
        into_data(response).await
    }
}

//
// ──────────────────────────────────────────────────────────
// Envelope handling
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    details: Option<Vec<FieldError>>,
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, ClientError> {
    let status = response.status();

    if !status.is_success() {
        // Failure statuses still carry the envelope; fall back to the
        // status alone when the body is not one.
        let (error, details) = match response.json::<Envelope<Value>>().await {
            Ok(envelope) => (envelope.error, envelope.details),
            Err(_) => (None, None),
        };
        return Err(map_failure(status, error, details));
    }

    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    if !envelope.success {
        return Err(ClientError::Server(
            envelope.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    Ok(envelope)
}

fn map_failure(
    status: StatusCode,
    error: Option<String>,
    details: Option<Vec<FieldError>>,
) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::BAD_REQUEST => ClientError::Validation(details.unwrap_or_default()),
        _ => ClientError::Server(error.unwrap_or_else(|| status.to_string())),
    }
}

async fn into_data<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let envelope = read_envelope::<T>(response).await?;
    envelope
        .data
        .ok_or_else(|| ClientError::Decode("envelope carried no data".to_string()))
}

/// For endpoints answering a bare `{"success": true}`.
async fn into_ack(response: Response) -> Result<(), ClientError> {
    read_envelope::<Value>(response).await.map(|_| ())
}
