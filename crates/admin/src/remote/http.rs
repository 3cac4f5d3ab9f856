//! Reqwest-backed implementation of the remote store client.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use magnolia_core::{Category, Color, Product, ProductId};

use super::{ProductPayload, ProductStore, StoreError};
use crate::config::AdminConfig;

/// HTTP client for the remote catalog store.
///
/// Cheap to clone; the reqwest client and configuration live behind an
/// `Arc`.
#[derive(Clone)]
pub struct HttpProductStore {
    inner: Arc<Inner>,
}

struct Inner {
    client: reqwest::Client,
    base_url: Url,
    access_token: Option<SecretString>,
}

impl HttpProductStore {
    /// Create a new store client from configuration.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                client: reqwest::Client::new(),
                base_url: config.api_base_url.clone(),
                access_token: config.access_token.clone(),
            }),
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, StoreError> {
        let url = self.inner.base_url.join(path)?;
        let mut builder = self.inner.client.request(method, url);
        if let Some(token) = &self.inner.access_token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        Ok(builder)
    }

    /// Check the response status and decode the JSON body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Read the body for diagnostics; the store reports validation
        // problems in plain text or JSON depending on the endpoint.
        let message = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(500)
            .collect::<String>();
        debug!(status = %status, body = %message, "store returned non-success status");
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn build_form(payload: &ProductPayload) -> Result<Form, StoreError> {
        let mut form = Form::new();
        for (name, value) in payload.text_parts() {
            form = form.text(name, value);
        }
        for image in &payload.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }
        Ok(form)
    }
}

impl ProductStore for HttpProductStore {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let response = self.request(Method::GET, "api/products")?.send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, StoreError> {
        let form = Self::build_form(payload)?;
        let response = self
            .request(Method::POST, "api/products")?
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self, payload), fields(product_id = %id))]
    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, StoreError> {
        let form = Self::build_form(payload)?;
        let response = self
            .request(Method::PUT, &format!("api/products/{id}"))?
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, &format!("api/products/{id}"))?
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let response = self.request(Method::GET, "api/categories")?.send().await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn list_colors(&self) -> Result<Vec<Color>, StoreError> {
        let response = self.request(Method::GET, "api/colors")?.send().await?;
        Self::decode(response).await
    }
}
