use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};

use crate::api::error::NetworkError;
use crate::api::ProductApi;
use crate::config::ApiConfig;
use crate::model::{Category, Product, ProductDraft, ProductId};

/// `reqwest`-backed client for the product collection endpoint.
///
/// `GET`/`POST` go to the collection URL, `PUT`/`DELETE` to
/// `{collection_url}/{id}`.
#[derive(Clone)]
pub struct HttpProductApi {
    client: Client,
    collection_url: Url,
}

impl HttpProductApi {
    pub fn new(config: &ApiConfig) -> Result<Self, NetworkError> {
        let collection_url =
            Url::parse(&config.collection_url).map_err(|e| NetworkError::InvalidUrl {
                url: config.collection_url.clone(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|source| NetworkError::Transport {
                url: config.collection_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            collection_url,
        })
    }

    fn item_url(&self, id: &ProductId) -> Result<Url, NetworkError> {
        let mut url = self.collection_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::InvalidUrl {
                url: self.collection_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
        accept: impl Fn(StatusCode) -> bool,
    ) -> Result<Response, NetworkError> {
        let response = request.send().await.map_err(|source| NetworkError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if accept(status) {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            "Product API rejected request"
        );
        Err(NetworkError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: Response,
        url: &Url,
    ) -> Result<T, NetworkError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|source| NetworkError::Transport {
                url: url.to_string(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_products(&self, category: Option<Category>) -> Result<Vec<Product>, NetworkError> {
        let mut url = self.collection_url.clone();
        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category.as_str());
        }
        tracing::debug!(url = %url, "Listing products");

        let response = self
            .send(self.client.get(url.clone()), &url, |s| s.is_success())
            .await?;
        let products: Vec<Product> = Self::read_json(response, &url).await?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, NetworkError> {
        let url = self.collection_url.clone();
        tracing::debug!(url = %url, name = %draft.name, "Creating product");

        let response = self
            .send(
                self.client.post(url.clone()).json(draft),
                &url,
                |s| s == StatusCode::OK || s == StatusCode::CREATED,
            )
            .await?;
        Self::read_json(response, &url).await
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), NetworkError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "Updating product");

        self.send(
            self.client.put(url.clone()).json(draft),
            &url,
            |s| s == StatusCode::OK || s == StatusCode::NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), NetworkError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "Deleting product");

        self.send(
            self.client.delete(url.clone()),
            &url,
            |s| s == StatusCode::OK || s == StatusCode::NO_CONTENT,
        )
        .await?;
        Ok(())
    }
}
