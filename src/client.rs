use reqwest::StatusCode;
use serde_json::Value;
use std::env;
use thiserror::Error;
use url::Url;

const LOCAL_API_BASE: &str = "http://localhost:8000/api";
const DEPLOYED_API_BASE: &str = "https://glossary-app.up.railway.app/api";

// Fallback messages used when a rejection body carries no usable `detail`.
const CREATE_FALLBACK: &str = "Ошибка создания термина";
const UPDATE_FALLBACK: &str = "Ошибка обновления термина";
const DELETE_FALLBACK: &str = "Ошибка удаления термина";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: status {status}")]
    UnexpectedStatus { status: StatusCode },

    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

pub fn default_base_url() -> String {
    if let Ok(base) = env::var("GLOSSARY_API_BASE") {
        return base;
    }

    if cfg!(debug_assertions) {
        LOCAL_API_BASE.to_string()
    } else {
        DEPLOYED_API_BASE.to_string()
    }
}

pub struct GlossaryClient {
    base_url: String,
    http: reqwest::Client,
}

impl GlossaryClient {
    pub fn new() -> Self {
        Self::with_base_url(default_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_terms(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut request = self
            .http
            .get(format!("{}/terms", self.base_url))
            .query(&[("page", page), ("per_page", per_page)]);
        if let Some(search) = search.filter(|query| !query.is_empty()) {
            request = request.query(&[("search", search)]);
        }

        Self::read_json(request.send().await?).await
    }

    pub async fn get_term(&self, id: u64) -> Result<Value, ClientError> {
        let response = self
            .http
            .get(format!("{}/terms/{id}", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    pub async fn create_term(&self, term: &Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .post(format!("{}/terms", self.base_url))
            .json(term)
            .send()
            .await?;
        Self::read_mutation(response, CREATE_FALLBACK).await
    }

    pub async fn update_term(&self, id: u64, term: &Value) -> Result<Value, ClientError> {
        let response = self
            .http
            .put(format!("{}/terms/{id}", self.base_url))
            .json(term)
            .send()
            .await?;
        Self::read_mutation(response, UPDATE_FALLBACK).await
    }

    pub async fn delete_term(&self, id: u64) -> Result<Value, ClientError> {
        let response = self
            .http
            .delete(format!("{}/terms/{id}", self.base_url))
            .send()
            .await?;
        Self::read_mutation(response, DELETE_FALLBACK).await
    }

    pub async fn search_terms(&self, query: &str) -> Result<Value, ClientError> {
        let response = self.http.get(self.search_url(query)?).send().await?;
        Self::read_json(response).await
    }

    pub async fn health_check(&self) -> Result<Value, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    // The query goes into a path segment, so it must be percent-encoded.
    fn search_url(&self, query: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.clone()))?
            .extend(["terms", "search", query]);
        Ok(url)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    async fn read_mutation(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<Value, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let detail = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|body| body.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string());

        Err(ClientError::Rejected { status, detail })
    }
}

impl Default for GlossaryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_the_base() {
        let client = GlossaryClient::with_base_url("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn search_url_percent_encodes_the_query_segment() {
        let client = GlossaryClient::with_base_url("http://localhost:8000/api");
        let url = client.search_url("сеть / стек").expect("valid base");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/terms/search/%D1%81%D0%B5%D1%82%D1%8C%20%2F%20%D1%81%D1%82%D0%B5%D0%BA"
        );
    }

    #[test]
    fn search_url_rejects_an_unparsable_base() {
        let client = GlossaryClient::with_base_url("not a url");
        assert!(matches!(
            client.search_url("api"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
