//! Supabase (PostgREST) HTTP client.
//!
//! Reads the `places` and `distance` tables and updates edge status over
//! the REST interface. Every call is a single request with no retry.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Edge, EdgeId, NewPlace, Place};

use super::RouteStore;
use super::convert::{convert_edges, convert_places};
use super::error::StoreError;
use super::types::{EdgeRow, EdgeStatusPatch, NewPlaceRow, PlaceRow};

/// Path of the REST interface below the project URL.
const REST_PATH: &str = "rest/v1";

/// Table holding edge ("distance") records.
const EDGES_TABLE: &str = "distance";

/// Table holding place records.
const PLACES_TABLE: &str = "places";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much of an unparseable body to keep for the error message.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Supabase client.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://<project>.supabase.co`
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SupabaseConfig {
    /// Create a new config for the given project URL and key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the hosted place/edge tables.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
}

impl SupabaseClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SupabaseConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| StoreError::Config("invalid API key format".to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| StoreError::Config("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static("apikey"), api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a table endpoint.
    fn table_url(&self, table: &str) -> String {
        format!("{}/{REST_PATH}/{table}", self.base_url)
    }

    /// Fetch every row of a table.
    async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, StoreError> {
        let response = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "*")])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.text().await?;
        parse_body(&body)
    }
}

/// Map unsuccessful responses to store errors.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(StoreError::Unauthorized);
    }

    if !status.is_success() {
        return Err(api_error(status.as_u16(), response.text().await));
    }

    Ok(response)
}

/// Error for an unsuccessful status, keeping the body or why it was unreadable.
fn api_error<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> StoreError {
    let message = match body {
        Ok(body) => body,
        Err(e) => format!("<failed to read body: {e}>"),
    };
    StoreError::Api { status, message }
}

/// Parse a JSON body, keeping the start of it on failure.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
    })
}

impl RouteStore for SupabaseClient {
    async fn list_edges(&self) -> Result<Vec<Edge>, StoreError> {
        let rows: Vec<EdgeRow> = self.select_all(EDGES_TABLE).await?;
        debug!(rows = rows.len(), "fetched edge rows");
        Ok(convert_edges(rows))
    }

    async fn list_places(&self) -> Result<Vec<Place>, StoreError> {
        let rows: Vec<PlaceRow> = self.select_all(PLACES_TABLE).await?;
        debug!(rows = rows.len(), "fetched place rows");
        Ok(convert_places(rows))
    }

    async fn set_edge_active(&self, edge: EdgeId, active: bool) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.table_url(EDGES_TABLE))
            .query(&[("id", format!("eq.{edge}"))])
            .json(&EdgeStatusPatch { status: active })
            .send()
            .await?;

        check_status(response).await?;
        debug!(%edge, active, "updated edge status");
        Ok(())
    }

    async fn insert_place(&self, place: NewPlace) -> Result<Vec<Place>, StoreError> {
        let response = self
            .http
            .post(self.table_url(PLACES_TABLE))
            .header("Prefer", "return=representation")
            .json(&[NewPlaceRow::from(&place)])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response.text().await?;
        let rows: Vec<PlaceRow> = parse_body(&body)?;
        Ok(convert_places(rows))
    }
}
