//! Live Supabase backend.
//!
//! Table operations speak PostgREST (`/rest/v1`), auth operations speak
//! GoTrue (`/auth/v1`). The backend is a thin REST mapping: one HTTP
//! round-trip per operation, no retries, no local state beyond the
//! configured client.

use crate::config::SupabaseConfig;
use crate::error::{DataError, DataResult};
use crate::logging::log_debug;
use crate::store::{Credentials, DataStore, Filter, Row, Session};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;

/// PostgREST representation of a single-object response.
const PGRST_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Supabase REST backend.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    http: reqwest::Client,
    base_url: String,
    schema: String,
}

impl LiveBackend {
    /// Create a new live backend from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::ConfigurationError`] if:
    /// - The URL or anon key is missing
    /// - The anon key cannot be carried as an HTTP header value
    /// - HTTP client initialization fails
    pub fn new(config: &SupabaseConfig) -> DataResult<Self> {
        config.validate()?;
        let url = config.url.clone().unwrap_or_default();
        let key = config.anon_key.clone().unwrap_or_default();

        let mut api_key = HeaderValue::from_str(&key).map_err(|e| {
            DataError::configuration_error(format!(
                "Supabase anon key is not a valid header value: {e}"
            ))
        })?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
            DataError::configuration_error(format!(
                "Supabase anon key is not a valid header value: {e}"
            ))
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                DataError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            backend = "supabase",
            base_url = %url,
            schema = %config.schema,
            "Live backend initialized"
        );

        Ok(Self {
            http,
            base_url: url.trim_end_matches('/').to_string(),
            schema: config.schema.clone(),
        })
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// PostgREST equality filter as a query parameter pair.
    fn eq_param(filter: &Filter) -> (String, String) {
        let literal = match &filter.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        (filter.column.clone(), format!("eq.{literal}"))
    }

    async fn send(&self, request: RequestBuilder) -> DataResult<Response> {
        request.send().await.map_err(|e| {
            DataError::request_failed(format!("Supabase request error: {e}"), Some(Box::new(e)))
        })
    }

    /// Map a non-success status to the crate's error taxonomy.
    async fn failure(response: Response, table: &str) -> DataError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DataError::authentication_failed(
                format!("Supabase rejected the request ({status}): {body}"),
            ),
            StatusCode::NOT_FOUND | StatusCode::NOT_ACCEPTABLE => DataError::not_found(table),
            _ => DataError::request_failed(format!("Supabase returned {status}: {body}"), None),
        }
    }

    async fn decode_rows(response: Response) -> DataResult<Vec<Row>> {
        response.json::<Vec<Row>>().await.map_err(|e| {
            DataError::response_parsing_error(format!("Malformed row list from Supabase: {e}"))
        })
    }

    async fn decode_row(response: Response) -> DataResult<Row> {
        response.json::<Row>().await.map_err(|e| {
            DataError::response_parsing_error(format!("Malformed row from Supabase: {e}"))
        })
    }
}

#[async_trait]
impl DataStore for LiveBackend {
    async fn select(&self, table: &str, filter: Option<&Filter>) -> DataResult<Vec<Row>> {
        let mut request = self
            .http
            .get(self.rest_url(table))
            .header("Accept-Profile", self.schema.as_str())
            .query(&[("select", "*")]);
        if let Some(f) = filter {
            request = request.query(&[Self::eq_param(f)]);
        }

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, table).await);
        }
        Self::decode_rows(response).await
    }

    async fn select_single(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> DataResult<Option<Row>> {
        let mut request = self
            .http
            .get(self.rest_url(table))
            .header("Accept-Profile", self.schema.as_str())
            .header(ACCEPT, PGRST_OBJECT)
            .query(&[("select", "*")]);
        if let Some(f) = filter {
            request = request.query(&[Self::eq_param(f)]);
        }

        let response = self.send(request).await?;
        // PostgREST answers 406 when the object representation matches no
        // row; a missing record is not an error on the single-read path.
        if matches!(
            response.status(),
            StatusCode::NOT_ACCEPTABLE | StatusCode::NOT_FOUND
        ) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::failure(response, table).await);
        }
        Ok(Some(Self::decode_row(response).await?))
    }

    async fn insert(&self, table: &str, row: Row) -> DataResult<Row> {
        let request = self
            .http
            .post(self.rest_url(table))
            .header("Content-Profile", self.schema.as_str())
            .header("Prefer", "return=representation")
            .json(&row);

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, table).await);
        }

        let mut rows = Self::decode_rows(response).await?;
        if rows.is_empty() {
            return Err(DataError::response_parsing_error(format!(
                "Supabase returned no representation for insert into '{table}'"
            )));
        }
        Ok(rows.remove(0))
    }

    async fn update(&self, table: &str, patch: Row, filter: &Filter) -> DataResult<Row> {
        let request = self
            .http
            .patch(self.rest_url(table))
            .header("Content-Profile", self.schema.as_str())
            .header("Prefer", "return=representation")
            .query(&[Self::eq_param(filter)])
            .json(&patch);

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, table).await);
        }

        // An empty representation means the filter matched nothing.
        let mut rows = Self::decode_rows(response).await?;
        if rows.is_empty() {
            return Err(DataError::not_found(table));
        }
        Ok(rows.remove(0))
    }

    async fn delete(&self, table: &str, filter: &Filter) -> DataResult<()> {
        let request = self
            .http
            .delete(self.rest_url(table))
            .header("Content-Profile", self.schema.as_str())
            .header("Prefer", "return=representation")
            .query(&[Self::eq_param(filter)]);

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, table).await);
        }

        let rows = Self::decode_rows(response).await?;
        if rows.is_empty() {
            return Err(DataError::not_found(table));
        }
        Ok(())
    }

    async fn current_user(&self) -> DataResult<Option<Row>> {
        let response = self.send(self.http.get(self.auth_url("user"))).await?;
        // No session yet is an expected state, not a failure.
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::failure(response, "auth/user").await);
        }
        Ok(Some(Self::decode_row(response).await?))
    }

    async fn sign_up(&self, credentials: &Credentials) -> DataResult<Option<Session>> {
        let response = self
            .send(self.http.post(self.auth_url("signup")).json(credentials))
            .await?;
        if !response.status().is_success() {
            return Err(auth_failure(response).await);
        }
        let body = decode_value(response).await?;
        // Projects requiring email confirmation create the account without
        // establishing a session.
        Ok(session_from_body(&body))
    }

    async fn sign_in(&self, credentials: &Credentials) -> DataResult<Option<Session>> {
        let response = self
            .send(
                self.http
                    .post(self.auth_url("token"))
                    .query(&[("grant_type", "password")])
                    .json(credentials),
            )
            .await?;
        if !response.status().is_success() {
            return Err(auth_failure(response).await);
        }
        let body = decode_value(response).await?;
        Ok(session_from_body(&body))
    }

    async fn sign_out(&self) -> DataResult<()> {
        let response = self.send(self.http.post(self.auth_url("logout"))).await?;
        if !response.status().is_success() {
            return Err(auth_failure(response).await);
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}

/// Map a non-success GoTrue status to the crate's error taxonomy.
///
/// GoTrue reports bad credentials as 400 as well as 401.
async fn auth_failure(response: Response) -> DataError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DataError::authentication_failed(format!("Supabase auth rejected ({status}): {body}"))
        }
        _ => DataError::request_failed(format!("Supabase auth returned {status}: {body}"), None),
    }
}

async fn decode_value(response: Response) -> DataResult<Value> {
    response.json::<Value>().await.map_err(|e| {
        DataError::response_parsing_error(format!("Malformed auth response from Supabase: {e}"))
    })
}

fn session_from_body(body: &Value) -> Option<Session> {
    let access_token = body.get("access_token")?.as_str()?.to_string();
    let token_type = body
        .get("token_type")
        .and_then(Value::as_str)
        .unwrap_or("bearer")
        .to_string();
    let user = body.get("user").and_then(Value::as_object).cloned();
    Some(Session {
        access_token,
        token_type,
        user,
    })
}
