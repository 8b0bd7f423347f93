//! GraphQL-over-HTTP client.
//!
//! Every operation posts `{ query, variables }` to the configured endpoint
//! and unwraps the standard GraphQL envelope: any entry in `errors` fails
//! the request, and a response with no `data` is an error of its own.
//! Authenticated operations attach the bearer token from [`ApiClient::login`].

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::error::ApiError;
use crate::query::{
    self, ChunksByDistanceInput, LoginInput, RegisterInput, VoxelUpdatesByDistanceInput,
};
use crate::types::{AuthTokens, ChunkSummary, ChunkVoxelUpdates, UserMapState};

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Client for the voxel-world GraphQL service.
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: None,
        })
    }

    /// Returns the bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Posts one GraphQL operation and unwraps the envelope.
    async fn request<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, ApiError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": document, "variables": variables }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            return Err(ApiError::Graphql {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }
        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Logs in and stores the bearer token for subsequent requests.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
        #[derive(Deserialize)]
        struct Data {
            login: AuthTokens,
        }

        let input = LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        };
        let data: Data = self
            .request(query::LOGIN, json!({ "input": input }))
            .await?;
        debug!(game_token_id = %data.login.game_token_id, "logged in");
        self.token = Some(data.login.token.clone());
        Ok(data.login)
    }

    /// Registers a new account and stores the bearer token.
    pub async fn register(
        &mut self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthTokens, ApiError> {
        #[derive(Deserialize)]
        struct Data {
            register: AuthTokens,
        }

        let input = RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
            gamertag: username.to_string(),
        };
        let data: Data = self
            .request(query::REGISTER, json!({ "input": input }))
            .await?;
        self.token = Some(data.register.token.clone());
        Ok(data.register)
    }

    /// Lists the maps the authenticated user has state on.
    pub async fn user_map_states(&self) -> Result<Vec<UserMapState>, ApiError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            user_map_states: Vec<UserMapState>,
        }

        let data: Data = self
            .request(query::USER_MAP_STATES, serde_json::Value::Null)
            .await?;
        Ok(data.user_map_states)
    }

    /// Fetches chunk summaries within a Manhattan distance of a center.
    pub async fn chunks_by_distance(
        &self,
        input: &ChunksByDistanceInput,
    ) -> Result<Vec<ChunkSummary>, ApiError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            get_chunks_by_distance: Page,
        }
        #[derive(Deserialize)]
        struct Page {
            chunks: Vec<ChunkSummary>,
        }

        let data: Data = self
            .request(query::CHUNKS_BY_DISTANCE, json!({ "input": input }))
            .await?;
        let chunks = data.get_chunks_by_distance.chunks;
        debug!(count = chunks.len(), max_distance = input.max_distance, "fetched chunks");
        Ok(chunks)
    }

    /// Fetches pending voxel updates within a Manhattan distance of a center.
    pub async fn voxel_updates_by_distance(
        &self,
        input: &VoxelUpdatesByDistanceInput,
    ) -> Result<Vec<ChunkVoxelUpdates>, ApiError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            list_voxel_updates_by_distance: Page,
        }
        #[derive(Deserialize)]
        struct Page {
            chunks: Vec<ChunkVoxelUpdates>,
        }

        let data: Data = self
            .request(query::VOXEL_UPDATES_BY_DISTANCE, json!({ "input": input }))
            .await?;
        Ok(data.list_voxel_updates_by_distance.chunks)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
