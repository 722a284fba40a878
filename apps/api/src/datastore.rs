//! Datastore boundary — REST client for the external backend-as-a-service
//! (PostgREST conventions: `/rest/v1/<table>` with `apikey` + bearer
//! headers).
//!
//! The service performs no persistence of its own: profiles and
//! opportunities live in the external store, and every operation here is a
//! single request/response against it.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::opportunity::{Opportunity, OpportunityRow};
use crate::models::profile::{Profile, ProfileRow};

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum DatastoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("datastore error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Client for the external data store. Cheap to clone (shares the
/// underlying connection pool).
#[derive(Clone)]
pub struct Datastore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Datastore {
    pub fn new(base_url: String, api_key: String) -> Self {
        info!("Datastore client initialized ({base_url})");
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetches a user profile; `None` when the user has not created one.
    pub async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, DatastoreError> {
        let url = format!(
            "{}/rest/v1/user_profiles?id=eq.{user_id}&select=*",
            self.base_url
        );
        let rows: Vec<ProfileRow> = self.get(&url).await?;
        Ok(rows.into_iter().next().map(Profile::from))
    }

    /// Upserts a user profile (merge on the `id` primary key).
    pub async fn upsert_profile(
        &self,
        user_id: Uuid,
        profile: Profile,
    ) -> Result<(), DatastoreError> {
        let url = format!("{}/rest/v1/user_profiles", self.base_url);
        let row = profile.into_row(user_id);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .await?;

        self.check_status(response).await?;
        debug!("Profile {user_id} upserted");
        Ok(())
    }

    /// Fetches all active opportunities, newest first. Match scores are
    /// not stored — callers attach them per profile.
    pub async fn fetch_opportunities(&self) -> Result<Vec<Opportunity>, DatastoreError> {
        let url = format!(
            "{}/rest/v1/job_opportunities?is_active=eq.true&order=created_at.desc&select=*",
            self.base_url
        );
        let rows: Vec<OpportunityRow> = self.get(&url).await?;
        debug!("Loaded {} opportunities", rows.len());
        Ok(rows.into_iter().map(Opportunity::from).collect())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, DatastoreError> {
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DatastoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DatastoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
