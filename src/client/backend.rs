use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use super::{base_url, ContributorSource};
use crate::error::FetchError;
use crate::model::{ContributorListing, ContributorRecord, TotalContribution};

/// Client for the contributors REST backend
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base: Url,
}

impl BackendClient {
    pub fn new(client: reqwest::Client, base: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            base: base_url(base)?,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.base.join(path)?;

        let body = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(body)
    }
}

#[async_trait]
impl ContributorSource for BackendClient {
    #[tracing::instrument(skip(self), fields(backend = %self.base))]
    async fn list_contributors(&self) -> Result<Vec<ContributorRecord>, FetchError> {
        let listing: ContributorListing = self.get("api/contributors/").await?;
        let records = listing.into_records();

        tracing::debug!(count = records.len(), "fetched contributors");
        Ok(records)
    }

    #[tracing::instrument(skip(self))]
    async fn total_contribution(&self, id: i64) -> Result<u32, FetchError> {
        let total: TotalContribution = self
            .get(&format!("api/contributor/{id}/total_contribution/"))
            .await?;

        Ok(total.total_contribution)
    }
}
