use futures::future::try_join_all;

use crate::client::{ContributorSource, RepositorySource};
use crate::error::FetchError;
use crate::model::{Contributor, RepositorySummary};

/// Fetch the contributor list and every contributor's total, then merge.
///
/// Totals are requested concurrently; the first failure aborts the whole
/// aggregation so callers never see a partially merged list.
#[tracing::instrument(skip(source))]
pub async fn aggregate_contributors(
    source: &dyn ContributorSource,
) -> Result<Vec<Contributor>, FetchError> {
    let records = source.list_contributors().await?;

    let totals =
        try_join_all(records.iter().map(|record| source.total_contribution(record.id))).await?;

    let contributors: Vec<Contributor> = records
        .into_iter()
        .zip(totals)
        .map(|(record, total)| Contributor::from_record(record, total))
        .collect();

    tracing::info!(count = contributors.len(), "aggregated contributors");
    Ok(contributors)
}

/// Contributors for display; any failure is logged and yields an empty list
pub async fn load_contributors(source: &dyn ContributorSource) -> Vec<Contributor> {
    aggregate_contributors(source).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load contributors");
        Vec::new()
    })
}

/// Repositories for a card preview; any failure is logged and yields an empty list
pub async fn load_repositories(
    source: &dyn RepositorySource,
    handle: &str,
) -> Vec<RepositorySummary> {
    source.list_repositories(handle).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, handle, "failed to load repositories");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{BackendClient, GitHubClient};
    use crate::model::ContributorRecord;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct FakeSource {
        records: Vec<ContributorRecord>,
        totals: HashMap<i64, u32>,
        total_calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(people: &[(i64, &str, u32)]) -> Self {
            Self {
                records: people
                    .iter()
                    .map(|(id, name, _)| ContributorRecord {
                        id: *id,
                        name: (*name).to_string(),
                        github_username: name.to_lowercase(),
                        avatar_url: format!("https://avatars.githubusercontent.com/{name}"),
                        specialite: "Developer".to_string(),
                    })
                    .collect(),
                totals: people.iter().map(|(id, _, total)| (*id, *total)).collect(),
                total_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContributorSource for FakeSource {
        async fn list_contributors(&self) -> Result<Vec<ContributorRecord>, FetchError> {
            Ok(self.records.clone())
        }

        async fn total_contribution(&self, id: i64) -> Result<u32, FetchError> {
            self.total_calls.fetch_add(1, Ordering::SeqCst);
            self.totals
                .get(&id)
                .copied()
                .ok_or(FetchError::RateLimited(60))
        }
    }

    #[tokio::test]
    async fn merges_totals_in_list_order() {
        let source = FakeSource::new(&[(1, "Alice", 10), (2, "Bob", 5), (3, "Claire", 0)]);

        let contributors = aggregate_contributors(&source).await.unwrap();

        assert_eq!(source.total_calls.load(Ordering::SeqCst), 3);
        let summary: Vec<(&str, u32)> = contributors
            .iter()
            .map(|c| (c.name.as_str(), c.contributions))
            .collect();
        assert_eq!(summary, vec![("Alice", 10), ("Bob", 5), ("Claire", 0)]);
        assert_eq!(contributors[1].github_username, "bob");
        assert_eq!(contributors[1].role, "Developer");
    }

    #[tokio::test]
    async fn empty_list_needs_no_follow_ups() {
        let source = FakeSource::new(&[]);

        let contributors = load_contributors(&source).await;

        assert!(contributors.is_empty());
        assert_eq!(source.total_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn one_failed_total_empties_the_collection() {
        let mut source = FakeSource::new(&[(1, "Alice", 10), (2, "Bob", 5)]);
        source.totals.remove(&2);

        assert!(aggregate_contributors(&source).await.is_err());
        assert!(load_contributors(&source).await.is_empty());
    }

    #[tokio::test]
    async fn failed_list_fetch_degrades_to_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/contributors/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let backend = BackendClient::new(reqwest::Client::new(), &mock_server.uri()).unwrap();

        assert!(load_contributors(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn aggregates_against_http_backend() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/contributors/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {
                        "id": 4,
                        "name": "Dana",
                        "github_username": "dana",
                        "avatar_url": "https://avatars.githubusercontent.com/dana",
                        "specialite": "Ops"
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/contributor/4/total_contribution/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "total_contribution": 12 })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let backend = BackendClient::new(reqwest::Client::new(), &mock_server.uri()).unwrap();
        let contributors = load_contributors(&backend).await;

        assert_eq!(contributors.len(), 1);
        assert_eq!(contributors[0].role, "Ops");
        assert_eq!(contributors[0].contributions, 12);
    }

    #[tokio::test]
    async fn failed_repository_fetch_degrades_to_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/ghost/repos"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let github = GitHubClient::new(reqwest::Client::new(), &mock_server.uri(), None).unwrap();

        assert!(load_repositories(&github, "ghost").await.is_empty());
    }
}
