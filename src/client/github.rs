use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use super::{base_url, check_rate_limit, RepositorySource};
use crate::error::FetchError;
use crate::model::RepositorySummary;

/// Unauthenticated (or token-authenticated) client for the GitHub REST API
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(
        client: reqwest::Client,
        base: &str,
        token: Option<String>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            base: base_url(base)?,
            token,
        })
    }

    fn repos_url(&self, handle: &str) -> Result<Url, FetchError> {
        let path = format!("users/{}/repos", urlencoding::encode(handle));
        Ok(self.base.join(&path)?)
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    #[tracing::instrument(skip(self))]
    async fn list_repositories(&self, handle: &str) -> Result<Vec<RepositorySummary>, FetchError> {
        let mut request = self
            .client
            .get(self.repos_url(handle)?)
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(ref token) = self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        check_rate_limit(&response)?;

        let repos: Vec<RepositorySummary> = response.error_for_status()?.json().await?;

        tracing::debug!(count = repos.len(), "fetched repositories");
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn requests_repositories_once_per_call() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!([
            {
                "id": 1,
                "name": "dotfiles",
                "html_url": "https://github.com/alice/dotfiles",
                "fork": false
            },
            {
                "id": 2,
                "name": "blog",
                "html_url": "https://github.com/alice/blog",
                "fork": true
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/users/alice/repos"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(reqwest::Client::new(), &mock_server.uri(), None).unwrap();
        let repos = client.list_repositories("alice").await.unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "dotfiles");
        assert_eq!(repos[1].html_url, "https://github.com/alice/blog");
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/bob/repos"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(
            reqwest::Client::new(),
            &mock_server.uri(),
            Some("secret".to_string()),
        )
        .unwrap();

        assert!(client.list_repositories("bob").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reports_rate_limiting() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/claire/repos"))
            .respond_with(ResponseTemplate::new(403).insert_header("x-ratelimit-reset", "0"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::new(reqwest::Client::new(), &mock_server.uri(), None).unwrap();
        let result = client.list_repositories("claire").await;

        assert!(matches!(result, Err(FetchError::RateLimited(0))));
    }

    #[test]
    fn encodes_handle_in_path() {
        let client =
            GitHubClient::new(reqwest::Client::new(), "https://api.github.com", None).unwrap();

        assert_eq!(
            client.repos_url("a b").unwrap().as_str(),
            "https://api.github.com/users/a%20b/repos"
        );
    }
}
