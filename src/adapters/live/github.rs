//! Live adapter for the `RepositoryHost` port using the GitHub REST API.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::GenerationError;
use crate::ports::{PortFuture, RepositoryHost, RepositoryMetadata};
use crate::reference::RepositoryReference;

const SERVICE: &str = "GitHub";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches repository metadata from `{base}/{owner}/{repo}` without credentials.
pub struct LiveRepositoryHost {
    client: Client,
    base_url: String,
}

impl LiveRepositoryHost {
    /// Creates a host client from the loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self, String> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| format!("Failed to build GitHub HTTP client: {e}"))?;
        Ok(Self {
            client,
            base_url: settings.github_api_base.trim_end_matches('/').to_string(),
        })
    }
}

impl RepositoryHost for LiveRepositoryHost {
    fn fetch_metadata(
        &self,
        reference: &RepositoryReference,
    ) -> PortFuture<'_, RepositoryMetadata> {
        let url = format!("{}/{}/{}", self.base_url, reference.owner, reference.name);

        Box::pin(async move {
            debug!(%url, "fetching repository metadata");

            let response = self
                .client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await
                .map_err(|e| GenerationError::transport(SERVICE, &e))?;

            let status = response.status();
            if !status.is_success() {
                warn!(status = status.as_u16(), %url, "metadata request rejected");
                return Err(GenerationError::RepositoryNotFoundOrRateLimited {
                    status: status.as_u16(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| GenerationError::transport(SERVICE, &e))?;
            serde_json::from_str(&body)
                .map_err(|e| GenerationError::InvalidMetadataResponse(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn settings_for(server: &MockServer) -> Settings {
        Settings {
            github_api_base: format!("{}/repos", server.uri()),
            completion_url: format!("{}/chat", server.uri()),
            api_key: "sk-test".into(),
            model: "test/model".into(),
            referer: "https://example.test".into(),
            title: "Test".into(),
            timeout: Duration::from_secs(5),
        }
    }

    fn reference() -> RepositoryReference {
        RepositoryReference {
            owner: "octocat".into(),
            name: "Hello-World".into(),
        }
    }

    #[tokio::test]
    async fn decodes_successful_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Hello-World",
                "owner": {"login": "octocat", "html_url": "https://github.com/octocat"},
                "stargazers_count": 80,
                "forks_count": 9,
                "language": "C",
                "license": null,
                "description": "My first repository"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let host = LiveRepositoryHost::new(&settings_for(&server)).unwrap();
        let metadata = host.fetch_metadata(&reference()).await.unwrap();

        assert_eq!(metadata.name, "Hello-World");
        assert_eq!(metadata.stargazers_count, 80);
        assert_eq!(metadata.license, None);
    }

    #[tokio::test]
    async fn not_found_maps_to_combined_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&server)
            .await;

        let host = LiveRepositoryHost::new(&settings_for(&server)).unwrap();
        let err = host.fetch_metadata(&reference()).await.unwrap_err();

        assert_eq!(
            err,
            GenerationError::RepositoryNotFoundOrRateLimited { status: 404 }
        );
        assert_eq!(err.to_string(), "Repo not found or rate-limited.");
    }

    #[tokio::test]
    async fn rate_limit_maps_to_the_same_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let host = LiveRepositoryHost::new(&settings_for(&server)).unwrap();
        let err = host.fetch_metadata(&reference()).await.unwrap_err();

        assert_eq!(
            err,
            GenerationError::RepositoryNotFoundOrRateLimited { status: 403 }
        );
    }

    #[tokio::test]
    async fn undecodable_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let host = LiveRepositoryHost::new(&settings_for(&server)).unwrap();
        let err = host.fetch_metadata(&reference()).await.unwrap_err();

        assert!(matches!(err, GenerationError::InvalidMetadataResponse(_)));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let settings = Settings {
            timeout: Duration::from_millis(200),
            ..settings_for(&server)
        };
        let host = LiveRepositoryHost::new(&settings).unwrap();
        let err = host.fetch_metadata(&reference()).await.unwrap_err();

        assert_eq!(
            err,
            GenerationError::Transport {
                service: "GitHub".into(),
                reason: "timed out".into(),
            }
        );
    }
}
