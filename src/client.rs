//! Issues API client.
//!
//! This module provides the [`IssuesClient`] struct wrapping the six remote
//! operations the scenarios exercise: repository listing, issue creation,
//! fetch, partial update, lock and unlock.
//!
//! # Example
//!
//! ```no_run
//! use gh_issues_harness::{ClientConfig, IssuesClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .owner("octocat")
//!     .repo("hello-world")
//!     .token("ghp_example")
//!     .build()?;
//!
//! let client = IssuesClient::new(config)?;
//! let issue = client.create_issue("Test issue").await?;
//! println!("created issue #{}", issue.number);
//! # Ok(())
//! # }
//! ```

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{Issue, IssuePatch, LockReason, LockRequest, NewIssue, Repo};

/// Media type the API serves for its JSON representations.
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Client for a GitHub-style issues REST API.
///
/// All methods map one-to-one onto remote endpoints and validate the
/// response status before deserializing. Field-level assertions are the
/// scenarios' job, not the client's.
#[derive(Debug)]
pub struct IssuesClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl IssuesClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be used as a header value or
    /// the underlying HTTP client fails to initialize.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { config, http })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the owner's repositories.
    ///
    /// `GET /users/{owner}/repos`, expects 200.
    pub async fn list_repos(&self) -> Result<Vec<Repo>> {
        let url = self.config.repos_url();
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;

        Ok(response.json().await?)
    }

    /// Create a new issue with the given title.
    ///
    /// `POST /repos/{owner}/{repo}/issues`, expects 201. The response
    /// carries the issue number used to address all later operations.
    pub async fn create_issue(&self, title: &str) -> Result<Issue> {
        let url = self.config.issues_url();
        tracing::debug!("POST {}", url);

        let request = NewIssue {
            title: title.to_string(),
            owner: self.config.owner.clone(),
            repo: self.config.repo.clone(),
        };

        let response = self.http.post(url).json(&request).send().await?;
        let response = expect_status(response, StatusCode::CREATED).await?;

        Ok(response.json().await?)
    }

    /// Fetch a single issue by number.
    ///
    /// `GET /repos/{owner}/{repo}/issues/{number}`, expects 200.
    pub async fn get_issue(&self, number: u64) -> Result<Issue> {
        let url = self.config.issue_url(number);
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let response = expect_status(response, StatusCode::OK).await?;

        Ok(response.json().await?)
    }

    /// Replace the body text of an existing issue.
    ///
    /// `PATCH /repos/{owner}/{repo}/issues/{number}`, expects 200.
    pub async fn set_issue_body(&self, number: u64, body: &str) -> Result<()> {
        let url = self.config.issue_url(number);
        tracing::debug!("PATCH {}", url);

        let request = IssuePatch {
            body: body.to_string(),
        };

        let response = self.http.patch(url).json(&request).send().await?;
        expect_status(response, StatusCode::OK).await?;

        Ok(())
    }

    /// Lock an issue with the given reason code.
    ///
    /// `PUT /repos/{owner}/{repo}/issues/{number}/lock`, expects 204.
    pub async fn lock_issue(&self, number: u64, reason: LockReason) -> Result<()> {
        let url = self.config.lock_url(number);
        tracing::debug!("PUT {}", url);

        let request = LockRequest {
            lock_reason: reason,
        };

        let response = self.http.put(url).json(&request).send().await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;

        Ok(())
    }

    /// Unlock an issue. The request carries no body.
    ///
    /// `DELETE /repos/{owner}/{repo}/issues/{number}/lock`, expects 204.
    pub async fn unlock_issue(&self, number: u64) -> Result<()> {
        let url = self.config.lock_url(number);
        tracing::debug!("DELETE {}", url);

        let response = self.http.delete(url).send().await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;

        Ok(())
    }
}

/// Validate that a response carries the expected status code.
///
/// Any other status becomes [`Error::Remote`] with the (truncated) body
/// text as the message. The body is consumed only on the error path.
async fn expect_status(
    response: reqwest::Response,
    expected: StatusCode,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    tracing::warn!("unexpected status {} (expected {})", status, expected);
    let body = response.text().await.unwrap_or_default();
    Err(Error::remote(status.as_u16(), body))
}

/// Build the underlying HTTP client from the configuration.
///
/// The authorization and accept headers are installed as defaults so
/// every request carries them.
fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::try_from(format!("token {}", config.token))
        .map_err(|_| Error::config("access token is not a valid header value"))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

    let user_agent = HeaderValue::try_from(config.user_agent.as_str())
        .map_err(|_| Error::config("user agent is not a valid header value"))?;
    headers.insert(USER_AGENT, user_agent);

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .build()?;

    Ok(client)
}
