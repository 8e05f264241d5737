//! Integration test utilities and helpers.
//!
//! Provides a mock issues API server plus canned responses for each
//! endpoint the scenarios touch.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gh_issues_harness::{ClientConfig, IssuesClient};

/// Owner used throughout the mock tests.
pub const OWNER: &str = "AlejandroFonseca25";

/// Repository used throughout the mock tests.
pub const REPO: &str = "axios-api-testing-exercise";

/// Token the mock client authenticates with.
pub const TOKEN: &str = "test-token";

/// Issue number the canned creation response returns.
pub const ISSUE_NUMBER: u64 = 42;

/// Path of the repository listing endpoint.
pub fn repos_path() -> String {
    format!("/users/{}/repos", OWNER)
}

/// Path of the issue collection endpoint.
pub fn issues_path() -> String {
    format!("/repos/{}/{}/issues", OWNER, REPO)
}

/// Path of a single issue.
pub fn issue_path(number: u64) -> String {
    format!("/repos/{}/{}/issues/{}", OWNER, REPO, number)
}

/// Path of a single issue's lock sub-resource.
pub fn lock_path(number: u64) -> String {
    format!("/repos/{}/{}/issues/{}/lock", OWNER, REPO, number)
}

/// Build an issue response body.
pub fn issue_json(
    number: u64,
    title: &str,
    body: Option<&str>,
    locked: bool,
    lock_reason: Option<&str>,
) -> Value {
    json!({
        "number": number,
        "title": title,
        "body": body,
        "locked": locked,
        "active_lock_reason": lock_reason,
    })
}

/// Mock issues API server for integration tests.
pub struct MockIssuesServer {
    server: MockServer,
}

impl MockIssuesServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL of the mock server.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Reference to the inner MockServer for custom mocking.
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Build a client configured against this mock server.
    pub fn client(&self) -> IssuesClient {
        let config = ClientConfig::builder()
            .api_base(&self.url())
            .expect("valid mock URL")
            .owner(OWNER)
            .repo(REPO)
            .token(TOKEN)
            .build()
            .expect("valid config");
        IssuesClient::new(config).expect("client creation failed")
    }

    /// Mock the repository listing with the given repository names.
    pub async fn mock_list_repos(&self, names: &[&str]) {
        let body: Vec<Value> = names.iter().map(|name| json!({ "name": name })).collect();
        Mock::given(method("GET"))
            .and(path(repos_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful issue creation (HTTP 201, no body field).
    pub async fn mock_create_issue(&self, number: u64, title: &str) {
        Mock::given(method("POST"))
            .and(path(issues_path()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({
                    "number": number,
                    "title": title,
                })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a single issue fetch. With `times`, the mock expires after
    /// that many requests so later fetches can see a different state.
    pub async fn mock_get_issue(&self, number: u64, issue: Value, times: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path(issue_path(number)))
            .respond_with(ResponseTemplate::new(200).set_body_json(issue));
        let mock = match times {
            Some(n) => mock.up_to_n_times(n),
            None => mock,
        };
        mock.mount(&self.server).await;
    }

    /// Mock a successful issue patch (HTTP 200).
    pub async fn mock_patch_issue(&self, number: u64) {
        Mock::given(method("PATCH"))
            .and(path(issue_path(number)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(issue_json(number, "Test issue", None, false, None)),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a successful lock (HTTP 204, no content).
    pub async fn mock_lock_issue(&self, number: u64) {
        Mock::given(method("PUT"))
            .and(path(lock_path(number)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Mock a successful unlock (HTTP 204, no content).
    pub async fn mock_unlock_issue(&self, number: u64) {
        Mock::given(method("DELETE"))
            .and(path(lock_path(number)))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Mock an error response for an arbitrary method and path.
    pub async fn mock_error(&self, http_method: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mount the full happy-path sequence: repo listing, creation, patch,
    /// lock, unlock, and the three state-dependent fetches in order.
    pub async fn mock_happy_path(&self) {
        self.mock_list_repos(&["another-repo", REPO]).await;
        self.mock_create_issue(ISSUE_NUMBER, "Test issue").await;
        self.mock_patch_issue(ISSUE_NUMBER).await;
        self.mock_lock_issue(ISSUE_NUMBER).await;
        self.mock_unlock_issue(ISSUE_NUMBER).await;

        // One fetch per verification step; each mock expires after one
        // request so the next fetch observes the next state.
        self.mock_get_issue(
            ISSUE_NUMBER,
            issue_json(
                ISSUE_NUMBER,
                "Test issue",
                Some("This is a body for Test issue"),
                false,
                None,
            ),
            Some(1),
        )
        .await;
        self.mock_get_issue(
            ISSUE_NUMBER,
            issue_json(
                ISSUE_NUMBER,
                "Test issue",
                Some("This is a body for Test issue"),
                true,
                Some("resolved"),
            ),
            Some(1),
        )
        .await;
        self.mock_get_issue(
            ISSUE_NUMBER,
            issue_json(
                ISSUE_NUMBER,
                "Test issue",
                Some("This is a body for Test issue"),
                false,
                None,
            ),
            Some(1),
        )
        .await;
    }
}
