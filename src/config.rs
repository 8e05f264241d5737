//! Configuration types for the issues client.
//!
//! A [`ClientConfig`] holds the target resource coordinates (owner and
//! repository), the API base URL and the access token. It is immutable
//! once built; the scenario runner receives it by value inside the client
//! rather than reading the environment ad hoc.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "ACCESS_TOKEN";

/// Optional environment override for the API base URL.
pub const ENV_API_BASE: &str = "GITHUB_API_URL";

/// Optional environment override for the repository owner.
pub const ENV_OWNER: &str = "GITHUB_OWNER";

/// Optional environment override for the repository name.
pub const ENV_REPO: &str = "GITHUB_REPO";

/// Owner used when no environment override is present.
pub const DEFAULT_OWNER: &str = "AlejandroFonseca25";

/// Repository used when no environment override is present.
pub const DEFAULT_REPO: &str = "axios-api-testing-exercise";

/// Configuration for an [`IssuesClient`](crate::client::IssuesClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. `https://api.github.com`).
    pub api_base: Url,

    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Access token sent as `token <value>` in the Authorization header.
    pub token: String,

    /// Request timeout duration.
    pub timeout: Duration,

    /// User-Agent header value. The API rejects requests without one.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first, if present;
    /// variables already set in the environment take precedence. The access
    /// token (`ACCESS_TOKEN`) is required; base URL, owner and repository
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        // Best-effort, like dotenv.config(): a missing .env file is fine.
        let _ = dotenvy::dotenv();

        let token = std::env::var(ENV_ACCESS_TOKEN)
            .map_err(|_| Error::MissingEnv(ENV_ACCESS_TOKEN.to_string()))?;

        let mut builder = Self::builder().token(token);
        if let Ok(base) = std::env::var(ENV_API_BASE) {
            builder = builder.api_base(&base)?;
        }
        if let Ok(owner) = std::env::var(ENV_OWNER) {
            builder = builder.owner(owner);
        }
        if let Ok(repo) = std::env::var(ENV_REPO) {
            builder = builder.repo(repo);
        }
        builder.build()
    }

    /// URL for listing the owner's repositories.
    pub fn repos_url(&self) -> Url {
        self.url(&format!("/users/{}/repos", self.owner))
    }

    /// URL for the repository's issue collection.
    pub fn issues_url(&self) -> Url {
        self.url(&format!("/repos/{}/{}/issues", self.owner, self.repo))
    }

    /// URL for a single issue.
    pub fn issue_url(&self, number: u64) -> Url {
        self.url(&format!("/repos/{}/{}/issues/{}", self.owner, self.repo, number))
    }

    /// URL for a single issue's lock sub-resource.
    pub fn lock_url(&self, number: u64) -> Url {
        self.url(&format!(
            "/repos/{}/{}/issues/{}/lock",
            self.owner, self.repo, number
        ))
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.api_base.clone();
        url.set_path(path);
        url
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_base: Option<Url>,
    owner: Option<String>,
    repo: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn api_base(mut self, url: &str) -> Result<Self> {
        self.api_base = Some(Url::parse(url)?);
        Ok(self)
    }

    /// Set the repository owner login.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the repository name.
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Set the access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty.
    pub fn build(self) -> Result<ClientConfig> {
        let token = self
            .token
            .ok_or_else(|| Error::config("access token is required"))?;
        if token.is_empty() {
            return Err(Error::config("access token must not be empty"));
        }

        let api_base = match self.api_base {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_BASE)?,
        };

        Ok(ClientConfig {
            api_base,
            owner: self.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: self.repo.unwrap_or_else(|| DEFAULT_REPO.to_string()),
            token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| concat!("gh-issues-harness/", env!("CARGO_PKG_VERSION")).to_string()),
        })
    }
}
