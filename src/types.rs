//! Wire types for the issues API.
//!
//! These models deserialize only the fields the scenarios assert on;
//! everything else in the responses is ignored.

use serde::{Deserialize, Serialize};

/// A repository entry from the user repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Repository name (without the owner prefix).
    pub name: String,
}

/// An issue as returned by the create and get endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Issue number, scoped to the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body. Freshly created issues have no body; the API reports
    /// this as an omitted or `null` field, never as an empty string.
    #[serde(default)]
    pub body: Option<String>,
    /// Whether the issue is locked.
    #[serde(default)]
    pub locked: bool,
    /// Lock reason, present only while the issue is locked.
    #[serde(default)]
    pub active_lock_reason: Option<String>,
}

/// Request body for issue creation.
///
/// The owner and repo are redundant with the request path but the API
/// accepts (and some clients send) them in the body as well.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    /// Title of the issue to create.
    pub title: String,
    /// Repository owner login.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

/// Request body for a partial issue update.
#[derive(Debug, Clone, Serialize)]
pub struct IssuePatch {
    /// New body text for the issue.
    pub body: String,
}

/// Request body for locking an issue.
#[derive(Debug, Clone, Serialize)]
pub struct LockRequest {
    /// Reason code recorded on the lock.
    pub lock_reason: LockReason,
}

/// Reason codes accepted by the lock endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockReason {
    /// The discussion drifted off topic.
    #[serde(rename = "off-topic")]
    OffTopic,
    /// The discussion got too heated.
    #[serde(rename = "too heated")]
    TooHeated,
    /// The issue was resolved.
    #[serde(rename = "resolved")]
    Resolved,
    /// The issue is spam.
    #[serde(rename = "spam")]
    Spam,
}

impl LockReason {
    /// The wire representation of this reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OffTopic => "off-topic",
            Self::TooHeated => "too heated",
            Self::Resolved => "resolved",
            Self::Spam => "spam",
        }
    }
}

impl std::fmt::Display for LockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
