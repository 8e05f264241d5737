//! The canonical five-scenario sequence.
//!
//! Expected status codes across the sequence: 200, 201, 200, 204, 204.

use async_trait::async_trait;

use crate::client::IssuesClient;
use crate::error::{Error, Result};
use crate::types::LockReason;

use super::{RunContext, Scenario};

/// Title submitted by the creation scenario.
pub const ISSUE_TITLE: &str = "Test issue";

/// Body text submitted by the patch scenario.
pub const ISSUE_BODY: &str = "This is a body for Test issue";

/// The five scenarios in their required order.
pub fn default_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(RepoExists),
        Box::new(CreateIssue),
        Box::new(AddIssueBody),
        Box::new(LockIssue),
        Box::new(UnlockIssue),
    ]
}

fn check(cond: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::assertion(msg()))
    }
}

/// Scenario 1: the configured repository appears in the owner's listing.
///
/// The match is case-sensitive and exact.
pub struct RepoExists;

#[async_trait]
impl Scenario for RepoExists {
    fn name(&self) -> &str {
        "repository existence on user"
    }

    async fn run(&self, client: &IssuesClient, _ctx: &mut RunContext) -> Result<()> {
        let repos = client.list_repos().await?;
        let repo = &client.config().repo;
        check(repos.iter().any(|r| &r.name == repo), || {
            format!(
                "repository '{}' not found among {} listed repositories",
                repo,
                repos.len()
            )
        })
    }
}

/// Scenario 2: create the issue and record its number in the context.
///
/// The returned title must equal the submitted one and the returned body
/// must be absent (omitted or `null`, not an empty string).
pub struct CreateIssue;

#[async_trait]
impl Scenario for CreateIssue {
    fn name(&self) -> &str {
        "issue creation"
    }

    async fn run(&self, client: &IssuesClient, ctx: &mut RunContext) -> Result<()> {
        let issue = client.create_issue(ISSUE_TITLE).await?;

        check(issue.title == ISSUE_TITLE, || {
            format!(
                "created issue title '{}' does not match submitted '{}'",
                issue.title, ISSUE_TITLE
            )
        })?;
        check(issue.body.is_none(), || {
            format!(
                "created issue has unexpected body: {:?}",
                issue.body.as_deref()
            )
        })?;

        ctx.set_issue_number(issue.number);
        Ok(())
    }
}

/// Scenario 3: patch a body onto the issue, then re-fetch and verify the
/// title survived and the body round-tripped verbatim.
pub struct AddIssueBody;

#[async_trait]
impl Scenario for AddIssueBody {
    fn name(&self) -> &str {
        "body addition to existing issue"
    }

    async fn run(&self, client: &IssuesClient, ctx: &mut RunContext) -> Result<()> {
        let number = ctx.issue_number()?;
        client.set_issue_body(number, ISSUE_BODY).await?;

        let issue = client.get_issue(number).await?;
        check(issue.title == ISSUE_TITLE, || {
            format!("issue title changed to '{}' after patch", issue.title)
        })?;
        check(issue.body.as_deref() == Some(ISSUE_BODY), || {
            format!(
                "issue body {:?} does not match submitted '{}'",
                issue.body.as_deref(),
                ISSUE_BODY
            )
        })
    }
}

/// Scenario 4: lock the issue as resolved, then re-fetch and verify the
/// locked flag and reason code.
pub struct LockIssue;

#[async_trait]
impl Scenario for LockIssue {
    fn name(&self) -> &str {
        "lock issue"
    }

    async fn run(&self, client: &IssuesClient, ctx: &mut RunContext) -> Result<()> {
        let number = ctx.issue_number()?;
        let reason = LockReason::Resolved;
        client.lock_issue(number, reason).await?;

        let issue = client.get_issue(number).await?;
        check(issue.locked, || "issue is not locked after lock".to_string())?;
        check(
            issue.active_lock_reason.as_deref() == Some(reason.as_str()),
            || {
                format!(
                    "lock reason {:?} does not match '{}'",
                    issue.active_lock_reason.as_deref(),
                    reason
                )
            },
        )
    }
}

/// Scenario 5: unlock the issue, then re-fetch and verify it is unlocked.
pub struct UnlockIssue;

#[async_trait]
impl Scenario for UnlockIssue {
    fn name(&self) -> &str {
        "unlock issue"
    }

    async fn run(&self, client: &IssuesClient, ctx: &mut RunContext) -> Result<()> {
        let number = ctx.issue_number()?;
        client.unlock_issue(number).await?;

        let issue = client.get_issue(number).await?;
        check(!issue.locked, || {
            "issue is still locked after unlock".to_string()
        })
    }
}
