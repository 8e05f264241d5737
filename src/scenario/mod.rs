//! Sequential API scenario runner.
//!
//! A scenario is one named test case performing one or more remote calls
//! plus assertions. Scenarios are independent in code but causally chained
//! through the issue number the creation step writes into the
//! [`RunContext`]; the runner therefore executes them strictly in
//! declaration order, one at a time.
//!
//! A failed scenario is recorded and the runner moves on to the next one
//! (later scenarios may then fail secondarily with
//! [`Error::IssueNotCreated`](crate::Error::IssueNotCreated)). Nothing is
//! retried and no remote cleanup is attempted; a failed run leaves the
//! remote resource in whatever state the partial sequence produced.
//!
//! Per run, the issue walks through
//! `NoIssue -> Created -> BodySet -> Locked -> Unlocked`; the repository
//! existence check sits in front of that chain as a precondition.

mod steps;

pub use steps::{
    default_scenarios, AddIssueBody, CreateIssue, LockIssue, RepoExists, UnlockIssue,
    ISSUE_BODY, ISSUE_TITLE,
};

use async_trait::async_trait;

use crate::client::IssuesClient;
use crate::error::{Error, Result};

/// Mutable state threaded through a scenario run.
///
/// The only field is the issue number: undefined until the creation
/// scenario sets it, then read by every later scenario. Passing it
/// explicitly (rather than through module-level state) keeps each
/// scenario's input/output contract visible and lets independent runs
/// coexist.
#[derive(Debug, Default)]
pub struct RunContext {
    issue_number: Option<u64>,
}

impl RunContext {
    /// Create an empty context (no issue created yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the number of the created issue. Written exactly once per run.
    pub fn set_issue_number(&mut self, number: u64) {
        self.issue_number = Some(number);
    }

    /// The created issue's number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IssueNotCreated`] if the creation scenario has not
    /// run (or did not succeed).
    pub fn issue_number(&self) -> Result<u64> {
        self.issue_number.ok_or(Error::IssueNotCreated)
    }
}

/// One named, ordered test case against the remote API.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Human-readable scenario name used in the report.
    fn name(&self) -> &str;

    /// Execute the scenario's remote calls and assertions.
    async fn run(&self, client: &IssuesClient, ctx: &mut RunContext) -> Result<()>;
}

/// Outcome of a single scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Scenario name as declared.
    pub name: String,
    /// `Ok` on pass, the failing error otherwise.
    pub result: Result<()>,
}

impl ScenarioOutcome {
    /// Whether the scenario passed.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-run report: one outcome per declared scenario, in execution order.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Outcomes in declaration order.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// Whether every scenario passed.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    /// Number of failed scenarios.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "PASS  {}", outcome.name)?,
                Err(err) => writeln!(f, "FAIL  {}: {}", outcome.name, err)?,
            }
        }
        write!(
            f,
            "{} passed, {} failed",
            self.outcomes.len() - self.failed_count(),
            self.failed_count()
        )
    }
}

/// Executes a declared list of scenarios strictly in order.
pub struct ScenarioRunner {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl ScenarioRunner {
    /// Create a runner with no scenarios registered.
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// Create a runner preloaded with the canonical five-scenario sequence.
    pub fn with_default_scenarios() -> Self {
        Self {
            scenarios: default_scenarios(),
        }
    }

    /// Append a scenario. Execution order is registration order.
    pub fn register(mut self, scenario: Box<dyn Scenario>) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Number of registered scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether no scenarios are registered.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every registered scenario in order and collect the outcomes.
    ///
    /// Failures are recorded, never retried; the run always visits every
    /// scenario.
    pub async fn run(&self, client: &IssuesClient) -> RunReport {
        let mut ctx = RunContext::new();
        let mut report = RunReport::default();

        for scenario in &self.scenarios {
            let name = scenario.name();
            tracing::info!(scenario = name, "running");

            let result = scenario.run(client, &mut ctx).await;
            match &result {
                Ok(()) => tracing::info!(scenario = name, "passed"),
                Err(err) => tracing::error!(scenario = name, error = %err, "failed"),
            }

            report.outcomes.push(ScenarioOutcome {
                name: name.to_string(),
                result,
            });
        }

        report
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
