//! # gh-issues-harness
//!
//! A sequential scenario harness for a GitHub-style issues REST API.
//!
//! The harness runs five ordered scenarios against a remote repository:
//! verify the repository exists, create an issue, patch a body onto it,
//! lock it, and unlock it. The issue number produced by the creation step
//! is threaded through the later steps via an explicit [`RunContext`], so
//! the sequence is strictly ordered and single-threaded by construction.
//!
//! ## Quick start
//!
//! ```no_run
//! use gh_issues_harness::{ClientConfig, IssuesClient, ScenarioRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ACCESS_TOKEN (and optional overrides) from the environment
//!     // or a .env file.
//!     let config = ClientConfig::from_env()?;
//!     let client = IssuesClient::new(config)?;
//!
//!     let report = ScenarioRunner::with_default_scenarios()
//!         .run(&client)
//!         .await;
//!     println!("{}", report);
//!
//!     if !report.all_passed() {
//!         std::process::exit(1);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! Every failure falls into one of three buckets: [`Error::Transport`]
//! (the call never completed), [`Error::Remote`] (unexpected status code)
//! or [`Error::Assertion`] (response fields violate the contract). A
//! failed scenario is recorded in the [`RunReport`] and the runner moves
//! on; nothing is retried and no remote cleanup is performed.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod scenario;
pub mod types;

pub use client::IssuesClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use scenario::{
    default_scenarios, RunContext, RunReport, Scenario, ScenarioOutcome, ScenarioRunner,
};
pub use types::{Issue, LockReason, Repo};
