//! Fixture-driven testing infrastructure for clause-risk.
//!
//! Test cases are defined declaratively in TOML fixture files: contract
//! text, reader role, and the findings the engine must produce. The harness
//! runs every fixture through the engine, checks expectations field by
//! field, and classifies failures against an expected-failures ledger so
//! known catalogue gaps never mask real regressions.
//!
//! ## Modules
//!
//! - [`fixture`] - fixture file format
//! - [`loader`] - fixture file loading
//! - [`runner`] - executes fixtures and collects mismatches
//! - [`formatter`] - human-readable failure reports
//! - [`failures`] - expected failures tracking via TOML
//! - [`errors`] - error types for the spec system

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{Expectation, SpecFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{run_fixture, FixtureOutcome, Mismatch};
