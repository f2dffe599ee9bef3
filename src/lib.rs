//! Fixture Discovery
//!
//! A marker-driven test fixture discovery and suite composition engine.
//! Given already-loaded type declarations, it decides which types are
//! runnable fixtures and composes a hierarchical tree of test nodes from
//! them. Build failures never escape the facade boundary; they surface as
//! NotRunnable nodes carrying the failure text for reporters.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod output;
pub mod samples;
pub mod tree;

pub use discovery::{BuildsFixture, ParameterDataProvider, SuiteBuilder};
pub use error::{Error, Result};
pub use metadata::{ArgValue, DeclarationRegistry, TypeInfo};
pub use tree::{NodeKind, RunState, TestNode};
