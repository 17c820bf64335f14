//! Fence, gate and wall planning permission check
//!
//! Decides whether planning permission is needed to erect a fence, gate or
//! wall, from the site's regulatory category and a set of site conditions.
//!
//! ## Features
//!
//! - **Pure evaluator** - no I/O, no shared state, safe to call from anywhere
//! - **Strict request validation** for untyped JSON input
//! - **Text or JSON reports**, optionally explaining which conditions applied
//! - **Flexible configuration** via TOML files and environment variables
//!
//! ## Rule Model
//!
//! ```text
//! 2U… → always required
//! 2A… → required if any qualifying condition holds, otherwise not required
//! other → unknown category
//! ```
//!
//! ## Example Configuration
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//!
//! [output]
//! format = "json"
//! explain = true
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod request;
pub mod rules;
pub mod scenarios;
pub mod util;

// Re-export main types
pub use config::{AppConfig, load_config};
pub use error::{AppError, InputError, Result};
pub use report::EvaluationReport;
pub use request::EvaluationRequest;
pub use rules::{
    CategoryCode, CategoryFamily, Condition, ConditionSet, Outcome, PermissionEvaluator, evaluate,
};
