//! Planning permission rules
//!
//! Decides whether erecting a fence, gate or wall needs planning permission.
//!
//! ## Rule Model
//!
//! Sites are classified by a category code. Two families of codes are
//! recognised, by literal prefix:
//!
//! 1. **Universal** (`2U…`) - permission is always required
//! 2. **Conditional** (`2A…`) - permission is required when at least one
//!    qualifying site condition holds
//!
//! Every other code yields [`Outcome::UnknownCategory`], which is a normal
//! result rather than an error.
//!
//! Eleven of the thirteen site conditions qualify. The two finer height
//! bands (`height_up_to_1m`, `height_above_1m_to_2m`) never trigger the
//! requirement on their own; only `height_above_2m` does.
//!
//! ## Example
//!
//! ```
//! use fence_permission::rules::{Condition, ConditionSet, Outcome, evaluate};
//!
//! assert_eq!(evaluate("2U1", &ConditionSet::default()), Outcome::Required);
//! assert_eq!(evaluate("2A3", &ConditionSet::default()), Outcome::NotRequired);
//!
//! let near_road = ConditionSet::new().with(Condition::HighwayAdjacent);
//! assert_eq!(evaluate("2A1", &near_road), Outcome::Required);
//! ```

pub mod evaluator;
pub mod types;

pub use evaluator::{Evaluation, PermissionEvaluator, evaluate, explain};
pub use types::{CategoryCode, CategoryFamily, Condition, ConditionSet, Outcome};
