//! Evaluation requests from untyped input
//!
//! The evaluator takes statically typed arguments. Input arriving as JSON
//! (the `eval` command, or any embedding host) goes through
//! [`EvaluationRequest::from_value`] first, which enforces the type rules:
//!
//! - `category` must be a JSON string
//! - every other key must name a condition and carry a JSON boolean
//! - omitted conditions are `false`
//!
//! The category is checked before any condition, and all checks happen
//! before any rule is applied.
//!
//! ```json
//! { "category": "2A1", "is_highway_adjacent": true }
//! ```

use crate::error::InputError;
use crate::rules::{
    CategoryCode, Condition, ConditionSet, Evaluation, Outcome, PermissionEvaluator,
};
use crate::util::json_type_name;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Key holding the category code in a request document
pub const CATEGORY_KEY: &str = "category";

/// A validated evaluation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[schemars(extend("additionalProperties" = false))]
pub struct EvaluationRequest {
    /// Regulatory category code of the site, e.g. "2U1" or "2A3"
    pub category: CategoryCode,

    #[serde(flatten)]
    pub conditions: ConditionSet,
}

impl EvaluationRequest {
    pub fn new(category: impl Into<CategoryCode>, conditions: ConditionSet) -> Self {
        Self {
            category: category.into(),
            conditions,
        }
    }

    /// Parse and validate a request from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        let value: Value = serde_json::from_str(json).map_err(InputError::Malformed)?;
        Self::from_value(&value)
    }

    /// Validate a request from a JSON value
    pub fn from_value(value: &Value) -> Result<Self, InputError> {
        let Value::Object(fields) = value else {
            return Err(InputError::NotAnObject {
                found: json_type_name(value),
            });
        };

        let category = match fields.get(CATEGORY_KEY) {
            Some(Value::String(code)) => CategoryCode::new(code.as_str()),
            Some(other) => {
                debug!(found = json_type_name(other), "Rejected non-string category");
                return Err(InputError::InvalidCategoryType {
                    found: json_type_name(other),
                });
            }
            None => {
                debug!("Rejected request without category");
                return Err(InputError::InvalidCategoryType { found: "missing" });
            }
        };

        let mut conditions = ConditionSet::new();
        for (key, flag) in fields.iter().filter(|(key, _)| *key != CATEGORY_KEY) {
            let condition = Condition::try_parse(key)
                .ok_or_else(|| InputError::UnknownCondition(key.clone()))?;

            match flag {
                Value::Bool(set) => conditions.set(condition, *set),
                other => {
                    debug!(
                        condition = key.as_str(),
                        found = json_type_name(other),
                        "Rejected non-boolean condition"
                    );
                    return Err(InputError::invalid_condition(key, json_type_name(other)));
                }
            }
        }

        Ok(Self {
            category,
            conditions,
        })
    }

    pub fn evaluate(&self) -> Outcome {
        PermissionEvaluator.evaluate(self.category.as_str(), &self.conditions)
    }

    pub fn explain(&self) -> Evaluation {
        PermissionEvaluator.explain(self.category.as_str(), &self.conditions)
    }
}

/// JSON Schema describing the accepted request document
pub fn request_schema() -> schemars::Schema {
    schemars::schema_for!(EvaluationRequest)
}
