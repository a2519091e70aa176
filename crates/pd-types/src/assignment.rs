//! Per-trial parameter assignments handed back by the optimizer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{AssignmentError, PdResult};

/// A concrete value proposed for a single parameter.
///
/// Choice parameters carry the raw integer the optimizer produced, which may
/// be outside the legal catalog range and is validated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Index(i64),
    Float(f64),
}

impl ParameterValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Index(_) => "index",
            Self::Float(_) => "float",
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One trial's parameter assignment, keyed by declared parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    values: HashMap<String, ParameterValue>,
}

impl Assignment {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.values.insert(name.into(), value);
    }

    pub fn with_float(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), ParameterValue::Float(value));
        self
    }

    pub fn with_index(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.insert(name.into(), ParameterValue::Index(value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Continuous value for `name`, or an assignment error.
    pub fn float(&self, name: &str) -> PdResult<f64> {
        match self.values.get(name) {
            Some(ParameterValue::Float(v)) => Ok(*v),
            Some(other) => Err(AssignmentError::WrongKind {
                name: name.to_string(),
                expected: "float",
                found: other.kind_name(),
            }
            .into()),
            None => Err(AssignmentError::MissingParameter {
                name: name.to_string(),
            }
            .into()),
        }
    }

    /// Raw choice index for `name`, or an assignment error.
    pub fn index(&self, name: &str) -> PdResult<i64> {
        match self.values.get(name) {
            Some(ParameterValue::Index(v)) => Ok(*v),
            Some(other) => Err(AssignmentError::WrongKind {
                name: name.to_string(),
                expected: "index",
                found: other.kind_name(),
            }
            .into()),
            None => Err(AssignmentError::MissingParameter {
                name: name.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AssignmentError, PdError};

    #[test]
    fn accessors_return_typed_values() {
        let assignment = Assignment::new()
            .with_float("hrw", 0.06)
            .with_index("engine", 4);

        assert_eq!(assignment.float("hrw").unwrap(), 0.06);
        assert_eq!(assignment.index("engine").unwrap(), 4);
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let assignment = Assignment::new();
        match assignment.float("hrw") {
            Err(PdError::Assignment(AssignmentError::MissingParameter { name })) => {
                assert_eq!(name, "hrw");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn kind_mismatch_is_an_error() {
        let assignment = Assignment::new().with_index("hrw", 3);
        match assignment.float("hrw") {
            Err(PdError::Assignment(AssignmentError::WrongKind { expected, found, .. })) => {
                assert_eq!(expected, "float");
                assert_eq!(found, "index");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn values_round_trip_through_json() {
        let assignment = Assignment::new()
            .with_float("yrw", 0.85)
            .with_index("rear_tire", 2);

        let json = serde_json::to_string(&assignment).unwrap();
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assignment);
    }
}
