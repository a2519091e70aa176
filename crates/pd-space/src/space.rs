//! Optimizer-facing parameter declarations and linear constraints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pd_types::{Assignment, AssignmentError, PdResult};

/// A single parameter dimension exposed to the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    pub kind: ParameterKind,
}

/// How the optimizer may vary a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Continuous range [low, high] with exact static bounds.
    FixedRange { low: f64, high: f64 },
    /// Continuous range whose true limits depend on other parameters in the
    /// same trial. The declared box is the widest safe approximation;
    /// legality is carried by the linear constraints, where any exist.
    DependentRange { low: f64, high: f64 },
    /// Integer choice in 0..cardinality selecting a catalog row.
    Choice { cardinality: usize },
}

/// Linear inequality over named parameters: the weighted sum must be
/// strictly less than `bound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    pub coefficients: HashMap<String, f64>,
    pub bound: f64,
}

impl LinearConstraint {
    pub fn new(terms: &[(&str, f64)], bound: f64) -> Self {
        Self {
            coefficients: terms
                .iter()
                .map(|(name, coeff)| (name.to_string(), *coeff))
                .collect(),
            bound,
        }
    }

    /// Whether the assignment satisfies this constraint. Every named
    /// parameter must be present.
    pub fn satisfied_by(&self, assignment: &Assignment) -> PdResult<bool> {
        let mut total = 0.0;
        for (name, coeff) in &self.coefficients {
            total += coeff * assignment.float(name)?;
        }
        Ok(total < self.bound)
    }
}

/// The declared design space: ordered parameters plus the compensating
/// constraints. Built once at setup and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSpace {
    pub parameters: Vec<ParameterDef>,
    pub constraints: Vec<LinearConstraint>,
}

impl DesignSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fixed(mut self, name: impl Into<String>, low: f64, high: f64) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::FixedRange { low, high },
        });
        self
    }

    pub fn add_dependent(mut self, name: impl Into<String>, low: f64, high: f64) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::DependentRange { low, high },
        });
        self
    }

    pub fn add_choice(mut self, name: impl Into<String>, cardinality: usize) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::Choice { cardinality },
        });
        self
    }

    pub fn add_constraint(mut self, constraint: LinearConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDef> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Check an assignment against the declaration: every parameter present,
    /// fixed ranges inside their box, choices inside their cardinality.
    /// Dependent boxes are advisory and only checked for presence; their
    /// legality is the constraint set's business.
    pub fn validate(&self, assignment: &Assignment) -> PdResult<()> {
        for param in &self.parameters {
            match param.kind {
                ParameterKind::FixedRange { low, high } => {
                    let value = assignment.float(&param.name)?;
                    if value < low || value > high {
                        return Err(AssignmentError::OutOfBounds {
                            name: param.name.clone(),
                            value,
                            low,
                            high,
                        }
                        .into());
                    }
                }
                ParameterKind::DependentRange { .. } => {
                    assignment.float(&param.name)?;
                }
                ParameterKind::Choice { cardinality } => {
                    let value = assignment.index(&param.name)?;
                    if value < 0 || value as usize >= cardinality {
                        return Err(AssignmentError::ChoiceOutOfRange {
                            name: param.name.clone(),
                            value,
                            cardinality,
                        }
                        .into());
                    }
                }
            }
        }
        Ok(())
    }

    /// Indices of constraints the assignment does not satisfy. Reporting
    /// only; scoring never consults this.
    pub fn violated_constraints(&self, assignment: &Assignment) -> PdResult<Vec<usize>> {
        let mut violated = Vec::new();
        for (i, constraint) in self.constraints.iter().enumerate() {
            if !constraint.satisfied_by(assignment)? {
                violated.push(i);
            }
        }
        Ok(violated)
    }
}
