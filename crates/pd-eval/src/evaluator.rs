//! Trial scoring against the external vehicle simulation.

use serde::{Deserialize, Serialize};

use pd_catalog::CatalogStore;
use pd_types::{Assignment, CarDesign, EvaluationError, PdResult};

use crate::encoder::DesignEncoder;

/// The external simulation boundary. Implementations read the design's
/// vector and derived attributes and return the weighted sub-objectives;
/// the first entry is the overall score used for trial ranking.
pub trait VehicleModel: Send + Sync {
    fn objectives(&self, design: &CarDesign, weights: &[f64]) -> PdResult<Vec<f64>>;
}

/// Weights applied to the simulation sub-objectives on every trial: mass,
/// center-of-gravity height, drag, downforce, acceleration, crash force,
/// attenuator volume, corner velocity, braking distance, suspension
/// acceleration, pitch moment.
pub const DEFAULT_WEIGHTS: [f64; 11] = [
    0.25, 0.1, 0.1, 0.1, 0.1, 0.05, 0.05, 0.1, 0.05, 0.05, 0.05,
];

/// Result of scoring one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialScore {
    pub objective: f64,
    /// Reserved for an infeasibility penalty; always 0.0 for now. Trials
    /// that stray outside the linear constraints still score unpenalized.
    pub penalty: f64,
}

/// Scores trials by encoding the assignment and invoking the simulation
/// with a fixed weighting scheme.
pub struct Evaluator<'a, M> {
    encoder: DesignEncoder<'a>,
    model: M,
    weights: Vec<f64>,
}

impl<'a, M: VehicleModel> Evaluator<'a, M> {
    pub fn new(store: &'a CatalogStore, model: M) -> Self {
        Self {
            encoder: DesignEncoder::new(store),
            model,
            weights: DEFAULT_WEIGHTS.to_vec(),
        }
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Score one trial. Encoding errors abort the trial and surface to the
    /// caller as a failed trial; no partial objective is synthesized.
    pub fn evaluate(&self, assignment: &Assignment) -> PdResult<TrialScore> {
        let design = self.encoder.encode(assignment)?;
        let objectives = self.model.objectives(&design, &self.weights)?;
        let objective = objectives.first().copied().ok_or_else(|| {
            pd_types::PdError::from(EvaluationError::ModelFailed {
                message: "model returned no objectives".to_string(),
            })
        })?;

        tracing::debug!("trial scored: objective={objective}");
        Ok(TrialScore {
            objective,
            penalty: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_catalog::reference_store;
    use pd_types::{ParameterValue, PdError, CHOICE_SLOTS, DEPENDENT_SLOTS, FIXED_SLOTS};

    struct UnsprungMassModel;

    impl VehicleModel for UnsprungMassModel {
        fn objectives(&self, design: &CarDesign, weights: &[f64]) -> PdResult<Vec<f64>> {
            let mass = 2.0 * design.mrt + 2.0 * design.mft + design.mrsp + design.mfsp;
            Ok(vec![weights[0] * mass, mass])
        }
    }

    struct FailingModel;

    impl VehicleModel for FailingModel {
        fn objectives(&self, _design: &CarDesign, _weights: &[f64]) -> PdResult<Vec<f64>> {
            Err(EvaluationError::ModelFailed {
                message: "solver diverged".to_string(),
            }
            .into())
        }
    }

    fn full_assignment() -> Assignment {
        let mut assignment = Assignment::new();
        for name in FIXED_SLOTS.iter().chain(&DEPENDENT_SLOTS) {
            assignment.insert(*name, ParameterValue::Float(0.2));
        }
        for name in CHOICE_SLOTS {
            assignment.insert(name, ParameterValue::Index(1));
        }
        assignment
    }

    #[test]
    fn scores_with_the_default_weights_and_zero_penalty() {
        let store = reference_store().unwrap();
        let evaluator = Evaluator::new(&store, UnsprungMassModel);

        let score = evaluator.evaluate(&full_assignment()).unwrap();
        // Tire row 1 has mass 9.6; suspension row 1 has masses 10.5/10.0.
        let expected_mass = 2.0 * 9.6 + 2.0 * 9.6 + 10.5 + 10.0;
        assert_eq!(score.objective, 0.25 * expected_mass);
        assert_eq!(score.penalty, 0.0);
    }

    #[test]
    fn custom_weights_reach_the_model() {
        let store = reference_store().unwrap();
        let evaluator =
            Evaluator::new(&store, UnsprungMassModel).with_weights(vec![2.0]);

        let score = evaluator.evaluate(&full_assignment()).unwrap();
        let expected_mass = 2.0 * 9.6 + 2.0 * 9.6 + 10.5 + 10.0;
        assert_eq!(score.objective, 2.0 * expected_mass);
    }

    #[test]
    fn model_failure_surfaces_as_a_failed_trial() {
        let store = reference_store().unwrap();
        let evaluator = Evaluator::new(&store, FailingModel);

        match evaluator.evaluate(&full_assignment()) {
            Err(PdError::Evaluation(EvaluationError::ModelFailed { message })) => {
                assert_eq!(message, "solver diverged");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn invalid_assignment_never_produces_a_score() {
        let store = reference_store().unwrap();
        let evaluator = Evaluator::new(&store, UnsprungMassModel);

        let mut assignment = full_assignment();
        assignment.insert("suspension", ParameterValue::Index(5));
        assert!(evaluator.evaluate(&assignment).is_err());
    }
}
