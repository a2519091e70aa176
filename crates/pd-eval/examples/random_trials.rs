//! Samples random trials from the declared design space, reports how many
//! violate the compensating constraints, and scores the rest against a toy
//! curb-mass model.
//!
//! Run with: cargo run -p pd-eval --example random_trials

use anyhow::Result;
use rand::Rng;

use pd_catalog::reference_store;
use pd_eval::{Evaluator, VehicleModel};
use pd_space::{build_design_space, DesignSpace, ParameterKind};
use pd_types::{Assignment, CarDesign, ParameterValue, PdResult};

const TRIALS: usize = 200;

/// Rough curb mass from catalog components plus wing, attenuator and cabin
/// shell panels. Stands in for the real simulation.
struct CurbMassModel;

impl VehicleModel for CurbMassModel {
    fn objectives(&self, design: &CarDesign, weights: &[f64]) -> PdResult<Vec<f64>> {
        let panels = design.qrw * design.hrw * design.lrw * design.wrw
            + design.qfw * design.hfw * design.lfw * design.wfw
            + design.qsw * design.hsw * design.lsw * design.wsw
            + design.qia * design.hia * design.wia * design.lia
            + design.qc
                * design.tc
                * 2.0
                * (design.lc * design.wc + design.lc * design.hc + design.wc * design.hc);
        let components = design.engine_mass
            + 2.0 * design.mrt
            + 2.0 * design.mft
            + design.mrsp
            + design.mfsp;
        let mass = panels + components;
        let scale = weights.first().copied().unwrap_or(1.0);
        Ok(vec![scale * mass, mass])
    }
}

/// Draw one assignment uniformly from the declared boxes, the way an
/// optimizer without constraint support would.
fn sample(space: &DesignSpace) -> Assignment {
    let mut rng = rand::thread_rng();
    let mut assignment = Assignment::new();
    for param in &space.parameters {
        let value = match param.kind {
            ParameterKind::FixedRange { low, high }
            | ParameterKind::DependentRange { low, high } => {
                ParameterValue::Float(rng.gen_range(low..=high))
            }
            ParameterKind::Choice { cardinality } => {
                ParameterValue::Index(rng.gen_range(0..cardinality as i64))
            }
        };
        assignment.insert(param.name.clone(), value);
    }
    assignment
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = reference_store()?;
    let space = build_design_space(&store);
    let evaluator = Evaluator::new(&store, CurbMassModel);

    let mut feasible = 0usize;
    let mut best: Option<(f64, Assignment)> = None;

    for _ in 0..TRIALS {
        let assignment = sample(&space);
        space.validate(&assignment)?;

        let violated = space.violated_constraints(&assignment)?;
        if !violated.is_empty() {
            tracing::debug!("trial violates constraints {violated:?}");
            continue;
        }

        feasible += 1;
        let score = evaluator.evaluate(&assignment)?;
        if best.as_ref().map_or(true, |(b, _)| score.objective < *b) {
            best = Some((score.objective, assignment));
        }
    }

    println!("{feasible}/{TRIALS} sampled trials satisfied the constraints");
    if let Some((objective, assignment)) = best {
        println!("best weighted curb mass: {objective:.2}");
        println!(
            "  hrw = {:.3}  yrw = {:.3}  engine = {}  suspension = {}",
            assignment.float("hrw")?,
            assignment.float("yrw")?,
            assignment.index("engine")?,
            assignment.index("suspension")?,
        );
    }
    Ok(())
}
