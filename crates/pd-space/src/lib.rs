//! # pd-space
//!
//! Optimizer-facing declaration of the vehicle design space.
//!
//! Declares every parameter the optimizer may vary (continuous ranges,
//! catalog choices, dependent ranges with conservative boxes) and
//! synthesizes the linear inequality constraints that approximate the true
//! joint feasible region, since the optimizer cannot express pairwise
//! conditional bounds natively.

mod bounds;
mod builder;
mod space;

pub use bounds::FIXED_BOUNDS;
pub use builder::{build_design_space, MATERIAL_SLOTS};
pub use space::{DesignSpace, LinearConstraint, ParameterDef, ParameterKind};
