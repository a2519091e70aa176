//! Declares the full vehicle design space and its compensating constraints.
//!
//! The optimizer only understands box bounds plus linear inequalities, so
//! dependent bounds are approximated in two tiers: positions paired with a
//! co-declared dimension get the widest safe box plus two exact linear
//! constraints; quantities bounded by catalog attributes get a box built
//! from the column extremes and no constraint, which means the optimizer
//! can still pair such a value with a catalog choice that does not admit it.

use pd_catalog::{CatalogKind, CatalogStore};

use crate::bounds::{FIXED_BOUNDS, HC_MIN, HFW_MIN, HIA_MIN, HRW_MIN, HSW_MIN, LFW_MIN};
use crate::space::{DesignSpace, LinearConstraint};

/// Material slots, one per structural subsystem: rear wing, front wing,
/// side wing, cabin, impact attenuator.
pub const MATERIAL_SLOTS: usize = 5;

/// Build the optimizer-facing space over the given catalogs.
pub fn build_design_space(store: &CatalogStore) -> DesignSpace {
    let mut space = DesignSpace::new();

    for (name, low, high) in FIXED_BOUNDS {
        space = space.add_fixed(name, low, high);
    }

    for slot in 0..MATERIAL_SLOTS {
        space = space.add_choice(format!("mat_{slot}"), store.size(CatalogKind::Materials));
    }
    space = space
        .add_choice("rear_tire", store.size(CatalogKind::Tires))
        .add_choice("front_tire", store.size(CatalogKind::Tires))
        .add_choice("engine", store.size(CatalogKind::Motors))
        .add_choice("brakes", store.size(CatalogKind::Brakes))
        .add_choice("suspension", store.size(CatalogKind::Suspensions));

    // Positions paired with a co-declared dimension. The box assumes the
    // smallest value the paired dimension can take; the exact relation is
    // carried by the constraints below.
    space = space
        .add_dependent("yrw", 0.5 + HRW_MIN / 2.0, 1.2 - HRW_MIN / 2.0)
        .add_dependent("yfw", 0.03 + HFW_MIN, 0.25 - HFW_MIN / 2.0)
        .add_dependent("ysw", 0.03 + HSW_MIN / 2.0, 0.25 - HSW_MIN / 2.0)
        .add_dependent("yc", 0.03 + HC_MIN / 2.0, 1.2 - HC_MIN / 2.0)
        .add_dependent("lia", 0.2, 0.7 - LFW_MIN)
        .add_dependent("yia", 0.03 + HIA_MIN / 2.0, 1.2 - HIA_MIN / 2.0);

    //      yrw > 0.5 + hrw/2   <=>   -1.0*yrw + 0.5*hrw < -0.5
    space = space.add_constraint(LinearConstraint::new(&[("yrw", -1.0), ("hrw", 0.5)], -0.5));
    //      yrw < 1.2 - hrw/2   <=>   1.0*yrw + 0.5*hrw < 1.2
    space = space.add_constraint(LinearConstraint::new(&[("yrw", 1.0), ("hrw", 0.5)], 1.2));

    //      yfw > 0.03 + hfw    <=>   -1.0*yfw + 1.0*hfw < -0.03
    space = space.add_constraint(LinearConstraint::new(&[("yfw", -1.0), ("hfw", 1.0)], -0.03));
    //      yfw < 0.25 - hfw/2  <=>   1.0*yfw + 0.5*hfw < 0.25
    space = space.add_constraint(LinearConstraint::new(&[("yfw", 1.0), ("hfw", 0.5)], 0.25));

    //      ysw > 0.03 + hsw/2  <=>   -1.0*ysw + 0.5*hsw < -0.03
    space = space.add_constraint(LinearConstraint::new(&[("ysw", -1.0), ("hsw", 0.5)], -0.03));
    //      ysw < 0.25 - hsw/2  <=>   1.0*ysw + 0.5*hsw < 0.25
    space = space.add_constraint(LinearConstraint::new(&[("ysw", 1.0), ("hsw", 0.5)], 0.25));

    //      yc > 0.03 + hc/2    <=>   -1.0*yc + 0.5*hc < -0.03
    space = space.add_constraint(LinearConstraint::new(&[("yc", -1.0), ("hc", 0.5)], -0.03));
    //      yc < 1.2 - hc/2     <=>   1.0*yc + 0.5*hc < 1.2
    space = space.add_constraint(LinearConstraint::new(&[("yc", 1.0), ("hc", 0.5)], 1.2));

    //      lia > 0.2           <=>   -1.0*lia < -0.2
    space = space.add_constraint(LinearConstraint::new(&[("lia", -1.0)], -0.2));
    //      lia < 0.7 - lfw     <=>   1.0*lia + 1.0*lfw < 0.7
    space = space.add_constraint(LinearConstraint::new(&[("lia", 1.0), ("lfw", 1.0)], 0.7));

    //      yia > 0.03 + hia/2  <=>   -1.0*yia + 0.5*hia < -0.03
    space = space.add_constraint(LinearConstraint::new(&[("yia", -1.0), ("hia", 0.5)], -0.03));
    //      yia < 1.2 - hia/2   <=>   1.0*yia + 0.5*hia < 1.2
    space = space.add_constraint(LinearConstraint::new(&[("yia", 1.0), ("hia", 0.5)], 1.2));

    // Quantities bounded by catalog attributes: use the widest values across
    // all rows, since the catalog choice is itself a trial parameter.
    let (rt_min, rt_max) = store.tire_radius_range();
    let he_min = store.motor_height_min();
    let space = space
        .add_dependent("wrw", 0.3, 9.0 - 2.0 * rt_min)
        .add_dependent("ye", 0.03 + he_min / 2.0, 0.5 - he_min / 2.0)
        .add_dependent("yrsp", rt_min, 2.0 * rt_max)
        .add_dependent("yfsp", rt_min, 2.0 * rt_max);

    tracing::debug!(
        "declared {} parameters and {} constraints",
        space.parameters.len(),
        space.constraints.len()
    );
    space
}
