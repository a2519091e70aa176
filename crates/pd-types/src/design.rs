//! The fully resolved vehicle design handed to the simulation model.
//!
//! The simulation consumes a positional vector: every slot holds the same
//! quantity on every trial, regardless of the order parameters were declared
//! in. The slot contract lives here, next to the design type, so the space
//! declaration and the encoder cannot drift apart.

use serde::{Deserialize, Serialize};

/// Number of entries in the simulation input vector.
pub const DESIGN_VECTOR_LEN: usize = 39;

/// Continuous parameters with fixed bounds, in vector-head order.
pub const FIXED_SLOTS: [&str; 19] = [
    "hrw", "lrw", "arw", "hfw", "lfw", "wfw", "afw", "hsw", "lsw", "wsw", "asw", "Prt", "Pft",
    "hc", "lc", "wc", "tc", "hia", "wia",
];

/// Catalog choice parameters, in vector order.
pub const CHOICE_SLOTS: [&str; 10] = [
    "mat_0",
    "mat_1",
    "mat_2",
    "mat_3",
    "mat_4",
    "rear_tire",
    "front_tire",
    "engine",
    "brakes",
    "suspension",
];

/// Continuous parameters with variable bounds, in vector-tail order.
/// This order differs from the order the space declares them in.
pub const DEPENDENT_SLOTS: [&str; 10] = [
    "wrw", "yrw", "yfw", "ysw", "ye", "yc", "lia", "yia", "yrsp", "yfsp",
];

/// A fully resolved racecar design: every assignment value plus the
/// attributes resolved from the component catalogs.
///
/// Only the raw choice indices enter the vector; the resolved attributes ride
/// along as named fields for the simulation model to read directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarDesign {
    // Wing, tire pressure, cabin and impact-attenuator dimensions, straight
    // from the assignment.
    pub hrw: f64,
    pub lrw: f64,
    pub arw: f64,
    pub hfw: f64,
    pub lfw: f64,
    pub wfw: f64,
    pub afw: f64,
    pub hsw: f64,
    pub lsw: f64,
    pub wsw: f64,
    pub asw: f64,
    pub prt: f64,
    pub pft: f64,
    pub hc: f64,
    pub lc: f64,
    pub wc: f64,
    pub tc: f64,
    pub hia: f64,
    pub wia: f64,

    // Raw catalog choices. Material slots cover, in order: rear wing, front
    // wing, side wing, cabin, impact attenuator.
    pub materials: [i64; 5],
    pub rear_tire: i64,
    pub front_tire: i64,
    pub engine: i64,
    pub brakes: i64,
    pub suspension: i64,

    // Subsystem material densities resolved from the materials catalog, same
    // order as `materials`.
    pub qrw: f64,
    pub qfw: f64,
    pub qsw: f64,
    pub qc: f64,
    pub qia: f64,
    /// Impact-attenuator crush modulus, derived from the attenuator
    /// material density.
    pub eia: f64,

    // Tire attributes.
    pub rrt: f64,
    pub mrt: f64,
    pub rft: f64,
    pub mft: f64,

    // Engine attributes.
    pub engine_power: f64,
    pub engine_length: f64,
    pub engine_height: f64,
    pub engine_torque: f64,
    pub engine_mass: f64,

    // Brake attributes.
    pub rbrk: f64,
    pub qbrk: f64,
    pub lbrk: f64,
    pub hbrk: f64,
    pub wbrk: f64,
    pub tbrk: f64,

    // Suspension attributes.
    pub krsp: f64,
    pub crsp: f64,
    pub mrsp: f64,
    pub kfsp: f64,
    pub cfsp: f64,
    pub mfsp: f64,

    // Positions and widths whose legal range depends on other parameters.
    pub wrw: f64,
    pub yrw: f64,
    pub yfw: f64,
    pub ysw: f64,
    pub ye: f64,
    pub yc: f64,
    pub lia: f64,
    pub yia: f64,
    pub yrsp: f64,
    pub yfsp: f64,
}

impl CarDesign {
    /// The positional vector the simulation model expects. Slot `i` always
    /// carries the quantity named by the slot tables above.
    pub fn to_vector(&self) -> [f64; DESIGN_VECTOR_LEN] {
        [
            self.hrw,
            self.lrw,
            self.arw,
            self.hfw,
            self.lfw,
            self.wfw,
            self.afw,
            self.hsw,
            self.lsw,
            self.wsw,
            self.asw,
            self.prt,
            self.pft,
            self.hc,
            self.lc,
            self.wc,
            self.tc,
            self.hia,
            self.wia,
            self.materials[0] as f64,
            self.materials[1] as f64,
            self.materials[2] as f64,
            self.materials[3] as f64,
            self.materials[4] as f64,
            self.rear_tire as f64,
            self.front_tire as f64,
            self.engine as f64,
            self.brakes as f64,
            self.suspension as f64,
            self.wrw,
            self.yrw,
            self.yfw,
            self.ysw,
            self.ye,
            self.yc,
            self.lia,
            self.yia,
            self.yrsp,
            self.yfsp,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slot_tables_cover_the_vector_without_duplicates() {
        let all: Vec<&str> = FIXED_SLOTS
            .iter()
            .chain(CHOICE_SLOTS.iter())
            .chain(DEPENDENT_SLOTS.iter())
            .copied()
            .collect();
        assert_eq!(all.len(), DESIGN_VECTOR_LEN);

        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), DESIGN_VECTOR_LEN);
    }

    #[test]
    fn vector_slots_follow_the_contract() {
        let design = CarDesign {
            hrw: 0.1,
            wia: 0.2,
            materials: [1, 2, 3, 4, 5],
            suspension: 4,
            wrw: 1.5,
            yfsp: 0.4,
            ..CarDesign::default()
        };

        let vector = design.to_vector();
        assert_eq!(vector.len(), DESIGN_VECTOR_LEN);
        assert_eq!(vector[0], 0.1); // hrw
        assert_eq!(vector[18], 0.2); // wia
        assert_eq!(vector[19], 1.0); // mat_0
        assert_eq!(vector[23], 5.0); // mat_4
        assert_eq!(vector[28], 4.0); // suspension
        assert_eq!(vector[29], 1.5); // wrw
        assert_eq!(vector[38], 0.4); // yfsp
    }
}
