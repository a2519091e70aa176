//! Encodes a trial assignment into the fully resolved design.

use pd_catalog::CatalogStore;
use pd_types::{Assignment, CarDesign, PdResult, CHOICE_SLOTS, DEPENDENT_SLOTS, FIXED_SLOTS};

/// Scale from attenuator material density to its crush modulus.
pub const ATTENUATOR_MODULUS_SCALE: f64 = 1_000_000.0;

/// Stateless encoder over the immutable catalog store. Encoding the same
/// assignment twice yields bit-identical designs.
#[derive(Debug, Clone, Copy)]
pub struct DesignEncoder<'a> {
    store: &'a CatalogStore,
}

impl<'a> DesignEncoder<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Resolve an assignment into a design.
    ///
    /// Every required name is checked before any catalog lookup, so an
    /// incomplete trial fails with `MissingParameter` rather than after a
    /// partial resolution. Choice indices outside their catalog abort with
    /// `OutOfRangeIndex`; nothing is clamped. Dependent values are copied
    /// as-is; constraint legality is not re-checked here.
    pub fn encode(&self, assignment: &Assignment) -> PdResult<CarDesign> {
        for name in FIXED_SLOTS.iter().chain(&DEPENDENT_SLOTS) {
            assignment.float(name)?;
        }
        for name in CHOICE_SLOTS {
            assignment.index(name)?;
        }

        let materials = [
            assignment.index("mat_0")?,
            assignment.index("mat_1")?,
            assignment.index("mat_2")?,
            assignment.index("mat_3")?,
            assignment.index("mat_4")?,
        ];
        let qrw = self.store.material(materials[0])?.density;
        let qfw = self.store.material(materials[1])?.density;
        let qsw = self.store.material(materials[2])?.density;
        let qc = self.store.material(materials[3])?.density;
        let qia = self.store.material(materials[4])?.density;

        let rear_tire = assignment.index("rear_tire")?;
        let front_tire = assignment.index("front_tire")?;
        let engine = assignment.index("engine")?;
        let brakes = assignment.index("brakes")?;
        let suspension = assignment.index("suspension")?;

        let rear = self.store.tire(rear_tire)?;
        let front = self.store.tire(front_tire)?;
        let motor = self.store.motor(engine)?;
        let brake = self.store.brake(brakes)?;
        let susp = self.store.suspension(suspension)?;

        Ok(CarDesign {
            hrw: assignment.float("hrw")?,
            lrw: assignment.float("lrw")?,
            arw: assignment.float("arw")?,
            hfw: assignment.float("hfw")?,
            lfw: assignment.float("lfw")?,
            wfw: assignment.float("wfw")?,
            afw: assignment.float("afw")?,
            hsw: assignment.float("hsw")?,
            lsw: assignment.float("lsw")?,
            wsw: assignment.float("wsw")?,
            asw: assignment.float("asw")?,
            prt: assignment.float("Prt")?,
            pft: assignment.float("Pft")?,
            hc: assignment.float("hc")?,
            lc: assignment.float("lc")?,
            wc: assignment.float("wc")?,
            tc: assignment.float("tc")?,
            hia: assignment.float("hia")?,
            wia: assignment.float("wia")?,

            materials,
            rear_tire,
            front_tire,
            engine,
            brakes,
            suspension,

            qrw,
            qfw,
            qsw,
            qc,
            qia,
            eia: qia * ATTENUATOR_MODULUS_SCALE,

            rrt: rear.radius,
            mrt: rear.mass,
            rft: front.radius,
            mft: front.mass,

            engine_power: motor.power,
            engine_length: motor.length,
            engine_height: motor.height,
            engine_torque: motor.torque,
            engine_mass: motor.mass,

            rbrk: brake.radius,
            qbrk: brake.density,
            lbrk: brake.length,
            hbrk: brake.height,
            wbrk: brake.width,
            tbrk: brake.thickness,

            krsp: susp.stiffness_rear,
            crsp: susp.damping_rear,
            mrsp: susp.mass_rear,
            kfsp: susp.stiffness_front,
            cfsp: susp.damping_front,
            mfsp: susp.mass_front,

            wrw: assignment.float("wrw")?,
            yrw: assignment.float("yrw")?,
            yfw: assignment.float("yfw")?,
            ysw: assignment.float("ysw")?,
            ye: assignment.float("ye")?,
            yc: assignment.float("yc")?,
            lia: assignment.float("lia")?,
            yia: assignment.float("yia")?,
            yrsp: assignment.float("yrsp")?,
            yfsp: assignment.float("yfsp")?,
        })
    }
}
