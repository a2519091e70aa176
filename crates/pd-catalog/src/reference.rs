//! Built-in reference catalogs.
//!
//! The stock component tables the design space is normally declared over.
//! Row order is part of the optimizer contract: choice parameters select by
//! position, so rows must never be reordered within a release.

use crate::store::{columns, Catalog, CatalogStore};
use pd_types::PdResult;

/// Panel material densities in kg/m^3.
const MATERIALS: [f64; 13] = [
    1600.0, // carbon fiber laminate
    1900.0, // glass fiber laminate
    1380.0, // aramid laminate
    2700.0, // aluminium 6061
    2810.0, // aluminium 7075
    1770.0, // magnesium AZ31
    4430.0, // titanium 6Al-4V
    7850.0, // chromoly steel
    8000.0, // stainless 304
    1040.0, // ABS
    950.0,  // polyethylene
    480.0,  // end-grain balsa
    96.0,   // PVC foam
];

/// (radius m, mass kg)
const TIRES: [(f64, f64); 7] = [
    (0.2286, 8.6),
    (0.2413, 9.6),
    (0.2540, 10.4),
    (0.2667, 11.3),
    (0.2794, 12.2),
    (0.3048, 14.1),
    (0.3302, 16.0),
];

/// (power W, length m, height m, torque N*m, mass kg)
const MOTORS: [(f64, f64, f64, f64, f64); 21] = [
    (40_000.0, 0.42, 0.30, 48.0, 48.0),
    (44_000.0, 0.43, 0.31, 56.0, 52.0),
    (48_000.0, 0.45, 0.31, 64.0, 55.0),
    (52_000.0, 0.46, 0.32, 72.0, 59.0),
    (56_000.0, 0.47, 0.33, 80.0, 63.0),
    (60_000.0, 0.48, 0.34, 88.0, 66.0),
    (64_000.0, 0.50, 0.35, 96.0, 70.0),
    (68_000.0, 0.51, 0.35, 104.0, 74.0),
    (72_000.0, 0.52, 0.36, 112.0, 78.0),
    (76_000.0, 0.53, 0.37, 120.0, 82.0),
    (80_000.0, 0.55, 0.38, 128.0, 86.0),
    (84_000.0, 0.56, 0.39, 136.0, 90.0),
    (88_000.0, 0.57, 0.40, 144.0, 95.0),
    (92_000.0, 0.58, 0.41, 152.0, 99.0),
    (96_000.0, 0.60, 0.42, 160.0, 104.0),
    (100_000.0, 0.61, 0.43, 168.0, 109.0),
    (104_000.0, 0.62, 0.44, 176.0, 114.0),
    (108_000.0, 0.64, 0.45, 184.0, 120.0),
    (112_000.0, 0.65, 0.46, 192.0, 126.0),
    (116_000.0, 0.66, 0.48, 200.0, 132.0),
    (120_000.0, 0.68, 0.50, 208.0, 138.0),
];

/// (rotor radius m, rotor density kg/m^3, pad length m, pad height m,
/// pad width m, rotor thickness m)
const BRAKES: [(f64, f64, f64, f64, f64, f64); 34] = [
    // grey cast iron rotors
    (0.090, 7200.0, 0.050, 0.028, 0.014, 0.006),
    (0.095, 7200.0, 0.052, 0.029, 0.014, 0.006),
    (0.100, 7200.0, 0.054, 0.030, 0.015, 0.007),
    (0.105, 7200.0, 0.056, 0.031, 0.015, 0.007),
    (0.110, 7200.0, 0.058, 0.032, 0.016, 0.008),
    (0.115, 7200.0, 0.060, 0.033, 0.016, 0.008),
    (0.120, 7200.0, 0.062, 0.034, 0.017, 0.009),
    (0.125, 7200.0, 0.064, 0.035, 0.017, 0.009),
    (0.130, 7200.0, 0.066, 0.036, 0.018, 0.010),
    (0.135, 7200.0, 0.068, 0.037, 0.018, 0.010),
    (0.140, 7200.0, 0.070, 0.038, 0.019, 0.011),
    (0.145, 7200.0, 0.072, 0.039, 0.019, 0.011),
    (0.150, 7200.0, 0.074, 0.040, 0.020, 0.012),
    // stainless rotors
    (0.090, 7850.0, 0.050, 0.028, 0.013, 0.005),
    (0.095, 7850.0, 0.052, 0.029, 0.013, 0.005),
    (0.100, 7850.0, 0.054, 0.030, 0.014, 0.006),
    (0.105, 7850.0, 0.056, 0.031, 0.014, 0.006),
    (0.110, 7850.0, 0.058, 0.032, 0.015, 0.007),
    (0.115, 7850.0, 0.060, 0.033, 0.015, 0.007),
    (0.120, 7850.0, 0.062, 0.034, 0.016, 0.008),
    (0.125, 7850.0, 0.064, 0.035, 0.016, 0.008),
    (0.130, 7850.0, 0.066, 0.036, 0.017, 0.009),
    (0.135, 7850.0, 0.068, 0.037, 0.017, 0.009),
    (0.140, 7850.0, 0.070, 0.038, 0.018, 0.010),
    // aluminium metal-matrix rotors
    (0.095, 2700.0, 0.052, 0.030, 0.016, 0.009),
    (0.105, 2700.0, 0.056, 0.032, 0.017, 0.010),
    (0.115, 2700.0, 0.060, 0.034, 0.018, 0.011),
    (0.125, 2700.0, 0.064, 0.036, 0.019, 0.012),
    (0.135, 2700.0, 0.068, 0.038, 0.020, 0.013),
    (0.145, 2700.0, 0.072, 0.040, 0.021, 0.014),
    // carbon-carbon rotors
    (0.100, 1780.0, 0.056, 0.034, 0.020, 0.020),
    (0.115, 1780.0, 0.060, 0.036, 0.021, 0.022),
    (0.130, 1780.0, 0.066, 0.038, 0.022, 0.024),
    (0.145, 1780.0, 0.072, 0.040, 0.023, 0.026),
];

/// (stiffness_rear N/m, damping_rear N*s/m, mass_rear kg,
/// stiffness_front N/m, damping_front N*s/m, mass_front kg)
const SUSPENSIONS: [(f64, f64, f64, f64, f64, f64); 5] = [
    (28_000.0, 1_600.0, 9.5, 26_000.0, 1_500.0, 9.0),
    (35_000.0, 2_000.0, 10.5, 32_000.0, 1_900.0, 10.0),
    (42_000.0, 2_400.0, 11.5, 39_000.0, 2_250.0, 11.0),
    (50_000.0, 2_900.0, 13.0, 46_000.0, 2_700.0, 12.5),
    (60_000.0, 3_500.0, 15.0, 55_000.0, 3_300.0, 14.0),
];

fn materials_catalog() -> PdResult<Catalog> {
    Catalog::new(
        "materials",
        vec![columns::DENSITY.to_string()],
        MATERIALS.iter().map(|&q| vec![q]).collect(),
    )
}

fn tires_catalog() -> PdResult<Catalog> {
    Catalog::new(
        "tires",
        vec![columns::RADIUS.to_string(), columns::MASS.to_string()],
        TIRES.iter().map(|&(r, m)| vec![r, m]).collect(),
    )
}

fn motors_catalog() -> PdResult<Catalog> {
    Catalog::new(
        "motors",
        vec![
            columns::POWER.to_string(),
            columns::LENGTH.to_string(),
            columns::HEIGHT.to_string(),
            columns::TORQUE.to_string(),
            columns::MASS.to_string(),
        ],
        MOTORS
            .iter()
            .map(|&(p, l, h, t, m)| vec![p, l, h, t, m])
            .collect(),
    )
}

fn brakes_catalog() -> PdResult<Catalog> {
    Catalog::new(
        "brakes",
        vec![
            columns::RADIUS.to_string(),
            columns::DENSITY.to_string(),
            columns::LENGTH.to_string(),
            columns::HEIGHT.to_string(),
            columns::WIDTH.to_string(),
            columns::THICKNESS.to_string(),
        ],
        BRAKES
            .iter()
            .map(|&(r, q, l, h, w, t)| vec![r, q, l, h, w, t])
            .collect(),
    )
}

fn suspensions_catalog() -> PdResult<Catalog> {
    Catalog::new(
        "suspensions",
        vec![
            columns::STIFFNESS_REAR.to_string(),
            columns::DAMPING_REAR.to_string(),
            columns::MASS_REAR.to_string(),
            columns::STIFFNESS_FRONT.to_string(),
            columns::DAMPING_FRONT.to_string(),
            columns::MASS_FRONT.to_string(),
        ],
        SUSPENSIONS
            .iter()
            .map(|&(kr, cr, mr, kf, cf, mf)| vec![kr, cr, mr, kf, cf, mf])
            .collect(),
    )
}

/// The stock catalog store shipped with the crate.
pub fn reference_store() -> PdResult<CatalogStore> {
    CatalogStore::new(
        materials_catalog()?,
        tires_catalog()?,
        motors_catalog()?,
        brakes_catalog()?,
        suspensions_catalog()?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogKind;

    #[test]
    fn reference_tables_have_the_expected_sizes() {
        let store = reference_store().unwrap();
        assert_eq!(store.size(CatalogKind::Materials), 13);
        assert_eq!(store.size(CatalogKind::Tires), 7);
        assert_eq!(store.size(CatalogKind::Motors), 21);
        assert_eq!(store.size(CatalogKind::Brakes), 34);
        assert_eq!(store.size(CatalogKind::Suspensions), 5);
    }

    #[test]
    fn material_three_is_aluminium() {
        let store = reference_store().unwrap();
        assert_eq!(store.material(3).unwrap().density, 2700.0);
    }

    #[test]
    fn resolution_is_exact_per_row() {
        let store = reference_store().unwrap();
        let tire = store.tire(5).unwrap();
        assert_eq!(tire.radius, 0.3048);
        assert_eq!(tire.mass, 14.1);

        let suspension = store.suspension(4).unwrap();
        assert_eq!(suspension.stiffness_rear, 60_000.0);
        assert_eq!(suspension.mass_front, 14.0);
    }
}
