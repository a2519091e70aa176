//! Immutable indexed tables for the five component families a design
//! chooses from.
//!
//! Column layout is resolved once when the store is built; every later
//! lookup goes through the precomputed indices, so a malformed table fails
//! at startup rather than mid-optimization.

use pd_types::{CatalogError, PdResult};

/// Required column names per catalog, validated at store construction.
pub mod columns {
    pub const DENSITY: &str = "density";
    pub const RADIUS: &str = "radius";
    pub const MASS: &str = "mass";
    pub const POWER: &str = "power";
    pub const LENGTH: &str = "length";
    pub const HEIGHT: &str = "height";
    pub const TORQUE: &str = "torque";
    pub const WIDTH: &str = "width";
    pub const THICKNESS: &str = "thickness";
    pub const STIFFNESS_REAR: &str = "stiffness_rear";
    pub const DAMPING_REAR: &str = "damping_rear";
    pub const MASS_REAR: &str = "mass_rear";
    pub const STIFFNESS_FRONT: &str = "stiffness_front";
    pub const DAMPING_FRONT: &str = "damping_front";
    pub const MASS_FRONT: &str = "mass_front";
}

/// The five component families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Materials,
    Tires,
    Motors,
    Brakes,
    Suspensions,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Materials,
        CatalogKind::Tires,
        CatalogKind::Motors,
        CatalogKind::Brakes,
        CatalogKind::Suspensions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CatalogKind::Materials => "materials",
            CatalogKind::Tires => "tires",
            CatalogKind::Motors => "motors",
            CatalogKind::Brakes => "brakes",
            CatalogKind::Suspensions => "suspensions",
        }
    }
}

/// A single indexed table of component options with named numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Catalog {
    /// Build a table, rejecting empty and non-rectangular data.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> PdResult<Self> {
        let name = name.into();
        if rows.is_empty() {
            return Err(CatalogError::EmptyCatalog { catalog: name }.into());
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CatalogError::RaggedRow {
                    catalog: name,
                    row: i,
                    found: row.len(),
                    expected: columns.len(),
                }
                .into());
            }
        }
        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Position of `column`, or `MissingColumn`.
    pub fn column_index(&self, column: &str) -> PdResult<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| {
                CatalogError::MissingColumn {
                    catalog: self.name.clone(),
                    column: column.to_string(),
                }
                .into()
            })
    }

    /// Row at `index`. Indices arrive as raw optimizer integers, so both
    /// negative values and one-past-the-end are rejected, never clamped.
    pub fn row(&self, index: i64) -> PdResult<&[f64]> {
        if index < 0 || index as usize >= self.rows.len() {
            return Err(CatalogError::OutOfRangeIndex {
                catalog: self.name.clone(),
                index,
                len: self.rows.len(),
            }
            .into());
        }
        Ok(&self.rows[index as usize])
    }

    pub fn value(&self, index: i64, column: &str) -> PdResult<f64> {
        let col = self.column_index(column)?;
        Ok(self.row(index)?[col])
    }
}

/// Resolved attributes for one material option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRow {
    pub density: f64,
}

/// Resolved attributes for one tire option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireRow {
    pub radius: f64,
    pub mass: f64,
}

/// Resolved attributes for one motor option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorRow {
    pub power: f64,
    pub length: f64,
    pub height: f64,
    pub torque: f64,
    pub mass: f64,
}

/// Resolved attributes for one brake option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrakeRow {
    pub radius: f64,
    pub density: f64,
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub thickness: f64,
}

/// Resolved attributes for one suspension option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspensionRow {
    pub stiffness_rear: f64,
    pub damping_rear: f64,
    pub mass_rear: f64,
    pub stiffness_front: f64,
    pub damping_front: f64,
    pub mass_front: f64,
}

#[derive(Debug, Clone)]
struct MaterialCols {
    density: usize,
}

#[derive(Debug, Clone)]
struct TireCols {
    radius: usize,
    mass: usize,
}

#[derive(Debug, Clone)]
struct MotorCols {
    power: usize,
    length: usize,
    height: usize,
    torque: usize,
    mass: usize,
}

#[derive(Debug, Clone)]
struct BrakeCols {
    radius: usize,
    density: usize,
    length: usize,
    height: usize,
    width: usize,
    thickness: usize,
}

#[derive(Debug, Clone)]
struct SuspensionCols {
    stiffness_rear: usize,
    damping_rear: usize,
    mass_rear: usize,
    stiffness_front: usize,
    damping_front: usize,
    mass_front: usize,
}

/// Immutable store holding the five catalogs for the process lifetime.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    materials: Catalog,
    tires: Catalog,
    motors: Catalog,
    brakes: Catalog,
    suspensions: Catalog,
    material_cols: MaterialCols,
    tire_cols: TireCols,
    motor_cols: MotorCols,
    brake_cols: BrakeCols,
    suspension_cols: SuspensionCols,
}

impl CatalogStore {
    /// Assemble the store, resolving every required column up front.
    pub fn new(
        materials: Catalog,
        tires: Catalog,
        motors: Catalog,
        brakes: Catalog,
        suspensions: Catalog,
    ) -> PdResult<Self> {
        let material_cols = MaterialCols {
            density: materials.column_index(columns::DENSITY)?,
        };
        let tire_cols = TireCols {
            radius: tires.column_index(columns::RADIUS)?,
            mass: tires.column_index(columns::MASS)?,
        };
        let motor_cols = MotorCols {
            power: motors.column_index(columns::POWER)?,
            length: motors.column_index(columns::LENGTH)?,
            height: motors.column_index(columns::HEIGHT)?,
            torque: motors.column_index(columns::TORQUE)?,
            mass: motors.column_index(columns::MASS)?,
        };
        let brake_cols = BrakeCols {
            radius: brakes.column_index(columns::RADIUS)?,
            density: brakes.column_index(columns::DENSITY)?,
            length: brakes.column_index(columns::LENGTH)?,
            height: brakes.column_index(columns::HEIGHT)?,
            width: brakes.column_index(columns::WIDTH)?,
            thickness: brakes.column_index(columns::THICKNESS)?,
        };
        let suspension_cols = SuspensionCols {
            stiffness_rear: suspensions.column_index(columns::STIFFNESS_REAR)?,
            damping_rear: suspensions.column_index(columns::DAMPING_REAR)?,
            mass_rear: suspensions.column_index(columns::MASS_REAR)?,
            stiffness_front: suspensions.column_index(columns::STIFFNESS_FRONT)?,
            damping_front: suspensions.column_index(columns::DAMPING_FRONT)?,
            mass_front: suspensions.column_index(columns::MASS_FRONT)?,
        };

        tracing::debug!(
            "catalog store ready: {} materials, {} tires, {} motors, {} brakes, {} suspensions",
            materials.len(),
            tires.len(),
            motors.len(),
            brakes.len(),
            suspensions.len()
        );

        Ok(Self {
            materials,
            tires,
            motors,
            brakes,
            suspensions,
            material_cols,
            tire_cols,
            motor_cols,
            brake_cols,
            suspension_cols,
        })
    }

    pub fn catalog(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Materials => &self.materials,
            CatalogKind::Tires => &self.tires,
            CatalogKind::Motors => &self.motors,
            CatalogKind::Brakes => &self.brakes,
            CatalogKind::Suspensions => &self.suspensions,
        }
    }

    /// Number of options in the given catalog.
    pub fn size(&self, kind: CatalogKind) -> usize {
        self.catalog(kind).len()
    }

    pub fn material(&self, index: i64) -> PdResult<MaterialRow> {
        let row = self.materials.row(index)?;
        Ok(MaterialRow {
            density: row[self.material_cols.density],
        })
    }

    pub fn tire(&self, index: i64) -> PdResult<TireRow> {
        let row = self.tires.row(index)?;
        Ok(TireRow {
            radius: row[self.tire_cols.radius],
            mass: row[self.tire_cols.mass],
        })
    }

    pub fn motor(&self, index: i64) -> PdResult<MotorRow> {
        let row = self.motors.row(index)?;
        Ok(MotorRow {
            power: row[self.motor_cols.power],
            length: row[self.motor_cols.length],
            height: row[self.motor_cols.height],
            torque: row[self.motor_cols.torque],
            mass: row[self.motor_cols.mass],
        })
    }

    pub fn brake(&self, index: i64) -> PdResult<BrakeRow> {
        let row = self.brakes.row(index)?;
        Ok(BrakeRow {
            radius: row[self.brake_cols.radius],
            density: row[self.brake_cols.density],
            length: row[self.brake_cols.length],
            height: row[self.brake_cols.height],
            width: row[self.brake_cols.width],
            thickness: row[self.brake_cols.thickness],
        })
    }

    pub fn suspension(&self, index: i64) -> PdResult<SuspensionRow> {
        let row = self.suspensions.row(index)?;
        Ok(SuspensionRow {
            stiffness_rear: row[self.suspension_cols.stiffness_rear],
            damping_rear: row[self.suspension_cols.damping_rear],
            mass_rear: row[self.suspension_cols.mass_rear],
            stiffness_front: row[self.suspension_cols.stiffness_front],
            damping_front: row[self.suspension_cols.damping_front],
            mass_front: row[self.suspension_cols.mass_front],
        })
    }

    /// Smallest and largest tire radius across all options.
    pub fn tire_radius_range(&self) -> (f64, f64) {
        let idx = self.tire_cols.radius;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in self.tires.rows() {
            lo = lo.min(row[idx]);
            hi = hi.max(row[idx]);
        }
        (lo, hi)
    }

    /// Smallest motor height across all options.
    pub fn motor_height_min(&self) -> f64 {
        let idx = self.motor_cols.height;
        self.motors
            .rows()
            .iter()
            .map(|row| row[idx])
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_types::{CatalogError, PdError};

    fn tire_catalog(rows: usize) -> Catalog {
        let data = (0..rows)
            .map(|i| vec![0.2 + 0.01 * i as f64, 8.0 + i as f64])
            .collect();
        Catalog::new(
            "tires",
            vec!["radius".to_string(), "mass".to_string()],
            data,
        )
        .unwrap()
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Catalog::new(
            "materials",
            vec!["density".to_string()],
            vec![vec![2700.0], vec![2700.0, 1.0]],
        );
        match result {
            Err(PdError::Catalog(CatalogError::RaggedRow { row, .. })) => assert_eq!(row, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_tables() {
        let result = Catalog::new("materials", vec!["density".to_string()], vec![]);
        assert!(matches!(
            result,
            Err(PdError::Catalog(CatalogError::EmptyCatalog { .. }))
        ));
    }

    #[test]
    fn seven_row_catalog_accepts_zero_through_six() {
        let catalog = tire_catalog(7);
        for i in 0..7 {
            assert!(catalog.row(i).is_ok());
        }
        assert!(matches!(
            catalog.row(-1),
            Err(PdError::Catalog(CatalogError::OutOfRangeIndex { index: -1, .. }))
        ));
        assert!(matches!(
            catalog.row(7),
            Err(PdError::Catalog(CatalogError::OutOfRangeIndex { index: 7, .. }))
        ));
    }

    #[test]
    fn value_reads_the_named_column() {
        let catalog = tire_catalog(3);
        assert_eq!(catalog.value(2, "radius").unwrap(), 0.22);
        assert_eq!(catalog.value(2, "mass").unwrap(), 10.0);
        assert!(matches!(
            catalog.value(0, "width"),
            Err(PdError::Catalog(CatalogError::MissingColumn { .. }))
        ));
    }

    #[test]
    fn store_validates_columns_at_construction() {
        let materials = Catalog::new(
            "materials",
            vec!["rho".to_string()], // wrong column name
            vec![vec![2700.0]],
        )
        .unwrap();
        let tires = tire_catalog(2);
        let motors = Catalog::new(
            "motors",
            vec![
                "power".to_string(),
                "length".to_string(),
                "height".to_string(),
                "torque".to_string(),
                "mass".to_string(),
            ],
            vec![vec![40_000.0, 0.5, 0.3, 60.0, 50.0]],
        )
        .unwrap();
        let brakes = Catalog::new(
            "brakes",
            vec![
                "radius".to_string(),
                "density".to_string(),
                "length".to_string(),
                "height".to_string(),
                "width".to_string(),
                "thickness".to_string(),
            ],
            vec![vec![0.1, 7200.0, 0.06, 0.03, 0.02, 0.008]],
        )
        .unwrap();
        let suspensions = Catalog::new(
            "suspensions",
            vec![
                "stiffness_rear".to_string(),
                "damping_rear".to_string(),
                "mass_rear".to_string(),
                "stiffness_front".to_string(),
                "damping_front".to_string(),
                "mass_front".to_string(),
            ],
            vec![vec![30_000.0, 2_000.0, 10.0, 28_000.0, 1_900.0, 9.5]],
        )
        .unwrap();

        let result = CatalogStore::new(materials, tires, motors, brakes, suspensions);
        match result {
            Err(PdError::Catalog(CatalogError::MissingColumn { catalog, column })) => {
                assert_eq!(catalog, "materials");
                assert_eq!(column, "density");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn column_aggregates_cover_all_rows() {
        let store = crate::reference::reference_store().unwrap();
        let (lo, hi) = store.tire_radius_range();
        assert!(lo > 0.0 && lo < hi);
        assert!(store.motor_height_min() > 0.0);
    }
}
