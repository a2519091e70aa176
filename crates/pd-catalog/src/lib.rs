//! # pd-catalog
//!
//! Read-only component catalogs for Paddock: the five indexed tables a
//! design chooses from (materials, tires, motors, brakes, suspensions),
//! with CSV loading and a built-in reference data set.

pub mod loaders;
pub mod reference;
pub mod store;

pub use loaders::*;
pub use reference::*;
pub use store::*;
