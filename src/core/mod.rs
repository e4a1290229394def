//! Kern-Datenstrukturen: Navigations-Baum, Belegungsraster, Block-Geometrie.

pub mod geometry;
pub mod stage;
pub mod tree;

pub use geometry::{BlockData, BlockSizeError, GridRect, OrthoAngle};
pub use stage::{Axis, GridRange, RegionError, StageState};
pub use tree::{Tree, TreeError};
