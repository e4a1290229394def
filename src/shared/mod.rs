//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{STAGE_X_END, STAGE_X_START, STAGE_Z_END, STAGE_Z_START};
