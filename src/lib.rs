//! Stage-Editor-Kern: Undo/Redo-Engine und Belegungsraster.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    BlockId, CommandError, CommandHistory, CommandId, CommandSlot, CommandsUpdatedListener,
    DeleteBlock, EditorState, HistoryError, PlaceBlock, PlacedBlock, ReversibleCommand,
    StageCommand,
};
pub use core::{
    Axis, BlockData, BlockSizeError, GridRange, GridRect, OrthoAngle, RegionError, StageState,
    Tree, TreeError,
};
pub use shared::EditorOptions;
