//! Application-Layer: Editor-Zustand, Kommandos und Historie.

pub mod commands;
pub mod history;
pub mod state;

pub use commands::{
    CommandError, CommandSlot, DeleteBlock, PlaceBlock, ReversibleCommand, StageCommand,
};
pub use history::{CommandHistory, CommandId, CommandsUpdatedListener, HistoryError};
pub use state::{BlockId, EditorState, PlacedBlock};
