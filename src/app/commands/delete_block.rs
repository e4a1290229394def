//! Kommando: einen bestehenden Block von der Bühne entfernen.

use super::{CommandError, ReversibleCommand};
use crate::app::state::{BlockId, EditorState, PlacedBlock};

/// Entfernt einen Block und gibt dessen Rasterfläche wieder frei.
#[derive(Debug)]
pub struct DeleteBlock {
    block_id: BlockId,
    captured: PlacedBlock,
}

impl DeleteBlock {
    /// Erstellt ein Lösch-Kommando für den Block mit der gegebenen ID.
    ///
    /// Der aktuelle Block-Zustand wird hier eingefangen, damit `undo` ihn
    /// unverändert wiederherstellen kann.
    pub fn new(block_id: BlockId, state: &EditorState) -> Result<Self, CommandError> {
        let captured = state
            .block(block_id)
            .cloned()
            .ok_or(CommandError::UnknownBlock(block_id))?;
        Ok(Self { block_id, captured })
    }

    /// Die ID des Blocks, den dieses Kommando entfernt.
    pub fn block_id(&self) -> BlockId {
        self.block_id
    }
}

impl ReversibleCommand for DeleteBlock {
    type Target = EditorState;

    fn execute(&mut self, state: &mut EditorState) -> Result<(), CommandError> {
        let rect = self.captured.rect;
        state
            .stage
            .free_region(rect.x, rect.z, rect.length_x, rect.length_z)?;
        state.remove_block(self.block_id);
        Ok(())
    }

    fn undo(&mut self, state: &mut EditorState) -> Result<(), CommandError> {
        let rect = self.captured.rect;
        state
            .stage
            .fill_region(rect.x, rect.z, rect.length_x, rect.length_z)?;
        state.insert_block(self.block_id, self.captured.clone());
        Ok(())
    }

    fn screen_name(&self) -> &'static str {
        "Block entfernt"
    }
}
