//! Kommando: einen Block auf der Bühne platzieren.

use glam::Vec2;

use super::{CommandError, ReversibleCommand};
use crate::app::state::{BlockId, EditorState, PlacedBlock};
use crate::core::{BlockData, GridRect, OrthoAngle};

/// Platziert einen Block und blockiert dessen Rasterfläche.
#[derive(Debug)]
pub struct PlaceBlock {
    block_id: BlockId,
    data: BlockData,
    position: Vec2,
    rotation: OrthoAngle,
    rect: GridRect,
}

impl PlaceBlock {
    /// Erstellt ein Platzierungs-Kommando für die gegebene Position und
    /// Rotation; reserviert dabei die Block-ID im Editor-Zustand.
    pub fn new(
        data: BlockData,
        position: Vec2,
        rotation: OrthoAngle,
        state: &mut EditorState,
    ) -> Self {
        let rect = data.grid_rect(position, rotation.is_perpendicular());
        let block_id = state.allocate_block_id();
        Self {
            block_id,
            data,
            position,
            rotation,
            rect,
        }
    }

    /// Die ID des Blocks, den dieses Kommando erzeugt.
    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    /// Die Rasterfläche, die der Block belegt.
    pub fn rect(&self) -> GridRect {
        self.rect
    }
}

impl ReversibleCommand for PlaceBlock {
    type Target = EditorState;

    fn execute(&mut self, state: &mut EditorState) -> Result<(), CommandError> {
        let rect = self.rect;
        state
            .stage
            .fill_region(rect.x, rect.z, rect.length_x, rect.length_z)?;
        state.insert_block(
            self.block_id,
            PlacedBlock {
                data: self.data.clone(),
                position: self.position,
                rotation: self.rotation,
                rect,
            },
        );
        Ok(())
    }

    fn undo(&mut self, state: &mut EditorState) -> Result<(), CommandError> {
        let rect = self.rect;
        state
            .stage
            .free_region(rect.x, rect.z, rect.length_x, rect.length_z)?;
        state.remove_block(self.block_id);
        Ok(())
    }

    fn release(&mut self, _state: &mut EditorState) {
        log::debug!("Platzierungs-Kommando für Block {} freigegeben", self.block_id);
    }

    fn screen_name(&self) -> &'static str {
        "Block platziert"
    }
}
