//! Zustand des Stage-Editors: Belegungsraster plus Registry der Blöcke.

use std::fmt;

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BlockData, GridRange, GridRect, OrthoAngle, StageState};
use crate::shared::EditorOptions;

/// Eindeutige ID eines platzierten Blocks innerhalb einer Editor-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ein aktuell auf der Bühne stehender Block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    /// Die Blockdaten
    pub data: BlockData,
    /// Weltposition des Pivots
    pub position: Vec2,
    /// Orthogonale Rotation des Blocks
    pub rotation: OrthoAngle,
    /// Die belegte Rasterfläche
    pub rect: GridRect,
}

/// Gesamtzustand, auf dem die Kommandos des Editors arbeiten.
#[derive(Debug)]
pub struct EditorState {
    /// Belegungsraster der Bühne
    pub stage: StageState,
    /// Platzierte Blöcke in Einfüge-Reihenfolge
    blocks: IndexMap<BlockId, PlacedBlock>,
    next_block_id: u64,
}

impl EditorState {
    /// Erstellt einen leeren Editor-Zustand für die gegebenen Bühnenmaße.
    pub fn new(x_range: GridRange, z_range: GridRange) -> Self {
        Self {
            stage: StageState::new(x_range, z_range),
            blocks: IndexMap::new(),
            next_block_id: 0,
        }
    }

    /// Erstellt den Zustand aus den konfigurierten Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self::new(options.stage_x_range, options.stage_z_range)
    }

    /// Reserviert die nächste Block-ID.
    pub fn allocate_block_id(&mut self) -> BlockId {
        self.next_block_id += 1;
        BlockId(self.next_block_id)
    }

    /// Der Block mit der gegebenen ID, falls er auf der Bühne steht.
    pub fn block(&self, id: BlockId) -> Option<&PlacedBlock> {
        self.blocks.get(&id)
    }

    /// Anzahl der Blöcke auf der Bühne.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Alle Blöcke in Einfüge-Reihenfolge.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &PlacedBlock)> {
        self.blocks.iter().map(|(id, block)| (*id, block))
    }

    pub(crate) fn insert_block(&mut self, id: BlockId, block: PlacedBlock) {
        self.blocks.insert(id, block);
    }

    pub(crate) fn remove_block(&mut self, id: BlockId) -> Option<PlacedBlock> {
        self.blocks.shift_remove(&id)
    }
}
