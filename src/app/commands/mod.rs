//! Umkehrbare Kommandos des Stage-Editors.

mod delete_block;
mod place_block;
#[cfg(test)]
mod tests;

pub use delete_block::DeleteBlock;
pub use place_block::PlaceBlock;

use thiserror::Error;

use crate::app::state::{BlockId, EditorState};
use crate::core::RegionError;

/// Fehler aus Ausführung oder Lebenszyklus eines Kommandos.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// `execute` auf einem bereits ausgeführten Kommando.
    #[error("Kommando wurde bereits ausgeführt")]
    AlreadyExecuted,
    /// `undo` vor dem ersten `execute`.
    #[error("Kommando kann nicht zurückgenommen werden, bevor es ausgeführt wurde")]
    NotExecuted,
    /// Der Ziel-Block existiert nicht auf der Bühne.
    #[error("Block {0} existiert nicht auf der Bühne")]
    UnknownBlock(BlockId),
    /// Bereichsfehler aus dem Belegungsraster.
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Vertrag für ein umkehrbares Kommando über einem Zielzustand.
///
/// Die Reihenfolge der Aufrufe (`execute` vor `undo`, `release` terminal)
/// erzwingt der [`CommandSlot`]; Implementierungen liefern nur die Effekte.
pub trait ReversibleCommand {
    /// Der Zustand, den das Kommando mutiert.
    type Target;

    /// Führt den Effekt des Kommandos aus.
    fn execute(&mut self, target: &mut Self::Target) -> Result<(), CommandError>;

    /// Kehrt den Effekt des Kommandos um.
    fn undo(&mut self, target: &mut Self::Target) -> Result<(), CommandError>;

    /// Teilt dem Kommando mit, dass es nie wieder aufgerufen wird und seine
    /// Ressourcen freigeben kann.
    fn release(&mut self, _target: &mut Self::Target) {}

    /// Der nutzerseitige Anzeigename des Kommandos.
    fn screen_name(&self) -> &'static str {
        "Kommando"
    }
}

/// Hüllt ein Kommando und erzwingt die gültige Aufruf-Reihenfolge über
/// dessen Ausführungszustand.
#[derive(Debug)]
pub struct CommandSlot<C> {
    command: C,
    in_executed_state: bool,
}

impl<C: ReversibleCommand> CommandSlot<C> {
    /// Hüllt ein frisches, noch nicht ausgeführtes Kommando.
    pub fn new(command: C) -> Self {
        Self {
            command,
            in_executed_state: false,
        }
    }

    /// Führt das Kommando aus; Fehler, wenn es bereits ausgeführt ist.
    pub fn execute(&mut self, target: &mut C::Target) -> Result<(), CommandError> {
        if self.in_executed_state {
            return Err(CommandError::AlreadyExecuted);
        }
        self.command.execute(target)?;
        self.in_executed_state = true;
        Ok(())
    }

    /// Nimmt das Kommando zurück; Fehler, wenn es nicht ausgeführt ist.
    pub fn undo(&mut self, target: &mut C::Target) -> Result<(), CommandError> {
        if !self.in_executed_state {
            return Err(CommandError::NotExecuted);
        }
        self.command.undo(target)?;
        self.in_executed_state = false;
        Ok(())
    }

    /// Gibt die Ressourcen des Kommandos endgültig frei.
    ///
    /// Konsumiert den Slot: nach dem Release ist kein weiterer Aufruf möglich.
    pub fn release(mut self, target: &mut C::Target) {
        self.command.release(target);
    }

    /// Der Anzeigename des gehüllten Kommandos.
    pub fn screen_name(&self) -> &'static str {
        self.command.screen_name()
    }
}

/// Alle Kommando-Arten des Stage-Editors, explizit dispatcht.
#[derive(Debug)]
pub enum StageCommand {
    /// Inertes Bootstrap-Kommando beim Öffnen des Editors
    Initialize,
    /// Block auf der Bühne platzieren
    PlaceBlock(PlaceBlock),
    /// Block von der Bühne entfernen
    DeleteBlock(DeleteBlock),
}

impl StageCommand {
    /// Das Bootstrap-Kommando für eine frisch geöffnete Bühne.
    pub fn initialize() -> Self {
        Self::Initialize
    }
}

impl ReversibleCommand for StageCommand {
    type Target = EditorState;

    fn execute(&mut self, target: &mut EditorState) -> Result<(), CommandError> {
        match self {
            Self::Initialize => Ok(()),
            Self::PlaceBlock(command) => command.execute(target),
            Self::DeleteBlock(command) => command.execute(target),
        }
    }

    fn undo(&mut self, target: &mut EditorState) -> Result<(), CommandError> {
        match self {
            Self::Initialize => Ok(()),
            Self::PlaceBlock(command) => command.undo(target),
            Self::DeleteBlock(command) => command.undo(target),
        }
    }

    fn release(&mut self, target: &mut EditorState) {
        match self {
            Self::Initialize => {}
            Self::PlaceBlock(command) => command.release(target),
            Self::DeleteBlock(command) => command.release(target),
        }
    }

    fn screen_name(&self) -> &'static str {
        match self {
            Self::Initialize => "Neue Stage erstellt",
            Self::PlaceBlock(command) => command.screen_name(),
            Self::DeleteBlock(command) => command.screen_name(),
        }
    }
}
