//! Kommando-Historie über einem Navigations-Baum als Rückgrat.
//!
//! Der Baum speichert nur Kommando-IDs; die lebenden Kommandos liegen in
//! einem ID-indizierten Slot-Speicher. Die Historie kennt ausschließlich
//! den [`ReversibleCommand`]-Vertrag, nie die Bühne selbst.

use indexmap::IndexMap;
use thiserror::Error;

use crate::app::commands::{CommandError, CommandSlot, ReversibleCommand};
use crate::core::{Tree, TreeError};

/// Eindeutige ID eines Kommandos innerhalb der Historie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(u64);

/// Listener über verfügbare Undo/Redo-Schritte.
///
/// Wird synchron am Ende von `do_command`/`undo`/`redo` mit
/// `(can_undo, can_redo)` aufgerufen.
pub type CommandsUpdatedListener = Box<dyn FnMut(bool, bool)>;

/// Fehler aus der Kommando-Verwaltung.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Navigation im History-Baum schlug fehl.
    #[error(transparent)]
    Tree(#[from] TreeError),
    /// Ein Kommando meldete einen Fehler.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Verwaltet die Kommandos einer Editor-Session.
///
/// Die Historie bleibt strikt linear: wer von einem inneren Punkt aus ein
/// neues Kommando ausführt, verwirft die dort vorhandene Redo-Zukunft.
pub struct CommandHistory<C: ReversibleCommand> {
    tree: Tree<CommandId>,
    slots: IndexMap<CommandId, CommandSlot<C>>,
    next_id: u64,
    listeners: Vec<CommandsUpdatedListener>,
}

impl<C: ReversibleCommand> CommandHistory<C> {
    /// Erstellt die Historie mit einem inerten Bootstrap-Kommando als
    /// permanenter Wurzel. Das Kommando wird sofort ausgeführt und ist
    /// weder zurücknehm- noch verwerfbar.
    pub fn new(bootstrap: C, target: &mut C::Target) -> Result<Self, HistoryError> {
        let root_id = CommandId(0);
        let mut slot = CommandSlot::new(bootstrap);
        slot.execute(target)?;

        let mut slots = IndexMap::new();
        slots.insert(root_id, slot);
        Ok(Self {
            tree: Tree::new(root_id),
            slots,
            next_id: 1,
            listeners: Vec::new(),
        })
    }

    /// Führt ein Kommando aus und hängt es als neues Blatt an die Historie.
    pub fn do_command(&mut self, command: C, target: &mut C::Target) -> Result<(), HistoryError> {
        // Verworfene Kommandos dürfen zuerst hinter sich aufräumen.
        for id in self.tree.values_below_location() {
            if let Some(slot) = self.slots.shift_remove(&id) {
                slot.release(target);
            }
        }
        // Die zurückgenommenen Zweige explizit aus dem Baum entfernen.
        while self.tree.child_count() > 0 {
            let first = *self.tree.children()[0];
            self.tree.remove_child_branch(&first)?;
        }

        // Kommando ausführen und den Cursor auf das neue Blatt stellen.
        let id = self.allocate_id();
        let mut slot = CommandSlot::new(command);
        slot.execute(target)?;
        log::info!("Kommando ausgeführt: {}", slot.screen_name());
        self.slots.insert(id, slot);
        self.tree.add_children([id]);
        self.tree.step_in(0)?;

        self.notify_listeners(true, self.tree.child_count() > 0);
        Ok(())
    }

    /// Nimmt das jüngste Kommando zurück.
    pub fn undo(&mut self, target: &mut C::Target) -> Result<(), HistoryError> {
        // Wurzel-Check vor dem Kommando-Effekt: ein fehlgeschlagenes Undo
        // lässt den Zustand unangetastet.
        if self.tree.is_at_root() {
            return Err(TreeError::AlreadyAtRoot.into());
        }
        let id = *self.tree.current();
        self.slot_mut(id).undo(target)?;
        log::info!("Undo ausgeführt: {}", self.slot(id).screen_name());
        self.tree.step_out()?;

        let can_undo = !self.tree.is_at_root();
        self.notify_listeners(can_undo, true);
        Ok(())
    }

    /// Wiederholt das zuletzt zurückgenommene Kommando.
    pub fn redo(&mut self, target: &mut C::Target) -> Result<(), HistoryError> {
        // Lineare Historie: höchstens ein erhaltenes Kind.
        self.tree.step_in(0)?;
        let id = *self.tree.current();
        self.slot_mut(id).execute(target)?;
        log::info!("Redo ausgeführt: {}", self.slot(id).screen_name());

        self.notify_listeners(true, self.tree.child_count() > 0);
        Ok(())
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.tree.is_at_root()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.tree.child_count() > 0
    }

    /// Der Anzeigename des Kommandos am Cursor, z.B. für Statuszeilen.
    pub fn current_screen_name(&self) -> &'static str {
        self.slot(*self.tree.current()).screen_name()
    }

    /// Registriert einen Listener für Undo/Redo-Verfügbarkeit.
    pub fn on_commands_updated(&mut self, listener: impl FnMut(bool, bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn allocate_id(&mut self) -> CommandId {
        let id = CommandId(self.next_id);
        self.next_id += 1;
        id
    }

    fn notify_listeners(&mut self, can_undo: bool, can_redo: bool) {
        for listener in &mut self.listeners {
            listener(can_undo, can_redo);
        }
    }

    fn slot(&self, id: CommandId) -> &CommandSlot<C> {
        self.slots
            .get(&id)
            .expect("History-Invariante verletzt: Kommando-Slot fehlt")
    }

    fn slot_mut(&mut self, id: CommandId) -> &mut CommandSlot<C> {
        self.slots
            .get_mut(&id)
            .expect("History-Invariante verletzt: Kommando-Slot fehlt")
    }
}
