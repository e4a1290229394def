//! Generische, hierarchisch navigierte Collection mit beweglichem Cursor.
//!
//! Die Branches liegen in einer Arena und referenzieren sich über stabile
//! Indizes; Eltern-Verweise dienen nur der Aufwärts-Navigation.

use thiserror::Error;


/// Fehler bei Navigation oder Mutation des Baums.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Kein Kind mit dem gesuchten Wert an der aktuellen Position.
    #[error("Kein passendes Kind an der aktuellen Position gefunden")]
    ChildNotFound,
    /// Der Kind-Index übersteigt die aktuelle Kind-Anzahl.
    #[error("Kind-Index {index} außerhalb des Bereichs (Kinder: {child_count})")]
    ChildIndexOutOfRange { index: usize, child_count: usize },
    /// `step_out` an der Wurzel.
    #[error("Cursor steht bereits an der Wurzel")]
    AlreadyAtRoot,
    /// `load_location` ohne vorheriges `save_location`.
    #[error("Es wurde keine Position gespeichert")]
    NothingSaved,
    /// Die gespeicherte Position wurde inzwischen aus dem Baum entfernt.
    #[error("Die gespeicherte Position wurde aus dem Baum entfernt")]
    SavedLocationRemoved,
}

/// Stabiler Arena-Index eines Branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BranchId(usize);

/// Zustand der Lesezeichen-Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SavedLocation {
    /// Kein Lesezeichen gesetzt
    None,
    /// Gültiges Lesezeichen auf einen lebenden Branch
    Saved(BranchId),
    /// Das Lesezeichen lag in einem entfernten Teilbaum
    Removed,
}

#[derive(Debug)]
struct Branch<T> {
    value: T,
    parent: Option<BranchId>,
    children: Vec<BranchId>,
}

/// Eine Collection von Elementen, die über ihre Hierarchie navigiert wird.
///
/// Der Cursor ("Location") zeigt immer auf einen lebenden Branch; alle
/// relativen Operationen arbeiten auf ihm. `endpoints` zählt die Blätter
/// des Baums und bleibt über jede Mutation hinweg konsistent.
#[derive(Debug)]
pub struct Tree<T> {
    slots: Vec<Option<Branch<T>>>,
    free: Vec<usize>,
    root: BranchId,
    location: BranchId,
    saved: SavedLocation,
    endpoints: usize,
}

impl<T> Tree<T> {
    /// Erstellt einen neuen Baum mit dem gegebenen Wurzel-Element.
    pub fn new(root_value: T) -> Self {
        let root = BranchId(0);
        Self {
            slots: vec![Some(Branch {
                value: root_value,
                parent: None,
                children: Vec::new(),
            })],
            free: Vec::new(),
            root,
            location: root,
            saved: SavedLocation::None,
            endpoints: 1,
        }
    }

    /// Das Element an der aktuellen Position.
    pub fn current(&self) -> &T {
        &self.branch(self.location).value
    }

    /// Das Element an der aktuellen Position, veränderbar.
    pub fn current_mut(&mut self) -> &mut T {
        let location = self.location;
        &mut self.branch_mut(location).value
    }

    /// Die Kind-Elemente der aktuellen Position in ihrer Reihenfolge.
    pub fn children(&self) -> Vec<&T> {
        self.branch(self.location)
            .children
            .iter()
            .map(|id| &self.branch(*id).value)
            .collect()
    }

    /// Anzahl der Kinder an der aktuellen Position.
    pub fn child_count(&self) -> usize {
        self.branch(self.location).children.len()
    }

    /// True, wenn der Cursor auf der Wurzel steht.
    pub fn is_at_root(&self) -> bool {
        self.location == self.root
    }

    /// Gesamtzahl der Blätter (Endpunkte) im Baum.
    pub fn endpoints(&self) -> usize {
        self.endpoints
    }

    /// Hängt neue Blatt-Branches in Aufruf-Reihenfolge unter den Cursor.
    pub fn add_children<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let had_children = !self.branch(self.location).children.is_empty();
        let mut added = 0usize;
        for value in values {
            let parent = self.location;
            let id = self.allocate(Branch {
                value,
                parent: Some(parent),
                children: Vec::new(),
            });
            self.branch_mut(parent).children.push(id);
            added += 1;
        }
        // Endpunkt-Buchführung: jedes neue Kind ist ein Blatt; der Cursor
        // verliert seinen Blatt-Status, sobald er erstmals Kinder erhält.
        self.endpoints += added;
        if !had_children && added > 0 {
            self.endpoints -= 1;
        }
    }

    /// Entfernt das Kind mit dem passenden Wert mitsamt seinem gesamten
    /// Teilbaum.
    ///
    /// Liegt das Lesezeichen im entfernten Teilbaum, wird es invalidiert,
    /// damit ein späteres `load_location` explizit fehlschlägt statt eine
    /// hängende Referenz wiederzubeleben.
    pub fn remove_child_branch(&mut self, value: &T) -> Result<(), TreeError>
    where
        T: PartialEq,
    {
        let (position, child_id) = self.find_child_by_value(value)?;
        let mut subtree = Vec::new();
        self.collect_subtree_postorder(child_id, &mut subtree);

        let mut removed_endpoints = 0;
        for id in subtree {
            if self.branch(id).children.is_empty() {
                removed_endpoints += 1;
            }
            if self.saved == SavedLocation::Saved(id) {
                self.saved = SavedLocation::Removed;
            }
            self.release(id);
        }

        self.branch_mut(self.location).children.remove(position);
        self.endpoints -= removed_endpoints;
        // Der Cursor wird selbst wieder zum Endpunkt, wenn sein letztes
        // Kind fällt; nur so bleibt der Zähler gleich der Blattzahl.
        if self.branch(self.location).children.is_empty() {
            self.endpoints += 1;
        }
        Ok(())
    }

    /// Alle Werte strikt unterhalb des Cursors in Postorder-Reihenfolge
    /// (Nachfahren vor dem eigenen Wert), als Snapshot.
    pub fn values_below_location(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        for &child in &self.branch(self.location).children {
            self.collect_postorder_values(child, &mut values);
        }
        values
    }

    /// Merkt sich die aktuelle Position für ein späteres `load_location`.
    pub fn save_location(&mut self) {
        self.saved = SavedLocation::Saved(self.location);
    }

    /// Springt zur zuvor gespeicherten Position zurück.
    ///
    /// Ein erfolgreicher Sprung verbraucht das Lesezeichen.
    pub fn load_location(&mut self) -> Result<(), TreeError> {
        match self.saved {
            SavedLocation::Removed => Err(TreeError::SavedLocationRemoved),
            SavedLocation::None => Err(TreeError::NothingSaved),
            SavedLocation::Saved(id) => {
                self.location = id;
                self.saved = SavedLocation::None;
                Ok(())
            }
        }
    }

    /// Bewegt den Cursor zum Eltern-Branch.
    pub fn step_out(&mut self) -> Result<(), TreeError> {
        match self.branch(self.location).parent {
            Some(parent) => {
                self.location = parent;
                Ok(())
            }
            None => Err(TreeError::AlreadyAtRoot),
        }
    }

    /// Bewegt den Cursor zum Kind am gegebenen Index.
    pub fn step_in(&mut self, index: usize) -> Result<(), TreeError> {
        let children = &self.branch(self.location).children;
        let child = children
            .get(index)
            .copied()
            .ok_or(TreeError::ChildIndexOutOfRange {
                index,
                child_count: children.len(),
            })?;
        self.location = child;
        Ok(())
    }

    /// Bewegt den Cursor zum ersten Kind mit dem passenden Wert.
    pub fn step_in_value(&mut self, value: &T) -> Result<(), TreeError>
    where
        T: PartialEq,
    {
        let (_, child_id) = self.find_child_by_value(value)?;
        self.location = child_id;
        Ok(())
    }

    // ── Arena-Verwaltung ────────────────────────────────────────────

    fn branch(&self, id: BranchId) -> &Branch<T> {
        self.slots[id.0]
            .as_ref()
            .expect("Arena-Invariante verletzt: BranchId zeigt auf freien Slot")
    }

    fn branch_mut(&mut self, id: BranchId) -> &mut Branch<T> {
        self.slots[id.0]
            .as_mut()
            .expect("Arena-Invariante verletzt: BranchId zeigt auf freien Slot")
    }

    fn allocate(&mut self, branch: Branch<T>) -> BranchId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(branch);
                BranchId(index)
            }
            None => {
                self.slots.push(Some(branch));
                BranchId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: BranchId) {
        self.slots[id.0] = None;
        self.free.push(id.0);
    }

    fn find_child_by_value(&self, value: &T) -> Result<(usize, BranchId), TreeError>
    where
        T: PartialEq,
    {
        for (position, id) in self.branch(self.location).children.iter().enumerate() {
            if self.branch(*id).value == *value {
                return Ok((position, *id));
            }
        }
        Err(TreeError::ChildNotFound)
    }

    fn collect_subtree_postorder(&self, id: BranchId, out: &mut Vec<BranchId>) {
        for &child in &self.branch(id).children {
            self.collect_subtree_postorder(child, out);
        }
        out.push(id);
    }

    fn collect_postorder_values(&self, id: BranchId, out: &mut Vec<T>)
    where
        T: Clone,
    {
        for &child in &self.branch(id).children {
            self.collect_postorder_values(child, out);
        }
        out.push(self.branch(id).value.clone());
    }
}
