use tracing::info;

use crate::error::SaveError;
use crate::parts::{Catalogs, Selection};

use super::{ComposedCreature, CreatureId};

/// In-memory list of saved creatures, in save order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    creatures: Vec<ComposedCreature>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            creatures: Vec::new(),
            next_id: 1,
        }
    }

    fn new_id(&mut self) -> CreatureId {
        // A defaulted roster starts at zero, which is reserved for previews
        self.next_id = self.next_id.max(1);
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Compose and store a creature. Ids are never reused, even after deletes.
    pub fn save(&mut self, selection: &Selection, catalogs: &Catalogs) -> Result<CreatureId, SaveError> {
        if selection.bounded_name().is_empty() {
            return Err(SaveError::EmptyName);
        }
        let id = self.new_id();
        let creature = ComposedCreature::compose(id, selection, catalogs);
        info!("saved {} as {}", creature.name, id);
        self.creatures.push(creature);
        Ok(id)
    }

    /// Remove a creature, returning it if it was present
    pub fn delete(&mut self, id: CreatureId) -> Option<ComposedCreature> {
        let index = self.creatures.iter().position(|c| c.id == id)?;
        Some(self.creatures.remove(index))
    }

    pub fn get(&self, id: CreatureId) -> Option<&ComposedCreature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn list(&self) -> &[ComposedCreature] {
        &self.creatures
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComposedCreature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// A battle needs two distinct creatures
    pub fn can_battle(&self) -> bool {
        self.creatures.len() >= 2
    }
}
