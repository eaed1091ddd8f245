use rand::Rng;
use tracing::debug;

use crate::error::SaveError;
use crate::parts::{aggregate, Catalogs, Category, Selection, Stats};

use super::{ComposedCreature, CreatureId, Roster};

/// Working state of the creature builder: the current selection and its
/// stats, recomputed on every change.
#[derive(Debug, Clone)]
pub struct Builder<'c> {
    catalogs: &'c Catalogs,
    selection: Selection,
    stats: Stats,
}

impl<'c> Builder<'c> {
    pub fn new(catalogs: &'c Catalogs) -> Self {
        let selection = Selection::defaults_from(catalogs);
        let stats = aggregate(&selection, catalogs);
        Self {
            catalogs,
            selection,
            stats,
        }
    }

    /// Start from an existing selection
    pub fn with_selection(catalogs: &'c Catalogs, selection: Selection) -> Self {
        let stats = aggregate(&selection, catalogs);
        Self {
            catalogs,
            selection,
            stats,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn set(&mut self, category: Category, id: impl Into<String>) {
        self.selection.set(category, id);
        self.recompute();
    }

    pub fn set_color(&mut self, id: impl Into<String>) {
        self.selection.color = id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.selection.name = name.into();
    }

    /// Randomize every part and the colour, keeping the name
    pub fn randomize<G: Rng + ?Sized>(&mut self, rng: &mut G) {
        self.selection.randomize(self.catalogs, rng);
        self.recompute();
    }

    /// The current selection as an unsaved creature
    pub fn preview(&self) -> ComposedCreature {
        ComposedCreature::compose(CreatureId::PREVIEW, &self.selection, self.catalogs)
    }

    /// Save into the roster and start over from the defaults. On error the
    /// selection is left untouched.
    pub fn save(&mut self, roster: &mut Roster) -> Result<CreatureId, SaveError> {
        let id = roster.save(&self.selection, self.catalogs)?;
        self.reset();
        Ok(id)
    }

    pub fn reset(&mut self) {
        self.selection = Selection::defaults_from(self.catalogs);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.stats = aggregate(&self.selection, self.catalogs);
        debug!(
            "builder stats: STR {} SPD {} DEF {}",
            self.stats.strength, self.stats.speed, self.stats.defense
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stats_follow_selection() {
        let mut b = Builder::new(Catalogs::standard());
        assert_eq!(b.stats(), Stats::BASE);
        b.set(Category::Arms, "arm_hulk");
        assert_eq!(b.stats(), Stats::new(10, 3, 6, 100));
        b.set(Category::Arms, "not_an_arm");
        assert_eq!(b.stats(), Stats::BASE);
    }

    #[test]
    fn test_save_rejects_blank_name() {
        let mut roster = Roster::new();
        let mut b = Builder::new(Catalogs::standard());
        b.set(Category::Accessory, "crown");
        b.set_name("   ");
        assert_eq!(b.save(&mut roster), Err(SaveError::EmptyName));
        assert!(roster.is_empty());
        // Nothing was reset
        assert_eq!(b.selection().accessory, "crown");
    }

    #[test]
    fn test_save_resets_builder() {
        let mut roster = Roster::new();
        let mut b = Builder::new(Catalogs::standard());
        b.randomize(&mut ChaCha8Rng::seed_from_u64(42));
        b.set_name("Zorp");
        let expected = b.stats();

        let id = b.save(&mut roster).unwrap();
        let saved = roster.get(id).unwrap();
        assert_eq!(saved.name, "Zorp");
        assert_eq!(saved.stats, expected);
        assert_eq!(b.selection(), &Selection::default());
        assert_eq!(b.stats(), Stats::BASE);
    }

    #[test]
    fn test_randomize_keeps_name() {
        let mut b = Builder::new(Catalogs::standard());
        b.set_name("Keeper");
        b.randomize(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(b.selection().name, "Keeper");
        assert_eq!(b.preview().id, CreatureId::PREVIEW);
    }
}
