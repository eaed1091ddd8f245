//! Composed creatures
//!
//! A composed creature is a self-contained snapshot: render payloads, colour
//! and stats are copied out of the catalogs when it is composed, so later
//! catalog changes never reach a saved creature.

mod builder;
mod roster;

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::parts::{
    aggregate, resolve_paint, Accessory, ArmStyle, BodyShape, Catalogs, EyeStyle, LegStyle,
    MouthStyle, Selection, Stats,
};
use crate::render::Color;

pub use builder::Builder;
pub use roster::Roster;

/// Unique identifier for a saved creature
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct CreatureId(pub u64);

impl CreatureId {
    /// Id carried by unsaved builder previews
    pub const PREVIEW: CreatureId = CreatureId(0);
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Creature#{}", self.0)
    }
}

/// One render payload per category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedParts {
    pub body: BodyShape,
    pub eyes: EyeStyle,
    pub mouth: MouthStyle,
    pub arms: ArmStyle,
    pub legs: LegStyle,
    pub accessory: Accessory,
}

impl ResolvedParts {
    pub fn from_selection(selection: &Selection, catalogs: &Catalogs) -> Self {
        Self {
            body: catalogs.body.payload(&selection.body),
            eyes: catalogs.eyes.payload(&selection.eyes),
            mouth: catalogs.mouth.payload(&selection.mouth),
            arms: catalogs.arms.payload(&selection.arms),
            legs: catalogs.legs.payload(&selection.legs),
            accessory: catalogs.accessory.payload(&selection.accessory),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedCreature {
    pub id: CreatureId,
    pub name: String,
    /// The selection with unknown ids already replaced by defaults
    pub selection: Selection,
    pub parts: ResolvedParts,
    pub color: Color,
    pub stats: Stats,
    pub saved_at: DateTime<Local>,
}

impl ComposedCreature {
    /// Snapshot a selection. The name is trimmed and bounded but not
    /// validated; the roster rejects empty names on save.
    pub fn compose(id: CreatureId, selection: &Selection, catalogs: &Catalogs) -> Self {
        let resolved = selection.resolved(catalogs);
        let paint = resolve_paint(&resolved.color);
        Self {
            id,
            name: selection.bounded_name(),
            parts: ResolvedParts::from_selection(&resolved, catalogs),
            color: Color::parse(paint.hex).unwrap_or(Color::INK),
            stats: aggregate(&resolved, catalogs),
            selection: Selection {
                name: selection.bounded_name(),
                ..resolved
            },
            saved_at: Local::now(),
        }
    }

    /// Headline used by listings: name and stat line
    pub fn summary(&self) -> String {
        format!(
            "{} [STR {} | SPD {} | DEF {} | HP {}]",
            self.name, self.stats.strength, self.stats.speed, self.stats.defense, self.stats.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{AccessoryKind, Category};

    #[test]
    fn test_compose_resolves_unknown_ids() {
        let catalogs = Catalogs::standard();
        let mut selection = Selection::default().with_name("  Gloop  ");
        selection.set(Category::Body, "no_such_body");
        selection.set(Category::Accessory, "crown");
        selection.color = "color_plaid".to_string();

        let c = ComposedCreature::compose(CreatureId(7), &selection, catalogs);
        assert_eq!(c.name, "Gloop");
        assert_eq!(c.selection.body, "basic_round");
        assert_eq!(c.selection.color, "color_red");
        assert_eq!(c.parts.body, BodyShape::Circle);
        assert_eq!(c.parts.accessory.kind, AccessoryKind::Crown);
        assert_eq!(c.color, Color::hex(0xFF4136));
        assert_eq!(c.stats, Stats::new(6, 6, 6, 100));
    }

    #[test]
    fn test_snapshot_is_independent_of_catalog() {
        let mut catalogs = Catalogs::build();
        let selection = Selection::default();
        let saved = ComposedCreature::compose(CreatureId(1), &selection, &catalogs);

        catalogs.body = crate::parts::Catalog::new(
            Category::Body,
            vec![crate::parts::PartDef::new(
                "basic_round",
                "Round",
                BodyShape::Nova,
                crate::parts::StatDelta::new(9, 9, 9),
            )],
        );
        assert_eq!(saved.parts.body, BodyShape::Circle);
        assert_eq!(saved.stats, Stats::BASE);
        let fresh = ComposedCreature::compose(CreatureId(2), &selection, &catalogs);
        assert_eq!(fresh.parts.body, BodyShape::Nova);
    }
}
