//! Stat aggregation
//!
//! Final stats are the base floor plus the sum of every selected part's delta.
//! Health is not accumulated: it is reset to the base constant on every
//! recomputation. Nothing is clamped here.

use serde::{Deserialize, Serialize};

use super::catalog::Catalogs;
use super::selection::Selection;
use super::types::StatDelta;

pub const BASE_STRENGTH: i32 = 5;
pub const BASE_SPEED: i32 = 5;
pub const BASE_DEFENSE: i32 = 5;
pub const BASE_HEALTH: i32 = 100;

/// Aggregated combat stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub speed: i32,
    pub defense: i32,
    pub health: i32,
}

impl Default for Stats {
    fn default() -> Self {
        Self::BASE
    }
}

impl Stats {
    pub const BASE: Stats = Stats {
        strength: BASE_STRENGTH,
        speed: BASE_SPEED,
        defense: BASE_DEFENSE,
        health: BASE_HEALTH,
    };

    pub const fn new(strength: i32, speed: i32, defense: i32, health: i32) -> Self {
        Self {
            strength,
            speed,
            defense,
            health,
        }
    }

    /// Base stats plus a set of deltas
    pub fn from_deltas<'a>(deltas: impl IntoIterator<Item = &'a StatDelta>) -> Self {
        deltas.into_iter().fold(Self::BASE, |acc, d| Self {
            strength: acc.strength + d.strength,
            speed: acc.speed + d.speed,
            defense: acc.defense + d.defense,
            health: BASE_HEALTH,
        })
    }
}

/// The six deltas a selection resolves to, in category order
pub fn selected_deltas(selection: &Selection, catalogs: &Catalogs) -> [StatDelta; 6] {
    [
        catalogs.body.delta(&selection.body),
        catalogs.eyes.delta(&selection.eyes),
        catalogs.mouth.delta(&selection.mouth),
        catalogs.arms.delta(&selection.arms),
        catalogs.legs.delta(&selection.legs),
        catalogs.accessory.delta(&selection.accessory),
    ]
}

/// Aggregate a selection into final stats. Unknown ids count as their
/// category default.
pub fn aggregate(selection: &Selection, catalogs: &Catalogs) -> Stats {
    Stats::from_deltas(selected_deltas(selection, catalogs).iter())
}

/// Width of a stat bar in percent (five percent per point, clamped)
pub fn stat_bar_percent(value: i32) -> u8 {
    value.saturating_mul(5).clamp(0, 100) as u8
}

/// Remaining health in percent of the maximum, clamped
pub fn health_bar_percent(current: i32, max: i32) -> u8 {
    if max <= 0 {
        return 0;
    }
    ((current.max(0) as i64 * 100) / max as i64).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::Category;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_creature_stats() {
        let catalogs = Catalogs::standard();
        let sel = Selection::default();
        let stats = aggregate(&sel, catalogs);

        let defaults = [
            catalogs.body.default_entry().unwrap().stats,
            catalogs.eyes.default_entry().unwrap().stats,
            catalogs.mouth.default_entry().unwrap().stats,
            catalogs.arms.default_entry().unwrap().stats,
            catalogs.legs.default_entry().unwrap().stats,
            catalogs.accessory.default_entry().unwrap().stats,
        ];
        let expected = Stats::new(
            5 + defaults.iter().map(|d| d.strength).sum::<i32>(),
            5 + defaults.iter().map(|d| d.speed).sum::<i32>(),
            5 + defaults.iter().map(|d| d.defense).sum::<i32>(),
            100,
        );
        assert_eq!(stats, expected);
        assert_eq!(stats, Stats::new(5, 5, 5, 100));
    }

    #[test]
    fn test_sum_of_deltas_for_random_selections() {
        let catalogs = Catalogs::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut sel = Selection::default();
        for _ in 0..200 {
            sel.randomize(catalogs, &mut rng);
            let deltas = selected_deltas(&sel, catalogs);
            let stats = aggregate(&sel, catalogs);
            assert_eq!(stats.strength, 5 + deltas.iter().map(|d| d.strength).sum::<i32>());
            assert_eq!(stats.speed, 5 + deltas.iter().map(|d| d.speed).sum::<i32>());
            assert_eq!(stats.defense, 5 + deltas.iter().map(|d| d.defense).sum::<i32>());
            assert_eq!(stats.health, 100);

            // Summation order is irrelevant
            let reversed = Stats::from_deltas(deltas.iter().rev());
            assert_eq!(reversed, stats);
        }
    }

    #[test]
    fn test_unknown_id_behaves_like_default() {
        let catalogs = Catalogs::standard();
        let mut base = Selection::default();
        base.set(Category::Body, "rock_6");
        base.set(Category::Eyes, "eye_laser");
        base.set(Category::Mouth, "mouth_fangs");
        base.set(Category::Arms, "arm_hulk");
        base.set(Category::Legs, "leg_jet");
        base.set(Category::Accessory, "crown");

        let defaults = Selection::default();
        for category in Category::ALL {
            let mut broken = base.clone();
            broken.set(category, "definitely_not_a_part");
            let mut substituted = base.clone();
            substituted.set(category, defaults.get(category).to_string());
            assert_eq!(
                aggregate(&broken, catalogs),
                aggregate(&substituted, catalogs),
                "unknown {} id did not fall back",
                category.display_name()
            );
        }
    }

    #[test]
    fn test_stats_can_go_negative() {
        let catalogs = Catalogs::standard();
        let mut sel = Selection::default();
        sel.set(Category::Body, "rock_10");
        sel.set(Category::Eyes, "eye_snail");
        sel.set(Category::Arms, "arm_hulk");
        sel.set(Category::Legs, "leg_none");
        sel.set(Category::Accessory, "shell");
        let stats = aggregate(&sel, catalogs);
        // 5 - 3 - 2 - 2 - 3 - 2
        assert_eq!(stats.speed, -7);
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn test_health_deltas_are_not_accumulated() {
        let catalogs = Catalogs::standard();
        let mut sel = Selection::default();
        sel.set(Category::Body, "arch_mech");
        sel.set(Category::Accessory, "shell");
        assert!(catalogs.accessory.delta("shell").health.is_some());
        assert_eq!(aggregate(&sel, catalogs).health, BASE_HEALTH);
    }

    #[test]
    fn test_bar_percentages_clamp() {
        assert_eq!(stat_bar_percent(10), 50);
        assert_eq!(stat_bar_percent(40), 100);
        assert_eq!(stat_bar_percent(-3), 0);
        assert_eq!(health_bar_percent(50, 100), 50);
        assert_eq!(health_bar_percent(-5, 100), 0);
        assert_eq!(health_bar_percent(10, 0), 0);
    }
}
