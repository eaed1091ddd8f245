//! Damage calculation for a single attack

use crate::parts::Stats;

use super::rolls::RollSource;
use super::BattleParams;

/// Breakdown of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub base: i32,
    /// Base after the variance roll
    pub varied: i32,
    /// Damage dealt, after defense, the floor of one and any crit
    pub damage: i32,
    pub critical: bool,
}

/// Chance in [0, 1] (or outside it, unless clamping is enabled) that an
/// attacker with this speed lands a critical hit
pub fn crit_chance(speed: i32, params: &BattleParams) -> f64 {
    let chance = speed as f64 / 100.0;
    if params.clamp_crit_chance {
        chance.clamp(0.0, 1.0)
    } else {
        chance
    }
}

/// Roll damage for `attacker` hitting `defender`. Draws exactly two rolls:
/// variance first, then the crit check.
pub fn calculate_damage<S: RollSource + ?Sized>(
    attacker: &Stats,
    defender: &Stats,
    params: &BattleParams,
    rolls: &mut S,
) -> DamageRoll {
    let base = attacker.strength.saturating_mul(params.strength_multiplier);

    let variance = params.variance_min + params.variance_span * rolls.roll();
    let varied = (base as f64 * variance).floor() as i32;

    let mitigated = varied.saturating_sub(defender.defense).max(1);

    let critical = rolls.roll() < crit_chance(attacker.speed, params);
    let damage = if critical {
        (mitigated as f64 * params.crit_multiplier).floor() as i32
    } else {
        mitigated
    };

    DamageRoll {
        base,
        varied,
        damage,
        critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rolls::ScriptedRolls;

    fn roll(attacker: Stats, defender: Stats, rolls: &[f64]) -> DamageRoll {
        calculate_damage(
            &attacker,
            &defender,
            &BattleParams::default(),
            &mut ScriptedRolls::new(rolls.iter().copied()),
        )
    }

    #[test]
    fn test_plain_hit() {
        // 5 * 2 = 10, variance 1.0, minus defense 5, no crit
        let hit = roll(Stats::BASE, Stats::BASE, &[0.5, 0.9]);
        assert_eq!(
            hit,
            DamageRoll {
                base: 10,
                varied: 10,
                damage: 5,
                critical: false
            }
        );
    }

    #[test]
    fn test_crit_multiplies_after_defense() {
        let attacker = Stats::new(10, 50, 5, 100);
        // 20 * ~1.196 = 23, minus 5 = 18, crit 27
        let hit = roll(attacker, Stats::BASE, &[0.99, 0.1]);
        assert_eq!(hit.varied, 23);
        assert!(hit.critical);
        assert_eq!(hit.damage, 27);
    }

    #[test]
    fn test_damage_floor_of_one() {
        let wall = Stats::new(5, 5, 40, 100);
        let hit = roll(Stats::BASE, wall, &[0.5, 0.9]);
        assert_eq!(hit.damage, 1);
        // A crit on the floor stays at one
        let weak = Stats::new(0, 100, 5, 100);
        let hit = roll(weak, wall, &[0.5, 0.0]);
        assert!(hit.critical);
        assert_eq!(hit.damage, 1);

        let striker = Stats::new(10, 0, 0, 100);
        let fortress = Stats::new(0, 0, 100, 100);
        for u in [0.0, 0.5, 0.999] {
            assert_eq!(roll(striker, fortress, &[u, 0.5]).damage, 1);
        }
    }

    #[test]
    fn test_unclamped_crit_chance() {
        let params = BattleParams::default();
        assert_eq!(crit_chance(150, &params), 1.5);
        assert_eq!(crit_chance(-7, &params), -0.07);
        // Negative speed never crits, even on a zero roll
        let slow = Stats::new(5, -7, 5, 100);
        assert!(!roll(slow, Stats::BASE, &[0.5, 0.0]).critical);

        let clamped = BattleParams {
            clamp_crit_chance: true,
            ..BattleParams::default()
        };
        assert_eq!(crit_chance(150, &clamped), 1.0);
        assert_eq!(crit_chance(-7, &clamped), 0.0);
    }
}
