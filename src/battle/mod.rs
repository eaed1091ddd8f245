//! Turn-based battles between two saved creatures

pub mod damage;
pub mod log;
pub mod rolls;
pub mod session;

use serde::{Deserialize, Serialize};

pub use damage::{calculate_damage, crit_chance, DamageRoll};
pub use log::TurnEvent;
pub use rolls::{EntropyRolls, RollSource, ScriptedRolls};
pub use session::{BattleArena, BattleSession, BattleSnapshot, Phase, Slot};

/// Tunable battle constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleParams {
    /// Pause between an attack landing and its consequence, for paced output
    pub turn_delay_ms: u64,
    pub strength_multiplier: i32,
    /// Variance factor is `variance_min + variance_span * roll`
    pub variance_min: f64,
    pub variance_span: f64,
    pub crit_multiplier: f64,
    /// Keep crit chance inside [0, 1]. Off by default, so speed above 100
    /// always crits and negative speed never does.
    pub clamp_crit_chance: bool,
    /// Safety cap for `BattleArena::run_to_end`
    pub max_turns: u32,
}

impl Default for BattleParams {
    fn default() -> Self {
        Self {
            turn_delay_ms: 500,
            strength_multiplier: 2,
            variance_min: 0.8,
            variance_span: 0.4,
            crit_multiplier: 1.5,
            clamp_crit_chance: false,
            max_turns: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_partial_json() {
        let params: BattleParams = serde_json::from_str(r#"{"crit_multiplier": 2.0}"#).unwrap();
        assert_eq!(params.crit_multiplier, 2.0);
        assert_eq!(params.turn_delay_ms, 500);
        assert_eq!(params.strength_multiplier, 2);
    }
}
