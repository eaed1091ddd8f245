//! Battle log lines and structured turn events

use serde::{Deserialize, Serialize};

use super::session::Slot;

/// One resolved attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: u32,
    pub attacker: Slot,
    pub attacker_name: String,
    pub defender_name: String,
    pub damage: i32,
    pub critical: bool,
    /// Defender HP after the hit
    pub defender_hp: i32,
}

impl TurnEvent {
    /// The log line for this attack
    pub fn short_description(&self) -> String {
        let crit = if self.critical { " CRITICAL HIT!" } else { "" };
        format!(
            "{} attacks {} for {} damage!{}",
            self.attacker_name, self.defender_name, self.damage, crit
        )
    }

    pub fn is_knockout(&self) -> bool {
        self.defender_hp <= 0
    }
}

pub fn opening_line(a: &str, b: &str) -> String {
    format!("{} vs {} - Battle begins!", a, b)
}

pub fn victory_line(winner: &str) -> String {
    format!("{} wins the battle!", winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lines() {
        let mut event = TurnEvent {
            turn: 3,
            attacker: Slot::A,
            attacker_name: "Zorp".to_string(),
            defender_name: "Gloop".to_string(),
            damage: 7,
            critical: false,
            defender_hp: 12,
        };
        assert_eq!(event.short_description(), "Zorp attacks Gloop for 7 damage!");
        event.critical = true;
        assert_eq!(
            event.short_description(),
            "Zorp attacks Gloop for 7 damage! CRITICAL HIT!"
        );
        assert!(!event.is_knockout());
        assert_eq!(opening_line("Zorp", "Gloop"), "Zorp vs Gloop - Battle begins!");
        assert_eq!(victory_line("Zorp"), "Zorp wins the battle!");
    }
}
