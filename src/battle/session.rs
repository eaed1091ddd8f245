//! The battle state machine: `Selecting → Fighting → Finished`
//!
//! A turn happens in two steps. `begin_turn` rolls and applies damage and
//! marks the session busy; `finish_turn` checks for a knockout or moves on to
//! the next turn. Callers may pause between the two to pace presentation.
//! Abandoning the session (reset or a fighter change) drops a pending turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::creature::ComposedCreature;
use crate::error::BattleSetupError;

use super::damage::calculate_damage;
use super::log::{opening_line, victory_line, TurnEvent};
use super::rolls::RollSource;
use super::BattleParams;

/// One of the two fighter positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    /// Odd turns belong to A, even turns to B
    pub fn attacker_for_turn(turn: u32) -> Slot {
        if turn % 2 == 1 {
            Slot::A
        } else {
            Slot::B
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => f.write_str("A"),
            Slot::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Selecting,
    Fighting,
    Finished,
}

impl Phase {
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Selecting => "selecting",
            Phase::Fighting => "fighting",
            Phase::Finished => "finished",
        }
    }
}

/// A turn whose damage has landed but whose consequence is not resolved yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTurn {
    attacker: Slot,
    defender_hp: i32,
}

/// State of one battle. Fighters are cloned in, so HP here never touches the
/// stored creatures.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub fighter_a: ComposedCreature,
    pub fighter_b: ComposedCreature,
    pub hp_a: i32,
    pub hp_b: i32,
    pub turn: u32,
    pub log: Vec<String>,
    pub events: Vec<TurnEvent>,
    pub phase: Phase,
    pub winner: Option<Slot>,
    pending: Option<PendingTurn>,
}

impl BattleSession {
    fn new(fighter_a: ComposedCreature, fighter_b: ComposedCreature) -> Self {
        let log = vec![opening_line(&fighter_a.name, &fighter_b.name)];
        Self {
            hp_a: fighter_a.stats.health,
            hp_b: fighter_b.stats.health,
            fighter_a,
            fighter_b,
            turn: 1,
            log,
            events: Vec::new(),
            phase: Phase::Fighting,
            winner: None,
            pending: None,
        }
    }

    pub fn fighter(&self, slot: Slot) -> &ComposedCreature {
        match slot {
            Slot::A => &self.fighter_a,
            Slot::B => &self.fighter_b,
        }
    }

    pub fn hp(&self, slot: Slot) -> i32 {
        match slot {
            Slot::A => self.hp_a,
            Slot::B => self.hp_b,
        }
    }

    fn hp_mut(&mut self, slot: Slot) -> &mut i32 {
        match slot {
            Slot::A => &mut self.hp_a,
            Slot::B => &mut self.hp_b,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_attacker(&self) -> Slot {
        Slot::attacker_for_turn(self.turn)
    }

    fn begin_turn<S: RollSource + ?Sized>(&mut self, params: &BattleParams, rolls: &mut S) -> Option<TurnEvent> {
        if self.phase != Phase::Fighting {
            debug!("turn ignored: battle is {}", self.phase.display_name());
            return None;
        }
        if self.is_busy() {
            debug!("turn ignored: previous turn still resolving");
            return None;
        }

        let attacker = self.next_attacker();
        let defender = attacker.other();
        let roll = calculate_damage(
            &self.fighter(attacker).stats,
            &self.fighter(defender).stats,
            params,
            rolls,
        );

        let hp = self.hp_mut(defender);
        *hp = hp.saturating_sub(roll.damage).max(0);
        let defender_hp = *hp;

        let event = TurnEvent {
            turn: self.turn,
            attacker,
            attacker_name: self.fighter(attacker).name.clone(),
            defender_name: self.fighter(defender).name.clone(),
            damage: roll.damage,
            critical: roll.critical,
            defender_hp,
        };
        self.log.push(event.short_description());
        self.events.push(event.clone());
        self.pending = Some(PendingTurn {
            attacker,
            defender_hp,
        });
        Some(event)
    }

    fn finish_turn(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        if pending.defender_hp <= 0 {
            self.phase = Phase::Finished;
            self.winner = Some(pending.attacker);
            let line = victory_line(&self.fighter(pending.attacker).name);
            info!("{}", line);
            self.log.push(line);
        } else {
            self.turn += 1;
        }
        true
    }
}

/// Read-only view of the arena for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub phase: Phase,
    pub fighter_a: Option<String>,
    pub fighter_b: Option<String>,
    pub hp_a: i32,
    pub hp_b: i32,
    pub max_hp_a: i32,
    pub max_hp_b: i32,
    pub turn: u32,
    pub log: Vec<String>,
    pub winner: Option<String>,
    pub next_attacker: Option<Slot>,
}

/// Two fighter slots and the battle between them
#[derive(Debug, Clone, Default)]
pub struct BattleArena {
    params: BattleParams,
    fighter_a: Option<ComposedCreature>,
    fighter_b: Option<ComposedCreature>,
    session: Option<BattleSession>,
}

impl BattleArena {
    pub fn new(params: BattleParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &BattleParams {
        &self.params
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Selecting, |s| s.phase)
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn fighter(&self, slot: Slot) -> Option<&ComposedCreature> {
        match slot {
            Slot::A => self.fighter_a.as_ref(),
            Slot::B => self.fighter_b.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<ComposedCreature> {
        match slot {
            Slot::A => &mut self.fighter_a,
            Slot::B => &mut self.fighter_b,
        }
    }

    /// Put a creature in a slot. Any session in progress is discarded.
    pub fn select_fighter(&mut self, slot: Slot, creature: &ComposedCreature) {
        self.drop_session();
        *self.slot_mut(slot) = Some(creature.clone());
    }

    pub fn clear_fighter(&mut self, slot: Slot) {
        self.drop_session();
        *self.slot_mut(slot) = None;
    }

    /// Start a battle between the selected fighters
    pub fn start(&mut self) -> Result<(), BattleSetupError> {
        let a = self
            .fighter_a
            .clone()
            .ok_or(BattleSetupError::MissingFighter(Slot::A))?;
        let b = self
            .fighter_b
            .clone()
            .ok_or(BattleSetupError::MissingFighter(Slot::B))?;
        if a.id == b.id {
            return Err(BattleSetupError::SameFighter);
        }
        info!("battle: {} vs {}", a.name, b.name);
        self.session = Some(BattleSession::new(a, b));
        Ok(())
    }

    pub fn is_busy(&self) -> bool {
        self.session.as_ref().is_some_and(BattleSession::is_busy)
    }

    /// Roll and apply one attack. `None` when no battle is being fought or a
    /// turn is already pending.
    pub fn begin_turn<S: RollSource + ?Sized>(&mut self, rolls: &mut S) -> Option<TurnEvent> {
        let Some(session) = self.session.as_mut() else {
            debug!("turn ignored: no battle in progress");
            return None;
        };
        session.begin_turn(&self.params, rolls)
    }

    /// Resolve the pending turn; `false` when nothing was pending
    pub fn finish_turn(&mut self) -> bool {
        self.session.as_mut().is_some_and(BattleSession::finish_turn)
    }

    /// A whole turn with no pause in between
    pub fn advance_turn<S: RollSource + ?Sized>(&mut self, rolls: &mut S) -> Option<TurnEvent> {
        let event = self.begin_turn(rolls)?;
        self.finish_turn();
        Some(event)
    }

    /// Advance until the battle finishes or `params.max_turns` turns pass.
    /// Returns the number of turns played.
    pub fn run_to_end<S: RollSource + ?Sized>(&mut self, rolls: &mut S) -> u32 {
        let mut played = 0;
        while self.phase() == Phase::Fighting && played < self.params.max_turns {
            if self.advance_turn(rolls).is_none() {
                break;
            }
            played += 1;
        }
        played
    }

    /// Back to `Selecting` with both slots empty
    pub fn reset(&mut self) {
        self.drop_session();
        self.fighter_a = None;
        self.fighter_b = None;
    }

    fn drop_session(&mut self) {
        if let Some(session) = self.session.take() {
            if session.is_busy() {
                debug!("pending turn cancelled");
            }
        }
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        let name = |c: Option<&ComposedCreature>| c.map(|c| c.name.clone());
        let max_hp = |c: Option<&ComposedCreature>| c.map_or(0, |c| c.stats.health);
        match &self.session {
            Some(s) => BattleSnapshot {
                phase: s.phase,
                fighter_a: Some(s.fighter_a.name.clone()),
                fighter_b: Some(s.fighter_b.name.clone()),
                hp_a: s.hp_a,
                hp_b: s.hp_b,
                max_hp_a: s.fighter_a.stats.health,
                max_hp_b: s.fighter_b.stats.health,
                turn: s.turn,
                log: s.log.clone(),
                winner: s.winner.map(|w| s.fighter(w).name.clone()),
                next_attacker: (s.phase == Phase::Fighting).then(|| s.next_attacker()),
            },
            None => BattleSnapshot {
                phase: Phase::Selecting,
                fighter_a: name(self.fighter_a.as_ref()),
                fighter_b: name(self.fighter_b.as_ref()),
                hp_a: max_hp(self.fighter_a.as_ref()),
                hp_b: max_hp(self.fighter_b.as_ref()),
                max_hp_a: max_hp(self.fighter_a.as_ref()),
                max_hp_b: max_hp(self.fighter_b.as_ref()),
                turn: 1,
                log: Vec::new(),
                winner: None,
                next_attacker: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rolls::{EntropyRolls, ScriptedRolls};
    use crate::creature::{CreatureId, Roster};
    use crate::parts::{Catalogs, Category, Selection, Stats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const PLAIN: &[(Category, &str)] = &[];
    const HULK: &[(Category, &str)] = &[(Category::Arms, "arm_hulk")];
    const STAR: &[(Category, &str)] = &[(Category::Body, "star_7")];

    fn roster_with(pairs: &[(&str, &[(Category, &str)])]) -> Roster {
        let catalogs = Catalogs::standard();
        let mut roster = Roster::new();
        for &(name, parts) in pairs {
            let mut selection = Selection::default().with_name(name);
            for &(category, id) in parts {
                selection.set(category, id);
            }
            roster.save(&selection, catalogs).unwrap();
        }
        roster
    }

    fn arena_for(roster: &Roster) -> BattleArena {
        let mut arena = BattleArena::new(BattleParams::default());
        arena.select_fighter(Slot::A, &roster.list()[0]);
        arena.select_fighter(Slot::B, &roster.list()[1]);
        arena
    }

    #[test]
    fn test_start_validation() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut arena = BattleArena::default();
        assert_eq!(arena.start(), Err(BattleSetupError::MissingFighter(Slot::A)));
        arena.select_fighter(Slot::A, &roster.list()[0]);
        assert_eq!(arena.start(), Err(BattleSetupError::MissingFighter(Slot::B)));
        arena.select_fighter(Slot::B, &roster.list()[0]);
        assert_eq!(arena.start(), Err(BattleSetupError::SameFighter));
        assert_eq!(arena.phase(), Phase::Selecting);
        assert!(arena.session().is_none());

        arena.select_fighter(Slot::B, &roster.list()[1]);
        arena.start().unwrap();
        assert_eq!(arena.phase(), Phase::Fighting);
        let snap = arena.snapshot();
        assert_eq!(snap.hp_a, 100);
        assert_eq!(snap.hp_b, 100);
        assert_eq!(snap.turn, 1);
        assert_eq!(snap.log, vec!["Zorp vs Gloop - Battle begins!".to_string()]);
        assert_eq!(snap.next_attacker, Some(Slot::A));
    }

    #[test]
    fn test_turn_parity_alternates() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut arena = arena_for(&roster);
        arena.start().unwrap();
        let mut rolls = ScriptedRolls::new([]).with_fallback(0.5);
        let attackers: Vec<_> = (0..4)
            .map(|_| arena.advance_turn(&mut rolls).unwrap().attacker)
            .collect();
        assert_eq!(attackers, [Slot::A, Slot::B, Slot::A, Slot::B]);
        // Base 5/5/5 fighters trade exactly 5 damage per hit
        let snap = arena.snapshot();
        assert_eq!((snap.hp_a, snap.hp_b), (90, 90));
        assert_eq!(snap.turn, 5);
    }

    #[test]
    fn test_busy_session_ignores_turns() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut arena = arena_for(&roster);
        let mut rolls = ScriptedRolls::new([]).with_fallback(0.5);

        // Not fighting yet
        assert!(arena.advance_turn(&mut rolls).is_none());
        assert!(!arena.finish_turn());

        arena.start().unwrap();
        assert!(arena.begin_turn(&mut rolls).is_some());
        assert!(arena.is_busy());
        assert!(arena.begin_turn(&mut rolls).is_none());
        assert_eq!(arena.snapshot().hp_b, 95);
        assert_eq!(arena.snapshot().turn, 1);

        assert!(arena.finish_turn());
        assert!(!arena.is_busy());
        assert_eq!(arena.snapshot().turn, 2);
    }

    #[test]
    fn test_reset_cancels_pending_turn() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut arena = arena_for(&roster);
        arena.start().unwrap();
        let mut rolls = ScriptedRolls::new([]);
        arena.begin_turn(&mut rolls).unwrap();

        arena.reset();
        assert!(!arena.finish_turn());
        assert_eq!(arena.phase(), Phase::Selecting);
        assert!(arena.fighter(Slot::A).is_none());
        assert!(arena.snapshot().log.is_empty());
    }

    #[test]
    fn test_changing_fighter_discards_session() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN), ("Blip", PLAIN)]);
        let mut arena = arena_for(&roster);
        arena.start().unwrap();
        arena.advance_turn(&mut ScriptedRolls::new([]));
        arena.select_fighter(Slot::B, &roster.list()[2]);
        assert_eq!(arena.phase(), Phase::Selecting);
        assert_eq!(arena.snapshot().fighter_b.as_deref(), Some("Blip"));
    }

    #[test]
    fn test_knockout_finishes_battle() {
        // Hulk arms: strength 10, defense 6, speed 3
        let roster = roster_with(&[("Brute", HULK), ("Twig", PLAIN)]);
        let mut arena = arena_for(&roster);
        arena.start().unwrap();
        // A deals 20 - 5 = 15 per hit, B deals max(1, 10 - 6) = 4
        let mut rolls = ScriptedRolls::new([]).with_fallback(0.5);
        let played = arena.run_to_end(&mut rolls);

        let snap = arena.snapshot();
        assert_eq!(snap.phase, Phase::Finished);
        assert_eq!(snap.winner.as_deref(), Some("Brute"));
        assert_eq!(snap.hp_b, 0);
        // Seven hits from A, six from B in between
        assert_eq!(played, 13);
        assert_eq!(snap.hp_a, 100 - 6 * 4);
        assert_eq!(snap.log.last().map(String::as_str), Some("Brute wins the battle!"));
        assert_eq!(snap.next_attacker, None);

        // Finished is terminal
        assert!(arena.advance_turn(&mut rolls).is_none());
        assert_eq!(arena.snapshot().log.len(), snap.log.len());
    }

    #[test]
    fn test_session_never_touches_roster_stats() {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut arena = arena_for(&roster);
        arena.start().unwrap();
        let mut rolls = EntropyRolls::new(ChaCha8Rng::seed_from_u64(42));
        arena.run_to_end(&mut rolls);
        assert_eq!(arena.phase(), Phase::Finished);
        assert!(roster.iter().all(|c| c.stats.health == 100));
        assert_ne!(roster.list()[0].id, CreatureId::PREVIEW);
    }

    #[test]
    fn test_seeded_battles_are_reproducible() {
        let roster = roster_with(&[("Zorp", STAR), ("Gloop", PLAIN)]);
        let run = |seed| {
            let mut arena = arena_for(&roster);
            arena.start().unwrap();
            arena.run_to_end(&mut EntropyRolls::new(ChaCha8Rng::seed_from_u64(seed)));
            arena.snapshot()
        };
        assert_eq!(run(7), run(7));
    }

    fn arena_with_stats(a: Stats, b: Stats) -> BattleArena {
        let roster = roster_with(&[("Zorp", PLAIN), ("Gloop", PLAIN)]);
        let mut fighters = roster.list().to_vec();
        fighters[0].stats = a;
        fighters[1].stats = b;
        let mut arena = BattleArena::new(BattleParams::default());
        arena.select_fighter(Slot::A, &fighters[0]);
        arena.select_fighter(Slot::B, &fighters[1]);
        arena.start().unwrap();
        arena
    }

    #[test]
    fn test_turn_order_ignores_speed() {
        let mut arena = arena_with_stats(Stats::new(5, 1, 5, 100), Stats::new(5, 99, 5, 100));
        let mut rolls = ScriptedRolls::new([]).with_fallback(0.5);

        let first = arena.begin_turn(&mut rolls).unwrap();
        assert_eq!(first.attacker, Slot::A);
        assert!(!first.critical);
        assert!(arena.finish_turn());
        let snap = arena.snapshot();
        assert_eq!((snap.hp_a, snap.hp_b), (100, 95));
        assert_eq!(snap.next_attacker, Some(Slot::B));

        // The fast fighter waits for turn 2, then crits on the 0.5 roll
        let second = arena.advance_turn(&mut rolls).unwrap();
        assert_eq!(second.attacker, Slot::B);
        assert!(second.critical);
        assert_eq!(arena.snapshot().hp_a, 93);

        let rest: Vec<_> = (0..4)
            .map(|_| arena.advance_turn(&mut rolls).unwrap().attacker)
            .collect();
        assert_eq!(rest, [Slot::A, Slot::B, Slot::A, Slot::B]);
    }

    #[test]
    fn test_heavy_defense_still_takes_one_damage() {
        let striker = Stats::new(10, 0, 0, 100);
        let fortress = Stats::new(0, 0, 100, 100);
        for u in [0.0, 0.5, 0.999] {
            let mut arena = arena_with_stats(striker, fortress);
            let mut rolls = ScriptedRolls::new([u, 0.5]);
            let event = arena.begin_turn(&mut rolls).unwrap();
            assert_eq!(event.turn, 1);
            assert_eq!(event.attacker, Slot::A);
            assert_eq!(event.damage, 1);
            assert!(arena.finish_turn());
            let snap = arena.snapshot();
            assert_eq!((snap.hp_a, snap.hp_b), (100, 99));
            assert_eq!(snap.phase, Phase::Fighting);
            assert_eq!(snap.turn, 2);
        }
    }
}
