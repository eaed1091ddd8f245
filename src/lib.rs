//! Creature builder library
//!
//! Part catalogs, stat aggregation, a raster renderer and a turn-based
//! battle engine. The `creature_forge` binary drives it from the command line.

pub mod battle;
pub mod config;
pub mod creature;
pub mod error;
pub mod parts;
pub mod render;

pub use battle::{BattleArena, BattleParams, Phase, Slot};
pub use config::ForgeConfig;
pub use creature::{Builder, ComposedCreature, CreatureId, Roster};
pub use error::{ForgeError, Result};
pub use parts::{Catalogs, Category, Selection, Stats};
pub use render::{render, RenderParams};
