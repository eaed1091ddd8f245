//! Part catalogs, selections and stat aggregation

pub mod catalog;
pub mod selection;
pub mod stats;
pub mod types;

pub use catalog::{resolve_paint, Catalog, Catalogs, Paint, PALETTE};
pub use selection::{Selection, MAX_NAME_LEN};
pub use stats::{aggregate, health_bar_percent, stat_bar_percent, Stats};
pub use types::*;
