//! Part definitions and per-category render payloads
//!
//! Every catalog entry pairs an id and display name with a stat delta and a
//! render payload. The payload is a closed enum per category; the renderer
//! matches on it exhaustively and every enum carries an explicit fallback.

use serde::{Deserialize, Serialize};

/// The six part categories a creature is assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Body,
    Eyes,
    Mouth,
    Arms,
    Legs,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Body,
        Self::Eyes,
        Self::Mouth,
        Self::Arms,
        Self::Legs,
        Self::Accessory,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Eyes => "eyes",
            Self::Mouth => "mouth",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Accessory => "accessory",
        }
    }

    /// Parse a category key as used on the command line ("body", "eyes", ...)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.display_name().eq_ignore_ascii_case(key.trim()))
    }
}

/// Stat contribution of a single part.
///
/// `health` is informational only: aggregation resets health to the base
/// constant and never sums it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatDelta {
    pub strength: i32,
    pub speed: i32,
    pub defense: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
}

impl StatDelta {
    pub const ZERO: StatDelta = StatDelta::new(0, 0, 0);

    pub const fn new(strength: i32, speed: i32, defense: i32) -> Self {
        Self {
            strength,
            speed,
            defense,
            health: None,
        }
    }

    pub const fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn is_zero(&self) -> bool {
        self.strength == 0 && self.speed == 0 && self.defense == 0
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartDef<R> {
    pub id: String,
    pub name: String,
    pub render: R,
    pub stats: StatDelta,
}

impl<R> PartDef<R> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, render: R, stats: StatDelta) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            render,
            stats,
        }
    }
}

/// Body geometry. Parametric variants keep their parameter optional so a
/// missing value falls back to the documented default at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Blob,
    Star {
        points: Option<u32>,
    },
    Polygon {
        sides: Option<u32>,
    },
    Rock {
        roughness: Option<u32>,
    },
    Cloud {
        fluffiness: Option<u32>,
    },
    Hero,
    Mech,
    Beast,
    Insect,
    Slime,
    Geode,
    Nova,
    #[serde(other)]
    Unknown,
}

pub const DEFAULT_STAR_POINTS: u32 = 5;
pub const DEFAULT_POLYGON_SIDES: u32 = 6;
pub const DEFAULT_ROCK_ROUGHNESS: u32 = 1;
pub const DEFAULT_CLOUD_FLUFFINESS: u32 = 5;

/// Upper bound for star points and polygon sides
pub const MAX_VERTEX_COUNT: u32 = 64;
/// Upper bound for rock roughness and cloud fluffiness
pub const MAX_SURFACE_DETAIL: u32 = 32;

impl BodyShape {
    /// Star point count; zero, one or absent falls back to the default.
    /// Capped at `MAX_VERTEX_COUNT`.
    pub fn star_points(points: Option<u32>) -> u32 {
        points
            .filter(|&p| p >= 2)
            .map_or(DEFAULT_STAR_POINTS, |p| p.min(MAX_VERTEX_COUNT))
    }

    /// Polygon side count; fewer than three or absent falls back to the
    /// default. Capped at `MAX_VERTEX_COUNT`.
    pub fn polygon_sides(sides: Option<u32>) -> u32 {
        sides
            .filter(|&s| s >= 3)
            .map_or(DEFAULT_POLYGON_SIDES, |s| s.min(MAX_VERTEX_COUNT))
    }

    pub fn rock_roughness(roughness: Option<u32>) -> u32 {
        roughness.unwrap_or(DEFAULT_ROCK_ROUGHNESS).min(MAX_SURFACE_DETAIL)
    }

    pub fn cloud_fluffiness(fluffiness: Option<u32>) -> u32 {
        fluffiness.unwrap_or(DEFAULT_CLOUD_FLUFFINESS).min(MAX_SURFACE_DETAIL)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Blob => "blob",
            Self::Star { .. } => "star",
            Self::Polygon { .. } => "polygon",
            Self::Rock { .. } => "rock",
            Self::Cloud { .. } => "cloud",
            Self::Hero => "hero",
            Self::Mech => "mech",
            Self::Beast => "beast",
            Self::Insect => "insect",
            Self::Slime => "slime",
            Self::Geode => "geode",
            Self::Nova => "nova",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EyeStyle {
    #[default]
    Dots,
    Anime,
    Big,
    Small,
    Angry,
    Sad,
    Bored,
    Happy,
    Crazy,
    Cyclops,
    Triclops,
    Spider {
        count: Option<u32>,
    },
    Snail,
    Vertical,
    Visor,
    Laser,
    Hypno,
    Matrix,
    Glowing,
    Scanner,
    #[serde(other)]
    Unknown,
}

pub const DEFAULT_SPIDER_EYES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MouthStyle {
    #[default]
    Smile,
    Frown,
    Neutral,
    Open,
    Tongue,
    Cat,
    Dog,
    Beak,
    Rabbit,
    Snout,
    Fangs,
    Tusks,
    Toothy,
    Leech,
    Gaping,
    Speaker,
    Vent,
    Stitch,
    Zipper,
    Void,
    Mustache,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArmStyle {
    #[default]
    Small,
    None,
    Noodle,
    Long,
    Fat,
    Muscle,
    Ripped,
    Hulk,
    Gloves,
    Knuckles,
    Tentacle,
    Claws,
    Wings,
    Fins,
    Vines,
    Slug,
    Robot,
    Drill,
    Magnet,
    Shield,
    Cannon,
    Saw,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LegStyle {
    #[default]
    Stumpy,
    None,
    Human,
    Stick,
    Fat,
    Cat,
    Cheetah,
    Rabbit,
    Wheels,
    Springs,
    Spider,
    Tentacles,
    Slime,
    Hooves,
    Clawed,
    Roots,
    Walker,
    Treads,
    Jet,
    Antigrav,
    Mech,
    Skates,
    #[serde(other)]
    Unknown,
}

/// Which side of the body an accessory is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryLayer {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    #[default]
    None,
    // Back layer
    BatWings,
    AngelWings,
    Cape,
    Jetpack,
    Spikes,
    Shell,
    Backpack,
    MagicAura,
    // Front layer
    TopHat,
    Cowboy,
    Crown,
    Helmet,
    Horns,
    Antenna,
    Halo,
    Flower,
    Glasses,
    Monocle,
    Mask,
    Mustache,
    Eyepatch,
    Flies,
    #[serde(other)]
    Unknown,
}

impl AccessoryKind {
    /// The layer this kind of accessory is authored for
    pub fn natural_layer(&self) -> Option<AccessoryLayer> {
        match self {
            Self::None | Self::Unknown => None,
            Self::BatWings
            | Self::AngelWings
            | Self::Cape
            | Self::Jetpack
            | Self::Spikes
            | Self::Shell
            | Self::Backpack
            | Self::MagicAura => Some(AccessoryLayer::Back),
            _ => Some(AccessoryLayer::Front),
        }
    }
}

/// Accessory payload: what to draw and the layer it was declared on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accessory {
    pub kind: AccessoryKind,
    #[serde(default)]
    pub layer: Option<AccessoryLayer>,
}

impl Accessory {
    pub const NONE: Accessory = Accessory {
        kind: AccessoryKind::None,
        layer: None,
    };

    /// An accessory declared on its natural layer
    pub fn new(kind: AccessoryKind) -> Self {
        Self {
            kind,
            layer: kind.natural_layer(),
        }
    }

    /// Whether this accessory draws during the given layer pass
    pub fn draws_on(&self, layer: AccessoryLayer) -> bool {
        self.kind != AccessoryKind::None && self.layer == Some(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parametric_defaults() {
        assert_eq!(BodyShape::star_points(None), 5);
        assert_eq!(BodyShape::star_points(Some(0)), 5);
        assert_eq!(BodyShape::star_points(Some(7)), 7);
        assert_eq!(BodyShape::polygon_sides(None), 6);
        assert_eq!(BodyShape::polygon_sides(Some(2)), 6);
        assert_eq!(BodyShape::rock_roughness(None), 1);
        assert_eq!(BodyShape::cloud_fluffiness(None), 5);
    }

    #[test]
    fn test_parametric_caps() {
        assert_eq!(BodyShape::star_points(Some(u32::MAX)), MAX_VERTEX_COUNT);
        assert_eq!(BodyShape::polygon_sides(Some(5_000_000)), MAX_VERTEX_COUNT);
        assert_eq!(BodyShape::polygon_sides(Some(12)), 12);
        assert_eq!(BodyShape::rock_roughness(Some(u32::MAX)), MAX_SURFACE_DETAIL);
        assert_eq!(BodyShape::cloud_fluffiness(Some(u32::MAX)), MAX_SURFACE_DETAIL);
        assert_eq!(BodyShape::rock_roughness(Some(10)), 10);
    }

    #[test]
    fn test_accessory_layers() {
        assert_eq!(AccessoryKind::Shell.natural_layer(), Some(AccessoryLayer::Back));
        assert_eq!(AccessoryKind::TopHat.natural_layer(), Some(AccessoryLayer::Front));
        assert_eq!(AccessoryKind::None.natural_layer(), None);
        assert!(!Accessory::NONE.draws_on(AccessoryLayer::Front));
        assert!(!Accessory::NONE.draws_on(AccessoryLayer::Back));
        assert!(Accessory::new(AccessoryKind::Cape).draws_on(AccessoryLayer::Back));
    }

    #[test]
    fn test_unknown_render_tags_deserialize_to_fallback() {
        let body: BodyShape = serde_json::from_str(r#"{"type":"dodecahedron"}"#).unwrap();
        assert_eq!(body, BodyShape::Unknown);
        let star: BodyShape = serde_json::from_str(r#"{"type":"star","points":7}"#).unwrap();
        assert_eq!(star, BodyShape::Star { points: Some(7) });
        let star: BodyShape = serde_json::from_str(r#"{"type":"star"}"#).unwrap();
        assert_eq!(star, BodyShape::Star { points: None });
        let eyes: EyeStyle = serde_json::from_str(r#"{"type":"telescopic"}"#).unwrap();
        assert_eq!(eyes, EyeStyle::Unknown);
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(Category::from_key("Eyes"), Some(Category::Eyes));
        assert_eq!(Category::from_key("tail"), None);
    }
}
