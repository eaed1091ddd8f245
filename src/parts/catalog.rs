//! Part catalogs
//!
//! Immutable tables of every selectable part, built once per process and only
//! ever read afterwards. The first entry of each catalog is its default.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use super::types::*;

/// One category's list of part definitions
#[derive(Debug, Clone, Serialize)]
pub struct Catalog<R> {
    category: Category,
    entries: Vec<PartDef<R>>,
}

impl<R> Catalog<R> {
    pub fn new(category: Category, entries: Vec<PartDef<R>>) -> Self {
        Self { category, entries }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartDef<R>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PartDef<R>] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Exact lookup by id
    pub fn get(&self, id: &str) -> Option<&PartDef<R>> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The category default (first entry)
    pub fn default_entry(&self) -> Option<&PartDef<R>> {
        self.entries.first()
    }

    /// Look up an id, falling back to the default entry when it is unknown.
    /// Returns `None` only for an empty catalog.
    pub fn resolve(&self, id: &str) -> Option<&PartDef<R>> {
        match self.get(id) {
            Some(entry) => Some(entry),
            None => {
                debug!(
                    "unknown {} id {:?}, using category default",
                    self.category.display_name(),
                    id
                );
                self.default_entry()
            }
        }
    }

    /// Stat delta of the resolved entry (zero for an empty catalog)
    pub fn delta(&self, id: &str) -> StatDelta {
        self.resolve(id).map(|e| e.stats).unwrap_or(StatDelta::ZERO)
    }

    /// Id of the resolved entry, empty for an empty catalog
    pub fn resolved_id(&self, id: &str) -> String {
        self.resolve(id).map(|e| e.id.clone()).unwrap_or_default()
    }
}

impl<R: Clone + Default> Catalog<R> {
    /// Render payload of the resolved entry (the payload default for an empty catalog)
    pub fn payload(&self, id: &str) -> R {
        self.resolve(id).map(|e| e.render.clone()).unwrap_or_default()
    }
}

/// A cosmetic body colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paint {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

pub const PALETTE: &[Paint] = &[
    Paint { id: "color_red", name: "Red", hex: "#FF4136" },
    Paint { id: "color_orange", name: "Orange", hex: "#FF851B" },
    Paint { id: "color_yellow", name: "Yellow", hex: "#FFDC00" },
    Paint { id: "color_green", name: "Green", hex: "#2ECC40" },
    Paint { id: "color_teal", name: "Teal", hex: "#39CCCC" },
    Paint { id: "color_blue", name: "Blue", hex: "#0074D9" },
    Paint { id: "color_navy", name: "Navy", hex: "#001F3F" },
    Paint { id: "color_purple", name: "Purple", hex: "#B10DC9" },
    Paint { id: "color_pink", name: "Pink", hex: "#F012BE" },
    Paint { id: "color_brown", name: "Brown", hex: "#8B4513" },
    Paint { id: "color_gray", name: "Gray", hex: "#AAAAAA" },
    Paint { id: "color_black", name: "Black", hex: "#222222" },
    Paint { id: "color_white", name: "White", hex: "#F5F5F5" },
];

/// Resolve a palette id, falling back to the first colour
pub fn resolve_paint(id: &str) -> &'static Paint {
    PALETTE
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PALETTE[0])
}

/// All six part catalogs
#[derive(Debug, Clone, Serialize)]
pub struct Catalogs {
    pub body: Catalog<BodyShape>,
    pub eyes: Catalog<EyeStyle>,
    pub mouth: Catalog<MouthStyle>,
    pub arms: Catalog<ArmStyle>,
    pub legs: Catalog<LegStyle>,
    pub accessory: Catalog<Accessory>,
}

static STANDARD: OnceLock<Catalogs> = OnceLock::new();

impl Catalogs {
    /// The process-wide standard catalogs
    pub fn standard() -> &'static Catalogs {
        STANDARD.get_or_init(Catalogs::build)
    }

    /// Build a fresh copy of the standard tables
    pub fn build() -> Self {
        let catalogs = Self {
            body: Catalog::new(Category::Body, body_parts()),
            eyes: Catalog::new(Category::Eyes, eye_parts()),
            mouth: Catalog::new(Category::Mouth, mouth_parts()),
            arms: Catalog::new(Category::Arms, arm_parts()),
            legs: Catalog::new(Category::Legs, leg_parts()),
            accessory: Catalog::new(Category::Accessory, accessory_parts()),
        };
        debug!(
            "built catalogs: {} bodies, {} eyes, {} mouths, {} arms, {} legs, {} accessories",
            catalogs.body.len(),
            catalogs.eyes.len(),
            catalogs.mouth.len(),
            catalogs.arms.len(),
            catalogs.legs.len(),
            catalogs.accessory.len()
        );
        catalogs
    }

    /// (id, display name, delta) rows for one category, for listings
    pub fn listing(&self, category: Category) -> Vec<(String, String, StatDelta)> {
        fn rows<R>(catalog: &Catalog<R>) -> Vec<(String, String, StatDelta)> {
            catalog
                .iter()
                .map(|e| (e.id.clone(), e.name.clone(), e.stats))
                .collect()
        }
        match category {
            Category::Body => rows(&self.body),
            Category::Eyes => rows(&self.eyes),
            Category::Mouth => rows(&self.mouth),
            Category::Arms => rows(&self.arms),
            Category::Legs => rows(&self.legs),
            Category::Accessory => rows(&self.accessory),
        }
    }

    /// Ids for one category
    pub fn ids(&self, category: Category) -> Vec<String> {
        self.listing(category).into_iter().map(|(id, _, _)| id).collect()
    }
}

const STAR_PREFIXES: [&str; 10] = [
    "Tri", "Quad", "Penta", "Hexa", "Hepta", "Octa", "Nona", "Deca", "Hendeca", "Dodeca",
];

const POLYGON_NAMES: [&str; 10] = [
    "Triangle", "Square", "Pentagon", "Hexagon", "Heptagon", "Octagon", "Nonagon", "Decagon",
    "Hendecagon", "Dodecagon",
];

const ROCK_NAMES: [&str; 10] = [
    "Smooth Stone", "Pebble", "Cobble", "Rock", "Boulder", "Crag", "Shard", "Spire", "Monolith",
    "Mountain",
];

const CLOUD_NAMES: [&str; 10] = [
    "Wisp", "Mist", "Puff", "Vapor", "Cloud", "Cumulus", "Stratus", "Nimbus", "Storm", "Hurricane",
];

/// Body catalog: basic shapes, then the parametric families, then archetypes.
/// Family deltas are measured against the base stat of 5.
fn body_parts() -> Vec<PartDef<BodyShape>> {
    let mut parts = vec![
        PartDef::new("basic_round", "Circle", BodyShape::Circle, StatDelta::ZERO),
        PartDef::new("basic_square", "Block", BodyShape::Square, StatDelta::ZERO),
        PartDef::new("basic_triangle", "Wedge", BodyShape::Triangle, StatDelta::ZERO),
        PartDef::new("basic_blob", "Slime", BodyShape::Blob, StatDelta::ZERO),
    ];

    for i in 3..=12i32 {
        parts.push(PartDef::new(
            format!("star_{}", i),
            format!("{}star", STAR_PREFIXES[(i - 3) as usize]),
            BodyShape::Star { points: Some(i as u32) },
            StatDelta::new(-1 + i / 3, i / 2, -(i / 4)),
        ));
    }

    for i in 3..=12i32 {
        parts.push(PartDef::new(
            format!("poly_{}", i),
            POLYGON_NAMES[(i - 3) as usize],
            BodyShape::Polygon { sides: Some(i as u32) },
            StatDelta::new(i / 4, 1 - i / 3, i / 2),
        ));
    }

    for i in 1..=10i32 {
        parts.push(PartDef::new(
            format!("rock_{}", i),
            ROCK_NAMES[(i - 1) as usize],
            BodyShape::Rock { roughness: Some(i as u32) },
            StatDelta::new(1, -1 - i / 4, 2 + i / 2),
        ));
    }

    for i in 1..=10i32 {
        parts.push(PartDef::new(
            format!("cloud_{}", i),
            CLOUD_NAMES[(i - 1) as usize],
            BodyShape::Cloud { fluffiness: Some(i as u32) },
            StatDelta::new(-1, 1 + i / 3, i / 4),
        ));
    }

    parts.extend([
        PartDef::new("arch_hero", "Hero Torso", BodyShape::Hero, StatDelta::new(3, 1, 0)),
        PartDef::new("arch_mech", "Mech Chassis", BodyShape::Mech, StatDelta::new(1, -2, 4).with_health(20)),
        PartDef::new("arch_beast", "Beast Body", BodyShape::Beast, StatDelta::new(2, 2, 0)),
        PartDef::new("arch_insect", "Insect Thorax", BodyShape::Insect, StatDelta::new(0, 3, 1)),
        PartDef::new("arch_slime", "Slime Core", BodyShape::Slime, StatDelta::new(-1, -1, 3).with_health(10)),
        PartDef::new("arch_geode", "Geode", BodyShape::Geode, StatDelta::new(1, -2, 5)),
        PartDef::new("arch_nova", "Nova Core", BodyShape::Nova, StatDelta::new(2, 3, -1)),
    ]);

    parts
}

fn eye_parts() -> Vec<PartDef<EyeStyle>> {
    use EyeStyle::*;
    vec![
        PartDef::new("eye_dots", "Dot Eyes", Dots, StatDelta::ZERO),
        PartDef::new("eye_anime", "Anime Eyes", Anime, StatDelta::new(0, 1, 0)),
        PartDef::new("eye_big", "Big Eyes", Big, StatDelta::new(0, 0, 1)),
        PartDef::new("eye_small", "Beady Eyes", Small, StatDelta::new(1, 0, 0)),
        PartDef::new("eye_angry", "Angry Eyes", Angry, StatDelta::new(2, 0, -1)),
        PartDef::new("eye_sad", "Sad Eyes", Sad, StatDelta::new(-1, 0, 2)),
        PartDef::new("eye_bored", "Bored Eyes", Bored, StatDelta::new(0, -1, 1)),
        PartDef::new("eye_happy", "Happy Eyes", Happy, StatDelta::new(0, 1, 0)),
        PartDef::new("eye_crazy", "Crazy Eyes", Crazy, StatDelta::new(2, 1, -2)),
        PartDef::new("eye_cyclops", "Cyclops Eye", Cyclops, StatDelta::new(2, -1, 0)),
        PartDef::new("eye_triclops", "Triclops Eyes", Triclops, StatDelta::new(1, 1, 0)),
        PartDef::new("eye_spider_4", "Spider Eyes (4)", Spider { count: Some(4) }, StatDelta::new(0, 1, 0)),
        PartDef::new("eye_spider_6", "Spider Eyes (6)", Spider { count: Some(6) }, StatDelta::new(0, 2, 0)),
        PartDef::new("eye_spider_8", "Spider Eyes (8)", Spider { count: Some(8) }, StatDelta::new(0, 3, -1)),
        PartDef::new("eye_snail", "Snail Stalks", Snail, StatDelta::new(0, -2, 2)),
        PartDef::new("eye_vertical", "Slit Eyes", Vertical, StatDelta::new(1, 1, 0)),
        PartDef::new("eye_visor", "Visor", Visor, StatDelta::new(0, 0, 2)),
        PartDef::new("eye_laser", "Laser Eyes", Laser, StatDelta::new(3, 0, -1)),
        PartDef::new("eye_hypno", "Hypno Eyes", Hypno, StatDelta::new(0, 2, 0)),
        PartDef::new("eye_matrix", "Matrix Eyes", Matrix, StatDelta::new(1, 2, -1)),
        PartDef::new("eye_glowing", "Glowing Eyes", Glowing, StatDelta::new(1, 1, 0)),
        PartDef::new("eye_scanner", "Scanner", Scanner, StatDelta::new(0, 2, 1)),
    ]
}

fn mouth_parts() -> Vec<PartDef<MouthStyle>> {
    use MouthStyle::*;
    vec![
        PartDef::new("mouth_smile", "Smile", Smile, StatDelta::ZERO),
        PartDef::new("mouth_frown", "Frown", Frown, StatDelta::new(0, 0, 1)),
        PartDef::new("mouth_neutral", "Neutral", Neutral, StatDelta::ZERO),
        PartDef::new("mouth_open", "Open Mouth", Open, StatDelta::new(0, 1, 0)),
        PartDef::new("mouth_tongue", "Tongue Out", Tongue, StatDelta::new(0, 1, -1)),
        PartDef::new("mouth_cat", "Cat Mouth", Cat, StatDelta::new(0, 2, 0)),
        PartDef::new("mouth_dog", "Dog Mouth", Dog, StatDelta::new(1, 1, 0)),
        PartDef::new("mouth_beak", "Beak", Beak, StatDelta::new(1, 0, 1)),
        PartDef::new("mouth_rabbit", "Buck Teeth", Rabbit, StatDelta::new(0, 2, -1)),
        PartDef::new("mouth_snout", "Snout", Snout, StatDelta::new(1, 0, 1)),
        PartDef::new("mouth_fangs", "Fangs", Fangs, StatDelta::new(3, 0, 0)),
        PartDef::new("mouth_tusks", "Tusks", Tusks, StatDelta::new(2, -1, 1)),
        PartDef::new("mouth_toothy", "Shark Teeth", Toothy, StatDelta::new(4, 0, -1)),
        PartDef::new("mouth_leech", "Leech Maw", Leech, StatDelta::new(2, 0, 0).with_health(5)),
        PartDef::new("mouth_gaping", "Gaping Maw", Gaping, StatDelta::new(3, -1, -1)),
        PartDef::new("mouth_speaker", "Speaker Grille", Speaker, StatDelta::new(0, 0, 2)),
        PartDef::new("mouth_vent", "Exhaust Vent", Vent, StatDelta::new(0, 1, 1)),
        PartDef::new("mouth_stitch", "Stitched", Stitch, StatDelta::new(0, 0, 2)),
        PartDef::new("mouth_zipper", "Zipper", Zipper, StatDelta::new(0, 0, 1)),
        PartDef::new("mouth_void", "Void", Void, StatDelta::new(2, 0, 0)),
        PartDef::new("mouth_mustache", "Handlebar", Mustache, StatDelta::new(1, 0, 0)),
    ]
}

fn arm_parts() -> Vec<PartDef<ArmStyle>> {
    use ArmStyle::*;
    vec![
        PartDef::new("arm_small", "Stick Arms", Small, StatDelta::ZERO),
        PartDef::new("arm_none", "No Arms", None, StatDelta::new(-2, 2, 0)),
        PartDef::new("arm_noodle", "Noodle Arms", Noodle, StatDelta::new(-1, 1, 0)),
        PartDef::new("arm_long", "Long Arms", Long, StatDelta::new(1, 0, 0)),
        PartDef::new("arm_fat", "Chunky Arms", Fat, StatDelta::new(2, -1, 1)),
        PartDef::new("arm_muscle", "Brawny Arms", Muscle, StatDelta::new(3, 0, 0)),
        PartDef::new("arm_ripped", "Ripped Arms", Ripped, StatDelta::new(3, 1, -1)),
        PartDef::new("arm_hulk", "Massive Arms", Hulk, StatDelta::new(5, -2, 1)),
        PartDef::new("arm_gloves", "Boxing Gloves", Gloves, StatDelta::new(3, 0, 1)),
        PartDef::new("arm_knuckles", "Brass Knuckles", Knuckles, StatDelta::new(4, 0, 0)),
        PartDef::new("arm_tentacle", "Tentacles", Tentacle, StatDelta::new(1, 1, 0)),
        PartDef::new("arm_claws", "Claws", Claws, StatDelta::new(3, 1, 0)),
        PartDef::new("arm_wings", "Wing Arms", Wings, StatDelta::new(0, 3, 0)),
        PartDef::new("arm_fins", "Fins", Fins, StatDelta::new(0, 2, 0)),
        PartDef::new("arm_vines", "Thorn Vines", Vines, StatDelta::new(1, 0, 1)),
        PartDef::new("arm_slug", "Slug Nubs", Slug, StatDelta::new(-1, -1, 2)),
        PartDef::new("arm_robot", "Robot Arms", Robot, StatDelta::new(2, 0, 2)),
        PartDef::new("arm_drill", "Drills", Drill, StatDelta::new(4, -1, 0)),
        PartDef::new("arm_magnet", "Magnets", Magnet, StatDelta::new(1, 0, 2)),
        PartDef::new("arm_shield", "Shields", Shield, StatDelta::new(0, -1, 5)),
        PartDef::new("arm_cannon", "Cannons", Cannon, StatDelta::new(5, -1, -1)),
        PartDef::new("arm_saw", "Buzz Saws", Saw, StatDelta::new(4, 0, -1)),
    ]
}

fn leg_parts() -> Vec<PartDef<LegStyle>> {
    use LegStyle::*;
    vec![
        PartDef::new("leg_stumpy", "Stumpy Legs", Stumpy, StatDelta::ZERO),
        PartDef::new("leg_none", "No Legs", None, StatDelta::new(0, -3, 1)),
        PartDef::new("leg_human", "Human Legs", Human, StatDelta::new(1, 1, 0)),
        PartDef::new("leg_stick", "Stick Legs", Stick, StatDelta::new(0, 2, -1)),
        PartDef::new("leg_fat", "Tree Trunks", Fat, StatDelta::new(1, -1, 2)),
        PartDef::new("leg_cat", "Cat Legs", Cat, StatDelta::new(0, 3, 0)),
        PartDef::new("leg_cheetah", "Cheetah Legs", Cheetah, StatDelta::new(0, 5, -1)),
        PartDef::new("leg_rabbit", "Rabbit Feet", Rabbit, StatDelta::new(0, 4, 0)),
        PartDef::new("leg_wheels", "Wheels", Wheels, StatDelta::new(0, 4, 0)),
        PartDef::new("leg_springs", "Springs", Springs, StatDelta::new(0, 3, 1)),
        PartDef::new("leg_spider", "Spider Legs", Spider, StatDelta::new(1, 3, 0)),
        PartDef::new("leg_tentacles", "Tentacle Base", Tentacles, StatDelta::new(1, 1, 1)),
        PartDef::new("leg_slime", "Slime Trail", Slime, StatDelta::new(0, -2, 3)),
        PartDef::new("leg_hooves", "Hooves", Hooves, StatDelta::new(2, 2, 0)),
        PartDef::new("leg_clawed", "Raptor Legs", Clawed, StatDelta::new(2, 2, -1)),
        PartDef::new("leg_roots", "Roots", Roots, StatDelta::new(0, -3, 4).with_health(10)),
        PartDef::new("leg_walker", "Walker Struts", Walker, StatDelta::new(1, 1, 1)),
        PartDef::new("leg_treads", "Tank Treads", Treads, StatDelta::new(1, -1, 4)),
        PartDef::new("leg_jet", "Jet Thrusters", Jet, StatDelta::new(0, 5, -2)),
        PartDef::new("leg_antigrav", "Anti-Grav Pad", Antigrav, StatDelta::new(0, 4, 0)),
        PartDef::new("leg_mech", "Mech Legs", Mech, StatDelta::new(2, -1, 3)),
        PartDef::new("leg_skates", "Roller Skates", Skates, StatDelta::new(0, 4, -1)),
    ]
}

fn accessory_parts() -> Vec<PartDef<Accessory>> {
    use AccessoryKind::*;
    let part = |id: &str, name: &str, kind: AccessoryKind, stats: StatDelta| {
        PartDef::new(id, name, Accessory::new(kind), stats)
    };
    vec![
        part("none", "None", None, StatDelta::ZERO),
        part("wings_bat", "Bat Wings", BatWings, StatDelta::new(0, 2, 0)),
        part("wings_angel", "Angel Wings", AngelWings, StatDelta::new(0, 2, 1)),
        part("cape", "Cape", Cape, StatDelta::new(1, 1, 0)),
        part("jetpack", "Jetpack", Jetpack, StatDelta::new(0, 3, 0)),
        part("spikes", "Spikes", Spikes, StatDelta::new(0, 0, 2)),
        part("shell", "Shell", Shell, StatDelta::new(0, -2, 4).with_health(15)),
        part("backpack", "Backpack", Backpack, StatDelta::new(0, 0, 1)),
        part("magic", "Magic Aura", MagicAura, StatDelta::new(1, 1, 1)),
        part("tophat", "Top Hat", TopHat, StatDelta::new(0, 0, 1)),
        part("cowboy", "Cowboy Hat", Cowboy, StatDelta::new(1, 1, 0)),
        part("crown", "Crown", Crown, StatDelta::new(1, 1, 1)),
        part("helmet", "Helmet", Helmet, StatDelta::new(0, -1, 3)),
        part("horns", "Horns", Horns, StatDelta::new(2, 0, 0)),
        part("antenna", "Antenna", Antenna, StatDelta::new(0, 2, 0)),
        part("halo", "Halo", Halo, StatDelta::new(0, 0, 2)),
        part("flower", "Flower", Flower, StatDelta::ZERO),
        part("glasses", "Shades", Glasses, StatDelta::new(0, 1, 0)),
        part("monocle", "Monocle", Monocle, StatDelta::new(1, 0, 0)),
        part("mask", "Bandit Mask", Mask, StatDelta::new(1, 1, 0)),
        part("mustache", "Mustache", Mustache, StatDelta::new(1, 0, 0)),
        part("eyepatch", "Eyepatch", Eyepatch, StatDelta::new(2, -1, 0)),
        part("flies", "Flies", Flies, StatDelta::new(0, 0, -1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<R>(catalog: &Catalog<R>) {
        let ids: HashSet<_> = catalog.ids().collect();
        assert_eq!(
            ids.len(),
            catalog.len(),
            "duplicate ids in {} catalog",
            catalog.category().display_name()
        );
    }

    #[test]
    fn test_catalogs_non_empty_and_unique() {
        let c = Catalogs::standard();
        assert!(!c.body.is_empty());
        assert!(!c.eyes.is_empty());
        assert!(!c.mouth.is_empty());
        assert!(!c.arms.is_empty());
        assert!(!c.legs.is_empty());
        assert!(!c.accessory.is_empty());
        assert_unique(&c.body);
        assert_unique(&c.eyes);
        assert_unique(&c.mouth);
        assert_unique(&c.arms);
        assert_unique(&c.legs);
        assert_unique(&c.accessory);
    }

    #[test]
    fn test_body_catalog_layout() {
        let body = &Catalogs::standard().body;
        assert_eq!(body.len(), 4 + 10 + 10 + 10 + 10 + 7);
        assert_eq!(body.default_entry().map(|e| e.id.as_str()), Some("basic_round"));

        let star = body.get("star_7").unwrap();
        assert_eq!(star.name, "Heptastar");
        assert_eq!(star.render, BodyShape::Star { points: Some(7) });
        assert_eq!(star.stats, StatDelta::new(1, 3, -1));

        let rock = body.get("rock_10").unwrap();
        assert_eq!(rock.name, "Mountain");
        assert_eq!(rock.stats, StatDelta::new(1, -3, 7));

        let poly = body.get("poly_12").unwrap();
        assert_eq!(poly.stats, StatDelta::new(3, -3, 6));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let eyes = &Catalogs::standard().eyes;
        assert_eq!(eyes.resolve("eye_laser").unwrap().id, "eye_laser");
        assert_eq!(eyes.resolve("eye_telescope").unwrap().id, "eye_dots");
        assert_eq!(eyes.payload("nope"), EyeStyle::Dots);
        assert_eq!(eyes.delta("nope"), StatDelta::ZERO);
    }

    #[test]
    fn test_empty_catalog_never_panics() {
        let empty: Catalog<LegStyle> = Catalog::new(Category::Legs, Vec::new());
        assert!(empty.resolve("leg_human").is_none());
        assert_eq!(empty.payload("leg_human"), LegStyle::Stumpy);
        assert_eq!(empty.delta("leg_human"), StatDelta::ZERO);
        assert_eq!(empty.resolved_id("leg_human"), "");
    }

    #[test]
    fn test_accessory_none_is_zero_and_undrawn() {
        let none = Catalogs::standard().accessory.default_entry().unwrap();
        assert_eq!(none.id, "none");
        assert!(none.stats.is_zero());
        assert_eq!(none.render.layer, None);
    }

    #[test]
    fn test_accessory_bonuses() {
        let acc = &Catalogs::standard().accessory;
        assert_eq!(acc.delta("horns"), StatDelta::new(2, 0, 0));
        assert_eq!(acc.delta("spikes"), StatDelta::new(0, 0, 2));
        assert_eq!(acc.delta("antenna"), StatDelta::new(0, 2, 0));
        assert_eq!(acc.delta("crown"), StatDelta::new(1, 1, 1));
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(resolve_paint("color_blue").hex, "#0074D9");
        assert_eq!(resolve_paint("color_plaid").id, "color_red");
    }
}
