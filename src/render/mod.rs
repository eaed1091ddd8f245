//! Creature rendering
//!
//! Every part routine draws in a 300×300 logical space centred on (150, 150).
//! A single uniform scale maps that space to the requested pixel size. The draw
//! order is fixed: back accessory, legs, body, arms, eyes, mouth, front
//! accessory.

pub mod accessory;
pub mod body;
pub mod canvas;
pub mod color;
pub mod eyes;
pub mod font;
pub mod limbs;
pub mod mouth;
pub mod sheet;

use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::creature::{ComposedCreature, ResolvedParts};
use crate::error::Result;

pub use canvas::{Canvas, Point};
pub use color::Color;
pub use sheet::render_gallery_sheet;

/// Side length of the logical drawing space
pub const LOGICAL_SIZE: f32 = 300.0;
/// Body centre in logical coordinates
pub const CENTER: Point = (LOGICAL_SIZE / 2.0, LOGICAL_SIZE / 2.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Backdrop used by `render_on_background` and the gallery sheet
    pub background: Color,
    /// Orbit phase of the flies accessory, in radians
    pub flies_phase: f32,
    /// Edge length of one gallery tile in pixels
    pub tile: u32,
    pub columns: u32,
    /// Default output size for single renders
    pub size: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            background: Color::hex(0xf0f0f0),
            flies_phase: 0.0,
            tile: 200,
            columns: 4,
            size: 300,
        }
    }
}

/// Render a creature on a transparent background
pub fn render(creature: &ComposedCreature, size: u32) -> RgbaImage {
    render_with(creature, size, &RenderParams::default())
}

pub fn render_with(creature: &ComposedCreature, size: u32, params: &RenderParams) -> RgbaImage {
    debug!(id = creature.id.0, size, "rendering creature");
    let mut canvas = Canvas::new(size, size);
    draw_creature(&mut canvas, &creature.parts, creature.color, params);
    canvas.into_image()
}

/// Render a creature composited over `params.background`
pub fn render_on_background(creature: &ComposedCreature, size: u32, params: &RenderParams) -> RgbaImage {
    let mut canvas = Canvas::new(size, size);
    canvas.set_fill(params.background);
    canvas.fill_rect(0.0, 0.0, size as f32, size as f32);
    draw_creature(&mut canvas, &creature.parts, creature.color, params);
    canvas.into_image()
}

/// Draw a full creature into the square starting at the canvas origin, `size`
/// pixels on a side, under the canvas' current transform.
pub fn draw_creature_at(
    canvas: &mut Canvas,
    parts: &ResolvedParts,
    color: Color,
    size: f32,
    params: &RenderParams,
) {
    canvas.save();
    let s = size / LOGICAL_SIZE;
    canvas.scale(s, s);
    draw_parts(canvas, parts, color, params);
    canvas.restore();
}

fn draw_creature(canvas: &mut Canvas, parts: &ResolvedParts, color: Color, params: &RenderParams) {
    let size = canvas.width().min(canvas.height()) as f32;
    draw_creature_at(canvas, parts, color, size, params);
}

fn draw_parts(c: &mut Canvas, parts: &ResolvedParts, color: Color, params: &RenderParams) {
    let placement = body::anchors(&parts.body).resolve();

    accessory::draw_back(c, &parts.accessory);
    limbs::draw_legs(c, &parts.legs, &placement, color);
    body::draw(c, &parts.body, color);
    limbs::draw_arms(c, &parts.arms, &placement, color);
    eyes::draw(c, &parts.eyes, placement.face);
    mouth::draw(c, &parts.mouth, placement.face);
    accessory::draw_front(c, &parts.accessory, &placement, params.flies_phase);
}

pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Builder;
    use crate::parts::{Catalogs, Category, Selection};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn preview(pairs: &[(Category, &str)]) -> ComposedCreature {
        let mut builder = Builder::new(Catalogs::standard());
        for &(category, id) in pairs {
            builder.set(category, id);
        }
        builder.preview()
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut selection = Selection::default();
        for _ in 0..10 {
            selection.randomize(Catalogs::standard(), &mut rng);
            let creature = ComposedCreature::compose(
                crate::creature::CreatureId::PREVIEW,
                &selection,
                Catalogs::standard(),
            );
            let a = render(&creature, 120);
            let b = render(&creature, 120);
            assert_eq!(a.as_raw(), b.as_raw());
        }
    }

    #[test]
    fn test_back_accessory_sits_behind_body() {
        let creature = preview(&[(Category::Accessory, "shell")]);
        let img = render(&creature, 300);
        // Body colour wins at the centre, the shell shows around it
        assert_eq!(*img.get_pixel(150, 150), creature.color.to_pixel());
        assert_eq!(*img.get_pixel(165, 225), Color::hex(0x228B22).to_pixel());
    }

    #[test]
    fn test_front_accessory_covers_eyes() {
        let creature = preview(&[(Category::Accessory, "helmet")]);
        let img = render(&creature, 300);
        assert_eq!(*img.get_pixel(130, 135), Color::hex3(0xccc).to_pixel());
    }

    #[test]
    fn test_scale_maps_logical_space() {
        let creature = preview(&[]);
        let small = render(&creature, 150);
        // Body centre lands at the image centre at any size
        assert_eq!(*small.get_pixel(75, 75), creature.color.to_pixel());
        assert_eq!(small.width(), 150);
        assert_eq!(small.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_background_fill() {
        let creature = preview(&[]);
        let params = RenderParams::default();
        let img = render_on_background(&creature, 100, &params);
        assert_eq!(*img.get_pixel(0, 0), params.background.to_pixel());
    }

    #[test]
    fn test_every_part_renders_at_any_size() {
        let catalogs = Catalogs::standard();
        for category in Category::ALL {
            for id in catalogs.ids(category) {
                let creature = preview(&[(category, id.as_str())]);
                for size in [1, 100, 300, 600] {
                    let img = render(&creature, size);
                    assert_eq!(img.dimensions(), (size, size));
                }
            }
        }
    }

    #[test]
    fn test_params_from_partial_json() {
        let params: RenderParams = serde_json::from_str(r#"{"tile": 64}"#).unwrap();
        assert_eq!(params.tile, 64);
        assert_eq!(params.columns, 4);
        assert_eq!(params.background, Color::hex(0xf0f0f0));
    }
}
