//! Contact sheet of saved creatures, one labelled tile each

use image::RgbaImage;
use tracing::debug;

use crate::creature::ComposedCreature;
use crate::error::{ForgeError, Result};

use super::canvas::Canvas;
use super::color::Color;
use super::font::GLYPH_HEIGHT;
use super::{draw_creature_at, RenderParams};

/// Largest sheet edge, in pixels
pub const MAX_SHEET_EDGE: u32 = 16_384;

/// Text height in pixels for a tile of the given size; whole multiples of
/// the glyph grid keep the bitmap font crisp.
fn label_height(tile: u32) -> u32 {
    (tile / 16 / GLYPH_HEIGHT).max(1) * GLYPH_HEIGHT
}

/// Longest prefix of `text` that fits in `width` pixels at `height`
fn fit_label(text: &str, width: f32, height: f32) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if Canvas::text_width(&out, height) > width {
            out.pop();
            break;
        }
    }
    out
}

pub fn render_gallery_sheet(creatures: &[ComposedCreature], tile: u32, columns: u32) -> Result<RgbaImage> {
    let params = RenderParams {
        tile,
        columns,
        ..RenderParams::default()
    };
    render_gallery_sheet_with(creatures, &params)
}

/// Lay creatures out left to right, top to bottom. Each cell is the creature
/// render with its name and stats underneath.
pub fn render_gallery_sheet_with(creatures: &[ComposedCreature], params: &RenderParams) -> Result<RgbaImage> {
    let tile = params.tile.max(1);
    let columns = params.columns.max(1);
    let label = label_height(tile);
    let too_large = || ForgeError::SheetTooLarge {
        count: creatures.len(),
        tile,
    };

    let count = u32::try_from(creatures.len().max(1)).map_err(|_| too_large())?;
    let cols = columns.min(count);
    let rows = count.div_ceil(cols);

    let cell_h = label
        .checked_mul(3)
        .and_then(|l| l.checked_add(tile))
        .ok_or_else(too_large)?;
    let width = cols.checked_mul(tile).ok_or_else(too_large)?;
    let height = rows.checked_mul(cell_h).ok_or_else(too_large)?;
    if width > MAX_SHEET_EDGE || height > MAX_SHEET_EDGE {
        return Err(too_large());
    }
    debug!(count = creatures.len(), cols, rows, "rendering gallery sheet");

    let mut c = Canvas::new(width, height);
    c.set_fill(params.background);
    c.fill_rect(0.0, 0.0, c.width() as f32, c.height() as f32);

    let text_h = label as f32;
    for (i, creature) in creatures.iter().enumerate() {
        let col = i as u32 % cols;
        let row = i as u32 / cols;
        let (x, y) = ((col * tile) as f32, (row * cell_h) as f32);

        c.save();
        c.translate(x, y);
        draw_creature_at(&mut c, &creature.parts, creature.color, tile as f32, params);

        let name = if creature.name.trim().is_empty() {
            format!("#{}", creature.id.0)
        } else {
            creature.name.clone()
        };
        let stats = format!(
            "{}/{}/{}",
            creature.stats.strength, creature.stats.speed, creature.stats.defense
        );
        let room = tile as f32 - 4.0;
        c.set_fill(Color::INK);
        c.fill_text_centered(&fit_label(&name, room, text_h), tile as f32 / 2.0, tile as f32 + text_h, text_h);
        c.set_fill(Color::INK.mix(params.background, 0.4));
        c.fill_text_centered(
            &fit_label(&stats, room, text_h),
            tile as f32 / 2.0,
            tile as f32 + text_h * 2.2,
            text_h,
        );
        c.restore();
    }

    Ok(c.into_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureId;
    use crate::parts::{Catalogs, Selection};

    fn creature(id: u64, name: &str) -> ComposedCreature {
        let selection = Selection::default().with_name(name);
        ComposedCreature::compose(CreatureId(id), &selection, Catalogs::standard())
    }

    #[test]
    fn test_sheet_layout() {
        let roster: Vec<_> = (1..=5).map(|i| creature(i, "Blob")).collect();
        let sheet = render_gallery_sheet(&roster, 100, 3).unwrap();
        let label = label_height(100);
        assert_eq!(sheet.width(), 300);
        assert_eq!(sheet.height(), 2 * (100 + label * 3));
        // Last cell of the second row stays empty background
        let bg = RenderParams::default().background.to_pixel();
        assert_eq!(*sheet.get_pixel(250, 100 + label * 3 + 50), bg);
        // First cell has the body in the middle of its tile
        assert_eq!(*sheet.get_pixel(50, 50), roster[0].color.to_pixel());
    }

    #[test]
    fn test_empty_sheet_is_one_blank_tile() {
        let sheet = render_gallery_sheet(&[], 64, 4).unwrap();
        assert_eq!(sheet.width(), 64);
        assert!(sheet.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_oversized_sheets_are_rejected() {
        let roster = vec![creature(1, "Blob"), creature(2, "Glob")];
        let huge_tile = RenderParams {
            tile: u32::MAX,
            columns: 2,
            ..RenderParams::default()
        };
        assert!(matches!(
            render_gallery_sheet_with(&roster, &huge_tile),
            Err(ForgeError::SheetTooLarge { count: 2, .. })
        ));
        // Fits in u32 but is far past any sensible image size
        assert!(matches!(
            render_gallery_sheet(&roster, 10_000, 2),
            Err(ForgeError::SheetTooLarge { .. })
        ));
        assert!(render_gallery_sheet(&roster, 64, u32::MAX).is_ok());
    }

    #[test]
    fn test_fit_label_truncates() {
        assert_eq!(fit_label("ABCDEFGH", 6.0 * 3.0 - 1.0, 7.0), "ABC");
        assert_eq!(fit_label("AB", 100.0, 7.0), "AB");
    }
}
