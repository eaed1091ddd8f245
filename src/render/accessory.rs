//! Accessories. Back pieces draw behind everything at the body centre; front
//! pieces draw last and follow the face when a body moves it.

use std::f32::consts::{PI, TAU};

use crate::parts::{Accessory, AccessoryKind, AccessoryLayer};

use super::body::Placement;
use super::canvas::{Canvas, Point};
use super::color::Color;
use super::CENTER;

const YELLOW: Color = Color::rgb(255, 255, 0);
const ORANGE: Color = Color::rgb(255, 165, 0);
const CYAN: Color = Color::rgb(0, 255, 255);

pub fn draw_back(c: &mut Canvas, accessory: &Accessory) {
    if !accessory.draws_on(AccessoryLayer::Back) {
        return;
    }
    c.save();
    c.translate(CENTER.0, CENTER.1);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    back(c, accessory.kind);
    c.restore();
}

/// `phase` positions the flies along their orbit
pub fn draw_front(c: &mut Canvas, accessory: &Accessory, placement: &Placement, phase: f32) {
    if !accessory.draws_on(AccessoryLayer::Front) {
        return;
    }
    let (dx, dy) = placement.face_shift();
    c.save();
    c.translate(CENTER.0 + dx, CENTER.1 + dy);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    front(c, accessory.kind, phase);
    c.restore();
}

fn filled(c: &mut Canvas, points: &[Point]) {
    c.begin_path();
    c.polygon(points);
    c.fill();
}

fn back(c: &mut Canvas, kind: AccessoryKind) {
    match kind {
        AccessoryKind::BatWings => {
            c.set_fill(Color::INK);
            for s in [-1.0, 1.0] {
                c.save();
                c.scale(s, 1.0);
                c.begin_path();
                c.move_to(20.0, -20.0);
                c.quad_to(80.0, -100.0, 150.0, -60.0);
                c.quad_to(120.0, 20.0, 60.0, 0.0);
                c.line_to(20.0, -20.0);
                c.fill();
                c.restore();
            }
        }
        AccessoryKind::AngelWings => {
            c.set_fill(Color::WHITE);
            c.set_stroke(Color::hex3(0xddd));
            for s in [1.0, -1.0] {
                c.save();
                c.scale(s, 1.0);
                c.begin_path();
                c.move_to(20.0, -20.0);
                c.quad_to(100.0, -80.0, 140.0, -40.0);
                c.quad_to(120.0, 40.0, 40.0, 0.0);
                c.fill();
                c.stroke();
                c.restore();
            }
        }
        AccessoryKind::Cape => {
            c.set_fill(Color::hex3(0xd00));
            c.begin_path();
            c.move_to(-40.0, -40.0);
            c.line_to(40.0, -40.0);
            c.line_to(60.0, 100.0);
            c.quad_to(0.0, 120.0, -60.0, 100.0);
            c.fill();
        }
        AccessoryKind::Jetpack => {
            c.set_fill(Color::hex3(0xccc));
            for x in [-40.0, 10.0] {
                c.begin_path();
                c.rect(x, -60.0, 30.0, 80.0);
                c.fill();
                c.stroke();
            }
            c.set_fill(ORANGE);
            filled(c, &[(-25.0, 20.0), (-35.0, 50.0), (-15.0, 50.0)]);
            filled(c, &[(25.0, 20.0), (15.0, 50.0), (35.0, 50.0)]);
        }
        AccessoryKind::Spikes => {
            c.set_fill(Color::hex3(0x555));
            for i in 0..3 {
                let y = i as f32 * 40.0;
                for s in [-1.0, 1.0] {
                    filled(c, &[(60.0 * s, y - 40.0), (90.0 * s, y - 20.0), (60.0 * s, y)]);
                }
            }
        }
        AccessoryKind::Shell => {
            c.set_fill(Color::hex(0x228B22));
            c.set_stroke(Color::hex(0x006400));
            c.set_line_width(4.0);
            c.begin_path();
            c.ellipse(0.0, 0.0, 75.0, 85.0, 0.0, 0.0, TAU, false);
            c.fill();
            c.stroke();
            c.begin_path();
            c.move_to(0.0, -85.0);
            c.line_to(0.0, 85.0);
            c.move_to(-75.0, 0.0);
            c.line_to(75.0, 0.0);
            c.stroke();
        }
        AccessoryKind::Backpack => {
            c.set_fill(Color::hex(0x8B4513));
            c.begin_path();
            c.round_rect(-50.0, -50.0, 100.0, 100.0, 10.0);
            c.fill();
            // Pocket
            c.set_fill(Color::hex(0xD2691E));
            c.begin_path();
            c.round_rect(-40.0, 0.0, 80.0, 40.0, 5.0);
            c.fill();
        }
        AccessoryKind::MagicAura => {
            c.set_stroke(CYAN);
            c.set_line_width(3.0);
            for r in [90.0, 100.0] {
                c.begin_path();
                c.circle(0.0, 0.0, r);
                c.stroke();
            }
        }
        _ => {}
    }
}

fn front(c: &mut Canvas, kind: AccessoryKind, phase: f32) {
    match kind {
        AccessoryKind::TopHat => {
            c.set_fill(Color::hex3(0x111));
            c.fill_rect(-40.0, -90.0, 80.0, 60.0);
            c.fill_rect(-60.0, -30.0, 120.0, 10.0);
            // Ribbon
            c.set_fill(Color::hex3(0xf00));
            c.fill_rect(-40.0, -40.0, 80.0, 10.0);
        }
        AccessoryKind::Cowboy => {
            c.set_fill(Color::hex(0x8B4513));
            for (start, end) in [(PI, 0.0), (0.0, PI)] {
                c.begin_path();
                c.ellipse(0.0, -40.0, 70.0, 20.0, 0.0, start, end, false);
                c.fill();
            }
            c.fill_rect(-40.0, -80.0, 80.0, 50.0);
        }
        AccessoryKind::Crown => {
            c.set_fill(Color::GOLD);
            c.set_stroke(Color::hex(0xDAA520));
            c.begin_path();
            c.polygon(&[
                (-40.0, -60.0),
                (-30.0, -90.0),
                (-20.0, -70.0),
                (0.0, -95.0),
                (20.0, -70.0),
                (30.0, -90.0),
                (40.0, -60.0),
                (40.0, -50.0),
                (-40.0, -50.0),
            ]);
            c.fill();
            c.stroke();
        }
        AccessoryKind::Helmet => {
            c.set_fill(Color::hex3(0xccc));
            c.set_stroke(Color::hex3(0x555));
            c.begin_path();
            c.arc(0.0, -20.0, 65.0, PI, 0.0, false);
            c.line_to(65.0, 20.0);
            c.line_to(0.0, 50.0);
            c.line_to(-65.0, 20.0);
            c.close_path();
            c.fill();
            c.stroke();
            // Slit
            c.set_fill(Color::hex3(0x111));
            c.fill_rect(-40.0, -10.0, 80.0, 5.0);
        }
        AccessoryKind::Horns => {
            c.set_fill(Color::hex3(0xccc));
            for s in [-1.0, 1.0] {
                c.begin_path();
                c.move_to(40.0 * s, -50.0);
                c.quad_to(60.0 * s, -80.0, 30.0 * s, -90.0);
                c.line_to(20.0 * s, -50.0);
                c.fill();
            }
        }
        AccessoryKind::Antenna => {
            c.set_stroke(Color::hex3(0x555));
            c.begin_path();
            c.move_to(0.0, -60.0);
            c.line_to(0.0, -100.0);
            c.stroke();
            c.set_fill(Color::hex3(0x0f0));
            c.begin_path();
            c.circle(0.0, -100.0, 5.0);
            c.fill();
        }
        AccessoryKind::Halo => {
            c.set_stroke(YELLOW);
            c.set_line_width(4.0);
            c.begin_path();
            c.ellipse(0.0, -90.0, 40.0, 10.0, 0.0, 0.0, TAU, false);
            c.stroke();
        }
        AccessoryKind::Flower => {
            c.set_fill(Color::rgb(255, 192, 203));
            c.begin_path();
            c.circle(40.0, -60.0, 15.0);
            c.fill();
            c.set_fill(YELLOW);
            c.begin_path();
            c.circle(40.0, -60.0, 5.0);
            c.fill();
        }
        AccessoryKind::Glasses => {
            c.set_fill(Color::BLACK.alpha(0.8));
            c.fill_rect(-45.0, -10.0, 40.0, 20.0);
            c.fill_rect(5.0, -10.0, 40.0, 20.0);
            c.begin_path();
            c.move_to(-5.0, 0.0);
            c.line_to(5.0, 0.0);
            c.stroke();
        }
        AccessoryKind::Monocle => {
            c.set_stroke(Color::GOLD);
            c.set_fill(Color::rgb(200, 250, 255).alpha(0.3));
            c.begin_path();
            c.circle(20.0, 0.0, 15.0);
            c.fill();
            c.stroke();
            // Chain
            c.begin_path();
            c.move_to(35.0, 0.0);
            c.line_to(35.0, 60.0);
            c.stroke();
        }
        AccessoryKind::Mask => {
            c.set_fill(Color::hex3(0x111));
            filled(
                c,
                &[(-50.0, -10.0), (50.0, -10.0), (40.0, 20.0), (0.0, 10.0), (-40.0, 20.0)],
            );
            // Eye holes go through to whatever was drawn beneath
            c.begin_path();
            c.circle(-20.0, 0.0, 8.0);
            c.circle(20.0, 0.0, 8.0);
            c.erase();
        }
        AccessoryKind::Mustache => {
            c.set_fill(Color::INK);
            c.begin_path();
            for s in [1.0, -1.0] {
                c.move_to(0.0, 20.0);
                c.quad_to(15.0 * s, 10.0, 30.0 * s, 25.0);
                c.quad_to(15.0 * s, 20.0, 0.0, 20.0);
            }
            c.fill();
        }
        AccessoryKind::Eyepatch => {
            c.set_fill(Color::BLACK);
            c.begin_path();
            c.circle(-20.0, 0.0, 15.0);
            c.fill();
            c.set_stroke(Color::BLACK);
            c.set_line_width(1.0);
            c.begin_path();
            c.move_to(-30.0, -10.0);
            c.line_to(40.0, -40.0);
            c.stroke();
        }
        AccessoryKind::Flies => {
            c.set_fill(Color::BLACK);
            for (x, y) in fly_positions(phase) {
                c.fill_rect(x, y, 3.0, 3.0);
            }
        }
        _ => {}
    }
}

/// Five flies orbiting 50 units around a point above the head
pub fn fly_positions(phase: f32) -> [Point; 5] {
    std::array::from_fn(|i| {
        let a = phase + i as f32;
        (a.cos() * 50.0, a.sin() * 50.0 - 50.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::body::Anchors;

    #[test]
    fn test_layers_are_exclusive() {
        let placement = Anchors::default().resolve();
        let mut c = Canvas::new(300, 300);
        draw_front(&mut c, &Accessory::new(AccessoryKind::Shell), &placement, 0.0);
        draw_back(&mut c, &Accessory::new(AccessoryKind::TopHat));
        assert!(c.image().pixels().all(|p| p[3] == 0));

        draw_back(&mut c, &Accessory::new(AccessoryKind::Shell));
        assert_eq!(*c.image().get_pixel(120, 120), Color::hex(0x228B22).to_pixel());
    }

    #[test]
    fn test_mask_erases_eye_holes() {
        let placement = Anchors::default().resolve();
        let mut c = Canvas::new(300, 300);
        c.set_fill(Color::WHITE);
        c.fill_rect(0.0, 0.0, 300.0, 300.0);
        draw_front(&mut c, &Accessory::new(AccessoryKind::Mask), &placement, 0.0);
        assert_eq!(c.image().get_pixel(130, 150)[3], 0);
        assert_eq!(*c.image().get_pixel(150, 142), Color::hex3(0x111).to_pixel());
    }

    #[test]
    fn test_front_follows_face_shift() {
        let mut raised = Anchors::default();
        raised.face = Some((0.0, -30.0));
        let mut c = Canvas::new(300, 300);
        draw_front(&mut c, &Accessory::new(AccessoryKind::Antenna), &raised.resolve(), 0.0);
        // Tip moves from (150, 50) up to (150, 30); the stem now ends at y = 70
        assert_eq!(*c.image().get_pixel(150, 30), Color::hex3(0x0f0).to_pixel());
        assert_eq!(c.image().get_pixel(150, 85)[3], 0);
    }

    #[test]
    fn test_fly_positions_depend_on_phase() {
        let a = fly_positions(0.0);
        assert_eq!(a[0], (50.0, -50.0));
        assert_ne!(fly_positions(1.0)[0], a[0]);
        assert_eq!(fly_positions(1.0)[0], a[1]);
    }
}
