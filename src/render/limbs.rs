//! Arm and leg routines.
//!
//! Each limb is drawn in a local frame whose origin is its anchor. The right
//! side is authored directly; the left side is the same drawing under a
//! horizontal mirror. Leg styles that are a single piece (treads, slime,
//! antigrav) draw once, centred between the two leg anchors.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::parts::{ArmStyle, LegStyle};

use super::body::Placement;
use super::canvas::{Canvas, Glow, LineCap, Point};
use super::color::Color;
use super::CENTER;

const LIMB_WIDTH: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Run `f` in the mirrored local frame of the given anchor
fn in_frame(c: &mut Canvas, anchor: Point, side: Side, color: Color, f: impl FnOnce(&mut Canvas)) {
    c.save();
    c.translate(CENTER.0 + anchor.0, CENTER.1 + anchor.1);
    if side == Side::Left {
        c.scale(-1.0, 1.0);
    }
    c.set_fill(color);
    c.set_stroke(color);
    c.set_line_width(LIMB_WIDTH);
    c.set_line_cap(LineCap::Butt);
    f(c);
    c.restore();
}

fn polyline(c: &mut Canvas, points: &[Point]) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };
    c.begin_path();
    c.move_to(x0, y0);
    for &(x, y) in rest {
        c.line_to(x, y);
    }
    c.stroke();
}

fn disc(c: &mut Canvas, x: f32, y: f32, r: f32) {
    c.begin_path();
    c.circle(x, y, r);
    c.fill();
}

// ---- arms ---------------------------------------------------------------------

pub fn draw_arms(c: &mut Canvas, style: &ArmStyle, placement: &Placement, color: Color) {
    if *style == ArmStyle::None {
        return;
    }
    for (anchor, side) in [(placement.arm_l, Side::Left), (placement.arm_r, Side::Right)] {
        in_frame(c, anchor, side, color, |c| arm(c, style));
    }
}

fn arm(c: &mut Canvas, style: &ArmStyle) {
    match style {
        ArmStyle::None => {}
        ArmStyle::Small | ArmStyle::Unknown => polyline(c, &[(0.0, 0.0), (20.0, 10.0)]),
        ArmStyle::Noodle => {
            c.begin_path();
            c.move_to(0.0, 0.0);
            c.quad_to(10.0, -20.0, 30.0, 0.0);
            c.stroke();
        }
        ArmStyle::Long => polyline(c, &[(0.0, -10.0), (50.0, 30.0)]),
        ArmStyle::Fat => {
            c.set_line_width(20.0);
            polyline(c, &[(0.0, 0.0), (30.0, 10.0)]);
        }
        ArmStyle::Muscle => {
            c.set_line_width(15.0);
            polyline(c, &[(0.0, 0.0), (30.0, -20.0), (40.0, -50.0)]);
        }
        ArmStyle::Ripped => {
            c.set_line_width(12.0);
            polyline(c, &[(0.0, 10.0), (30.0, 0.0), (50.0, 10.0)]);
        }
        ArmStyle::Hulk => {
            c.set_line_width(25.0);
            c.set_line_cap(LineCap::Round);
            polyline(c, &[(0.0, 10.0), (50.0, 30.0)]);
        }
        ArmStyle::Gloves => {
            polyline(c, &[(0.0, 0.0), (30.0, 10.0)]);
            c.set_fill(Color::RED);
            c.begin_path();
            c.circle(35.0, 15.0, 15.0);
            c.fill();
            c.stroke();
        }
        ArmStyle::Knuckles => {
            polyline(c, &[(0.0, 0.0), (30.0, 10.0)]);
            c.set_fill(Color::GOLD);
            c.set_stroke(Color::INK);
            c.set_line_width(2.0);
            c.fill_rect(30.0, 5.0, 10.0, 20.0);
            c.stroke_rect(30.0, 5.0, 10.0, 20.0);
        }
        ArmStyle::Tentacle => {
            c.set_line_cap(LineCap::Round);
            c.begin_path();
            c.move_to(0.0, 10.0);
            c.cubic_to(20.0, 40.0, 40.0, -20.0, 60.0, 20.0);
            c.stroke();
        }
        ArmStyle::Claws => {
            c.set_line_width(8.0);
            polyline(c, &[(0.0, 0.0), (30.0, 15.0)]);
            c.set_stroke(Color::INK);
            c.set_line_width(3.0);
            for i in 0..3 {
                polyline(c, &[(30.0, 15.0), (35.0 + 5.0 * i as f32, 25.0)]);
            }
        }
        ArmStyle::Wings => {
            c.set_stroke(Color::INK);
            c.set_line_width(2.0);
            c.begin_path();
            c.polygon(&[
                (0.0, -20.0),
                (70.0, -60.0),
                (50.0, 20.0),
                (30.0, 10.0),
                (20.0, 30.0),
                (0.0, 10.0),
            ]);
            c.fill();
            c.stroke();
        }
        ArmStyle::Fins => {
            c.begin_path();
            c.move_to(0.0, 0.0);
            c.quad_to(40.0, -10.0, 30.0, 40.0);
            c.quad_to(10.0, 20.0, 0.0, 20.0);
            c.fill();
            c.stroke();
        }
        ArmStyle::Vines => {
            c.set_stroke(Color::hex(0x2ECC40));
            c.set_line_width(4.0);
            c.begin_path();
            c.move_to(-10.0, 0.0);
            c.cubic_to(10.0, 30.0, 30.0, -10.0, 50.0, 40.0);
            c.stroke();
            // Thorn
            c.set_fill(Color::BLACK);
            c.begin_path();
            c.polygon(&[(20.0, 10.0), (30.0, 0.0), (15.0, 0.0)]);
            c.fill();
        }
        ArmStyle::Slug => {
            c.set_line_width(12.0);
            c.set_line_cap(LineCap::Round);
            polyline(c, &[(0.0, 20.0), (20.0, 40.0)]);
        }
        ArmStyle::Robot => {
            c.set_stroke(Color::hex3(0x999));
            c.set_line_width(12.0);
            polyline(c, &[(0.0, 0.0), (20.0, 0.0)]);
            c.set_fill(Color::hex3(0x555));
            disc(c, 20.0, 0.0, 8.0);
            polyline(c, &[(20.0, 0.0), (40.0, 10.0)]);
            c.set_stroke(Color::INK);
            c.set_line_width(4.0);
            c.stroke_rect(40.0, 5.0, 10.0, 10.0);
        }
        ArmStyle::Drill => {
            c.set_fill(Color::hex3(0xaaa));
            c.begin_path();
            c.polygon(&[(0.0, 0.0), (20.0, -10.0), (60.0, 10.0), (20.0, 30.0)]);
            c.fill();
            c.stroke();
        }
        ArmStyle::Magnet => {
            c.set_fill(Color::hex3(0xf00));
            c.set_stroke(Color::hex3(0xccc));
            c.set_line_width(2.0);
            c.translate(30.0, 0.0);
            c.scale(-1.0, 1.0);
            for y in [-15.0, 15.0] {
                c.begin_path();
                c.rect(0.0, y, 20.0, 10.0);
                c.fill();
                c.stroke();
            }
            c.set_fill(Color::hex3(0xccc));
            c.fill_rect(20.0, -15.0, 10.0, 40.0);
        }
        ArmStyle::Shield => {
            c.set_fill(Color::hex(0x0074D9));
            c.set_stroke(Color::WHITE);
            polyline(c, &[(0.0, 0.0), (20.0, 10.0)]);
            c.begin_path();
            c.circle(30.0, 10.0, 25.0);
            c.fill();
            c.stroke();
        }
        ArmStyle::Cannon => {
            c.set_fill(Color::hex3(0x111));
            c.fill_rect(0.0, -10.0, 50.0, 30.0);
        }
        ArmStyle::Saw => {
            c.set_fill(Color::hex3(0xddd));
            c.set_stroke(Color::hex3(0x888));
            polyline(c, &[(0.0, 0.0), (20.0, 10.0)]);
            c.begin_path();
            c.circle(35.0, 15.0, 20.0);
            c.fill();
            c.stroke();
            c.begin_path();
            c.circle(35.0, 15.0, 5.0);
            c.stroke();
        }
    }
}

// ---- legs ---------------------------------------------------------------------

/// Drawn once between the anchors instead of once per side
fn is_single_piece(style: &LegStyle) -> bool {
    matches!(style, LegStyle::Slime | LegStyle::Treads | LegStyle::Antigrav)
}

pub fn draw_legs(c: &mut Canvas, style: &LegStyle, placement: &Placement, color: Color) {
    if *style == LegStyle::None {
        return;
    }
    let single = is_single_piece(style);
    if !single {
        for (anchor, side) in [(placement.leg_l, Side::Left), (placement.leg_r, Side::Right)] {
            in_frame(c, anchor, side, color, |c| leg(c, style, color));
        }
    }
    if single || *style == LegStyle::Tentacles {
        in_frame(c, placement.leg_midpoint(), Side::Right, color, |c| centre_piece(c, style));
    }
}

fn leg(c: &mut Canvas, style: &LegStyle, color: Color) {
    match style {
        LegStyle::None | LegStyle::Slime | LegStyle::Treads | LegStyle::Antigrav => {}
        LegStyle::Stumpy | LegStyle::Unknown => polyline(c, &[(0.0, 0.0), (0.0, 20.0)]),
        LegStyle::Human => {
            c.set_line_width(12.0);
            polyline(c, &[(0.0, 0.0), (0.0, 60.0), (10.0, 60.0)]);
        }
        LegStyle::Stick => {
            c.set_line_width(4.0);
            polyline(c, &[(0.0, 0.0), (5.0, 60.0)]);
        }
        LegStyle::Fat => {
            c.set_line_width(25.0);
            polyline(c, &[(0.0, 0.0), (0.0, 30.0)]);
        }
        LegStyle::Cat => {
            c.begin_path();
            c.move_to(0.0, 0.0);
            c.quad_to(10.0, 20.0, 5.0, 40.0);
            c.stroke();
        }
        LegStyle::Cheetah => {
            c.set_line_width(8.0);
            polyline(c, &[(0.0, 0.0), (6.0, 20.0), (0.0, 50.0), (9.0, 55.0)]);
        }
        LegStyle::Rabbit => {
            polyline(c, &[(0.0, 0.0), (0.0, 30.0)]);
            c.set_fill(color);
            c.set_stroke(Color::INK);
            c.set_line_width(2.0);
            c.begin_path();
            c.ellipse(6.0, 35.0, 10.0, 20.0, FRAC_PI_2, 0.0, TAU, false);
            c.fill();
            c.stroke();
        }
        LegStyle::Wheels => {
            c.set_fill(Color::INK);
            disc(c, 0.0, 15.0, 15.0);
            c.set_fill(Color::hex3(0xaaa));
            disc(c, 0.0, 15.0, 5.0);
        }
        LegStyle::Springs => {
            c.set_stroke(Color::hex3(0x999));
            c.set_line_width(3.0);
            c.begin_path();
            for i in 0..6 {
                let x = if i % 2 == 0 { -10.0 } else { 10.0 };
                let y = i as f32 * 10.0;
                c.move_to(x, y);
                c.line_to(-x, y + 10.0);
            }
            c.stroke();
        }
        LegStyle::Spider => {
            c.set_line_width(4.0);
            polyline(c, &[(-20.0, 0.0), (20.0, -10.0), (30.0, 50.0)]);
            polyline(c, &[(-10.0, 0.0), (30.0, -20.0), (50.0, 40.0)]);
        }
        LegStyle::Tentacles => {
            c.set_line_cap(LineCap::Round);
            c.begin_path();
            c.move_to(-10.0, 0.0);
            c.cubic_to(10.0, 30.0, -20.0, 50.0, 20.0, 60.0);
            c.stroke();
        }
        LegStyle::Hooves => {
            c.set_line_width(12.0);
            polyline(c, &[(0.0, 0.0), (0.0, 40.0)]);
            c.set_fill(Color::hex3(0x222));
            c.fill_rect(-8.0, 40.0, 16.0, 10.0);
        }
        LegStyle::Clawed => {
            c.set_line_width(8.0);
            polyline(c, &[(0.0, 0.0), (0.0, 30.0)]);
            for toe in [(-10.0, 45.0), (0.0, 50.0), (10.0, 45.0)] {
                polyline(c, &[(0.0, 30.0), toe]);
            }
        }
        LegStyle::Roots => {
            c.set_stroke(Color::hex(0x8B4513));
            c.set_line_width(5.0);
            c.begin_path();
            c.move_to(-10.0, 0.0);
            c.quad_to(-30.0, 30.0, -50.0, 50.0);
            c.move_to(-10.0, 10.0);
            c.quad_to(10.0, 30.0, 20.0, 50.0);
            c.stroke();
        }
        LegStyle::Walker => {
            c.set_stroke(Color::hex3(0x666));
            c.set_line_width(8.0);
            polyline(c, &[(0.0, 0.0), (20.0, 30.0), (10.0, 60.0)]);
        }
        LegStyle::Jet => {
            c.set_fill(Color::hex3(0x999));
            c.begin_path();
            c.polygon(&[(0.0, 0.0), (10.0, 30.0), (-10.0, 30.0)]);
            c.fill();
            c.set_fill(Color::rgb(255, 165, 0));
            c.begin_path();
            c.polygon(&[(0.0, 30.0), (10.0, 50.0), (-10.0, 50.0)]);
            c.fill();
        }
        LegStyle::Mech => {
            c.set_fill(Color::hex3(0x444));
            c.set_stroke(Color::hex3(0x888));
            c.set_line_width(3.0);
            c.begin_path();
            c.rect(0.0, 0.0, 20.0, 25.0);
            c.rect(-5.0, 25.0, 30.0, 35.0);
            c.fill();
            c.stroke();
        }
        LegStyle::Skates => {
            polyline(c, &[(0.0, 0.0), (0.0, 40.0)]);
            c.set_fill(Color::WHITE);
            c.fill_rect(-10.0, 40.0, 20.0, 10.0);
            c.set_fill(Color::rgb(0, 255, 255));
            disc(c, -5.0, 55.0, 4.0);
            disc(c, 5.0, 55.0, 4.0);
        }
    }
}

fn centre_piece(c: &mut Canvas, style: &LegStyle) {
    match style {
        LegStyle::Tentacles => {
            c.set_line_cap(LineCap::Round);
            c.begin_path();
            c.move_to(0.0, 0.0);
            c.cubic_to(10.0, 20.0, -10.0, 40.0, 0.0, 60.0);
            c.stroke();
        }
        LegStyle::Slime => {
            c.set_fill(Color::rgb(100, 255, 100).alpha(0.5));
            c.begin_path();
            c.move_to(-30.0, 0.0);
            c.quad_to(0.0, 40.0, 30.0, 0.0);
            c.fill();
        }
        LegStyle::Treads => {
            c.set_fill(Color::INK);
            c.fill_rect(-60.0, 0.0, 120.0, 40.0);
            c.set_fill(Color::hex3(0x555));
            for i in 0..5 {
                disc(c, -40.0 + 20.0 * i as f32, 35.0, 5.0);
            }
        }
        LegStyle::Antigrav => {
            c.set_fill(Color::hex3(0x222));
            c.begin_path();
            c.ellipse(0.0, 20.0, 40.0, 10.0, 0.0, 0.0, TAU, false);
            c.fill();
            let cyan = Color::rgb(0, 255, 255);
            c.set_glow(Some(Glow {
                color: cyan,
                radius: 7.5,
            }));
            c.set_fill(cyan);
            c.begin_path();
            c.ellipse(0.0, 20.0, 30.0, 5.0, 0.0, 0.0, TAU, false);
            c.fill();
            c.set_glow(None);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::body::{anchors, Anchors};
    use crate::parts::BodyShape;

    fn placement() -> Placement {
        Anchors::default().resolve()
    }

    fn alpha_at(c: &Canvas, x: u32, y: u32) -> u8 {
        c.image().get_pixel(x, y)[3]
    }

    #[test]
    fn test_arms_are_mirrored() {
        let mut c = Canvas::new(300, 300);
        draw_arms(&mut c, &ArmStyle::Cannon, &placement(), Color::RED);
        // Right cannon spans x 200..250, the left one mirrors to 50..100
        assert_eq!(*c.image().get_pixel(225, 150), Color::hex3(0x111).to_pixel());
        assert_eq!(*c.image().get_pixel(75, 150), Color::hex3(0x111).to_pixel());
        assert_eq!(alpha_at(&c, 150, 150), 0);
    }

    #[test]
    fn test_no_arms_draws_nothing() {
        let mut c = Canvas::new(300, 300);
        draw_arms(&mut c, &ArmStyle::None, &placement(), Color::RED);
        draw_legs(&mut c, &LegStyle::None, &placement(), Color::RED);
        assert!(c.image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_treads_draw_once_between_legs() {
        let mut c = Canvas::new(300, 300);
        draw_legs(&mut c, &LegStyle::Treads, &placement(), Color::RED);
        // Midpoint of the default leg anchors is (150, 210)
        assert_eq!(*c.image().get_pixel(150, 220), Color::INK.to_pixel());
        assert_eq!(alpha_at(&c, 150, 205), 0);
    }

    #[test]
    fn test_legs_follow_body_anchors() {
        let mech = anchors(&BodyShape::Mech).resolve();
        let mut c = Canvas::new(300, 300);
        draw_legs(&mut c, &LegStyle::Stumpy, &mech, Color::RED);
        // Mech legs hang from (±30, 50)
        assert_eq!(*c.image().get_pixel(180, 210), Color::RED.to_pixel());
        assert_eq!(*c.image().get_pixel(119, 210), Color::RED.to_pixel());
        assert_eq!(alpha_at(&c, 180, 230), 0);
    }
}
