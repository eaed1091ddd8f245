//! Mouth routines, drawn 25 units below the face anchor

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use crate::parts::MouthStyle;

use super::canvas::{Canvas, Glow, Point};
use super::color::Color;
use super::CENTER;

/// Vertical offset of the mouth below the face anchor
pub const MOUTH_DROP: f32 = 25.0;

const TONGUE: Color = Color::hex(0xff9999);

pub fn draw(c: &mut Canvas, style: &MouthStyle, face: Point) {
    c.save();
    c.translate(CENTER.0 + face.0, CENTER.1 + face.1 + MOUTH_DROP);
    c.set_stroke(Color::INK);
    c.set_fill(Color::INK);
    c.set_line_width(3.0);

    match style {
        MouthStyle::Smile | MouthStyle::Unknown => smile(c),
        MouthStyle::Frown => {
            c.begin_path();
            c.arc(0.0, 20.0, 20.0, PI, 0.0, false);
            c.stroke();
        }
        MouthStyle::Neutral => line(c, (-20.0, 10.0), (20.0, 10.0)),
        MouthStyle::Open => {
            c.begin_path();
            c.circle(0.0, 10.0, 10.0);
            c.stroke();
        }
        MouthStyle::Tongue => {
            smile(c);
            c.set_fill(TONGUE);
            c.begin_path();
            c.move_to(-5.0, 20.0);
            c.quad_to(0.0, 35.0, 5.0, 20.0);
            c.fill();
            c.stroke();
        }
        MouthStyle::Cat => cat(c),
        MouthStyle::Dog => {
            c.begin_path();
            c.move_to(-20.0, 5.0);
            c.quad_to(0.0, 25.0, 20.0, 5.0);
            c.stroke();
            c.set_fill(TONGUE);
            c.begin_path();
            c.ellipse(5.0, 20.0, 8.0, 12.0, FRAC_PI_4, 0.0, TAU, false);
            c.fill();
            c.stroke();
        }
        MouthStyle::Beak => {
            c.set_fill(Color::hex(0xffcc00));
            c.begin_path();
            c.polygon(&[(-10.0, -5.0), (10.0, -5.0), (0.0, 15.0)]);
            c.fill();
            c.stroke();
        }
        MouthStyle::Rabbit => rabbit(c),
        MouthStyle::Snout => {
            c.set_fill(Color::hex(0xffcccc));
            c.begin_path();
            c.ellipse(0.0, 0.0, 15.0, 10.0, 0.0, 0.0, TAU, false);
            c.fill();
            c.stroke();
            c.set_fill(Color::BLACK);
            for x in [-5.0, 5.0] {
                c.begin_path();
                c.circle(x, 0.0, 3.0);
                c.fill();
            }
        }
        MouthStyle::Fangs => fangs(c),
        MouthStyle::Tusks => {
            c.begin_path();
            c.move_to(-20.0, 15.0);
            c.quad_to(-25.0, -10.0, -35.0, -20.0);
            c.stroke();
            c.begin_path();
            c.move_to(20.0, 15.0);
            c.quad_to(25.0, -10.0, 35.0, -20.0);
            c.stroke();
            line(c, (-15.0, 10.0), (15.0, 10.0));
        }
        MouthStyle::Toothy => toothy(c),
        MouthStyle::Leech => leech(c),
        MouthStyle::Gaping => {
            c.set_fill(Color::hex(0x110000));
            c.begin_path();
            c.ellipse(0.0, 15.0, 25.0, 35.0, 0.0, 0.0, TAU, false);
            c.fill();
            c.stroke();
        }
        MouthStyle::Speaker => {
            c.set_fill(Color::hex3(0x444));
            for i in 0..3 {
                c.fill_rect(-20.0 + i as f32 * 15.0, 0.0, 10.0, 20.0);
            }
        }
        MouthStyle::Vent => {
            c.set_fill(Color::hex3(0x666));
            c.begin_path();
            c.polygon(&[(-20.0, 0.0), (20.0, 0.0), (15.0, 20.0), (-15.0, 20.0)]);
            c.fill();
            c.stroke();
            c.set_fill(Color::BLACK);
            c.fill_rect(-10.0, 5.0, 20.0, 2.0);
            c.fill_rect(-8.0, 10.0, 16.0, 2.0);
            c.fill_rect(-6.0, 15.0, 12.0, 2.0);
        }
        MouthStyle::Stitch => {
            line(c, (-30.0, 10.0), (30.0, 10.0));
            for i in 0..5 {
                let x = -20.0 + i as f32 * 10.0;
                line(c, (x, 0.0), (x, 20.0));
            }
        }
        MouthStyle::Zipper => {
            c.fill_rect(-30.0, 8.0, 60.0, 4.0);
            c.set_fill(Color::hex3(0x888));
            for i in 0..10 {
                c.fill_rect(-30.0 + i as f32 * 6.0, 5.0, 2.0, 10.0);
            }
            // Pull tab
            c.set_fill(Color::hex3(0xaaa));
            c.fill_rect(30.0, 8.0, 5.0, 15.0);
        }
        MouthStyle::Void => {
            c.set_fill(Color::BLACK);
            c.set_glow(Some(Glow {
                color: Color::BLACK,
                radius: 5.0,
            }));
            c.begin_path();
            c.circle(0.0, 10.0, 15.0);
            c.fill();
            c.set_glow(None);
        }
        MouthStyle::Mustache => mustache(c),
    }

    c.restore();
}

fn line(c: &mut Canvas, from: Point, to: Point) {
    c.begin_path();
    c.move_to(from.0, from.1);
    c.line_to(to.0, to.1);
    c.stroke();
}

fn smile(c: &mut Canvas) {
    c.begin_path();
    c.arc(0.0, 0.0, 20.0, 0.0, PI, false);
    c.stroke();
}

fn cat(c: &mut Canvas) {
    for s in [-1.0, 1.0] {
        c.begin_path();
        c.move_to(5.0 * s, 0.0);
        c.line_to(10.0 * s, 10.0);
        c.quad_to(20.0 * s, 10.0, 25.0 * s, 5.0);
        c.stroke();
    }
}

fn rabbit(c: &mut Canvas) {
    line(c, (-5.0, 5.0), (-10.0, 10.0));
    line(c, (5.0, 5.0), (10.0, 10.0));
    c.set_fill(Color::WHITE);
    for x in [-5.0, 0.0] {
        c.fill_rect(x, 10.0, 5.0, 10.0);
        c.stroke_rect(x, 10.0, 5.0, 10.0);
    }
}

fn fangs(c: &mut Canvas) {
    line(c, (-20.0, 5.0), (20.0, 5.0));
    c.set_fill(Color::WHITE);
    for s in [-1.0, 1.0] {
        c.begin_path();
        c.move_to(15.0 * s, 5.0);
        c.line_to(10.0 * s, 20.0);
        c.line_to(5.0 * s, 5.0);
        c.fill();
        c.stroke();
    }
}

/// Shark mouth: black half disc with five white teeth
fn toothy(c: &mut Canvas) {
    c.set_fill(Color::BLACK);
    c.begin_path();
    c.arc(0.0, 10.0, 25.0, 0.0, PI, false);
    c.fill();
    c.set_fill(Color::WHITE);
    for i in 0..5 {
        let x = i as f32 * 10.0;
        c.begin_path();
        c.move_to(-20.0 + x, 10.0);
        c.line_to(-15.0 + x, 30.0);
        c.line_to(-10.0 + x, 10.0);
        c.fill();
    }
}

fn leech(c: &mut Canvas) {
    c.begin_path();
    c.circle(0.0, 10.0, 15.0);
    c.stroke();
    c.set_fill(Color::WHITE);
    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU;
        c.begin_path();
        c.circle(angle.cos() * 10.0, 10.0 + angle.sin() * 10.0, 3.0);
        c.fill();
        c.stroke();
    }
}

fn mustache(c: &mut Canvas) {
    c.set_fill(Color::INK);
    c.begin_path();
    for s in [1.0, -1.0] {
        c.move_to(0.0, 5.0);
        c.quad_to(15.0 * s, -5.0, 30.0 * s, 10.0);
        c.quad_to(15.0 * s, 5.0, 0.0, 5.0);
    }
    c.fill();
}
