//! Eye routines, drawn in a frame centred on the face anchor

use std::f32::consts::{PI, TAU};

use crate::parts::{EyeStyle, DEFAULT_SPIDER_EYES};

use super::canvas::{Canvas, Glow, Point};
use super::color::Color;
use super::CENTER;

const PUPIL: Color = Color::INK;
const SCLERA: Color = Color::WHITE;

pub fn draw(c: &mut Canvas, style: &EyeStyle, face: Point) {
    c.save();
    c.translate(CENTER.0 + face.0, CENTER.1 + face.1);

    match *style {
        EyeStyle::Dots => standard_eyes(c, 10.0, PUPIL, false),
        EyeStyle::Anime => anime(c),
        EyeStyle::Big => standard_eyes(c, 15.0, PUPIL, true),
        EyeStyle::Small => standard_eyes(c, 5.0, PUPIL, false),
        EyeStyle::Angry => angry(c),
        EyeStyle::Sad => sad(c),
        EyeStyle::Bored => bored(c),
        EyeStyle::Happy => happy(c),
        EyeStyle::Crazy => crazy(c),
        EyeStyle::Cyclops => cyclops(c),
        EyeStyle::Triclops => triclops(c),
        EyeStyle::Spider { count } => spider(c, count.unwrap_or(DEFAULT_SPIDER_EYES)),
        EyeStyle::Snail => snail(c),
        EyeStyle::Vertical => vertical(c),
        EyeStyle::Visor => visor(c),
        EyeStyle::Laser => laser(c),
        EyeStyle::Hypno => hypno(c),
        EyeStyle::Matrix => matrix(c),
        EyeStyle::Glowing => glowing(c),
        EyeStyle::Scanner => scanner(c),
        EyeStyle::Unknown => standard_eyes(c, 10.0, PUPIL, false),
    }

    c.restore();
}

fn disc(c: &mut Canvas, x: f32, y: f32, r: f32) {
    c.begin_path();
    c.circle(x, y, r);
    c.fill();
}

fn ring(c: &mut Canvas, x: f32, y: f32, r: f32) {
    c.begin_path();
    c.circle(x, y, r);
    c.stroke();
}

fn outlined_disc(c: &mut Canvas, x: f32, y: f32, r: f32) {
    c.begin_path();
    c.circle(x, y, r);
    c.fill();
    c.stroke();
}

fn segment(c: &mut Canvas, from: Point, to: Point) {
    c.begin_path();
    c.move_to(from.0, from.1);
    c.line_to(to.0, to.1);
    c.stroke();
}

/// Two round eyes at x = ±20 with pupils of half the radius
fn standard_eyes(c: &mut Canvas, r: f32, pupil: Color, glint: bool) {
    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    outlined_disc(c, -20.0, 0.0, r);
    outlined_disc(c, 20.0, 0.0, r);

    c.set_fill(pupil);
    disc(c, -20.0, 0.0, r / 2.0);
    disc(c, 20.0, 0.0, r / 2.0);

    if glint {
        c.set_fill(SCLERA);
        disc(c, -22.0, -2.0, r / 4.0);
        disc(c, 18.0, -2.0, r / 4.0);
    }
}

fn anime(c: &mut Canvas) {
    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    for x in [-20.0, 20.0] {
        c.begin_path();
        c.ellipse(x, 0.0, 15.0, 20.0, 0.0, 0.0, TAU, false);
        c.fill();
        c.stroke();
    }
    c.set_fill(PUPIL);
    disc(c, -20.0, 4.0, 10.0);
    disc(c, 20.0, 4.0, 10.0);
    c.set_fill(SCLERA);
    disc(c, -25.0, -5.0, 5.0);
    disc(c, 15.0, -5.0, 5.0);
    disc(c, -18.0, 8.0, 3.0);
    disc(c, 22.0, 8.0, 3.0);
}

fn angry(c: &mut Canvas) {
    c.set_stroke(Color::INK);
    c.set_line_width(4.0);
    segment(c, (-35.0, -10.0), (-10.0, 0.0));
    segment(c, (35.0, -10.0), (10.0, 0.0));
    standard_eyes(c, 10.0, PUPIL, false);
}

fn sad(c: &mut Canvas) {
    c.set_stroke(Color::INK);
    c.set_line_width(3.0);
    segment(c, (-35.0, 0.0), (-15.0, -10.0));
    segment(c, (35.0, 0.0), (15.0, -10.0));
    standard_eyes(c, 12.0, PUPIL, false);
    c.set_fill(Color::hex(0x00aaff));
    disc(c, -20.0, 10.0, 5.0);
    disc(c, 20.0, 10.0, 5.0);
}

fn bored(c: &mut Canvas) {
    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    outlined_disc(c, -20.0, 0.0, 10.0);
    outlined_disc(c, 20.0, 0.0, 10.0);
    c.set_fill(PUPIL);
    disc(c, -20.0, 0.0, 3.0);
    disc(c, 20.0, 0.0, 3.0);
    // Eyelids
    c.set_fill(Color::hex3(0xddd));
    for x in [-30.0, 10.0] {
        c.begin_path();
        c.rect(x, -10.0, 20.0, 10.0);
        c.fill();
        c.stroke();
    }
}

fn happy(c: &mut Canvas) {
    c.set_stroke(Color::INK);
    c.set_line_width(3.0);
    for x in [-20.0, 20.0] {
        c.begin_path();
        c.arc(x, 0.0, 10.0, PI, 0.0, false);
        c.stroke();
    }
}

fn crazy(c: &mut Canvas) {
    standard_eyes(c, 12.0, PUPIL, false);
    c.set_fill(SCLERA);
    outlined_disc(c, -20.0, 0.0, 12.0);
    outlined_disc(c, 20.0, 0.0, 8.0);
    c.set_fill(PUPIL);
    disc(c, -20.0, 0.0, 3.0);
    disc(c, 20.0, 0.0, 2.0);
    c.set_stroke(Color::BLACK);
    c.set_line_width(1.0);
    ring(c, -20.0, 0.0, 8.0);
    ring(c, 20.0, 0.0, 5.0);
}

fn cyclops(c: &mut Canvas) {
    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(3.0);
    outlined_disc(c, 0.0, -10.0, 30.0);
    c.set_fill(PUPIL);
    disc(c, 0.0, -10.0, 10.0);
    c.set_fill(SCLERA);
    disc(c, 5.0, -15.0, 5.0);
}

fn triclops(c: &mut Canvas) {
    c.translate(0.0, -10.0);
    standard_eyes(c, 10.0, PUPIL, false);
    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    outlined_disc(c, 0.0, -25.0, 10.0);
    c.set_fill(PUPIL);
    disc(c, 0.0, -25.0, 5.0);
}

/// Main pair, a centre eye past two, and a flanking pair from five up
fn spider(c: &mut Canvas, count: u32) {
    c.set_fill(Color::BLACK);
    disc(c, -15.0, 0.0, 8.0);
    disc(c, 15.0, 0.0, 8.0);
    let extra = count.saturating_sub(2);
    if extra > 0 {
        disc(c, 0.0, -15.0, 6.0);
    }
    if extra >= 3 {
        disc(c, -25.0, -10.0, 4.0);
        disc(c, 25.0, -10.0, 4.0);
    }
}

fn snail(c: &mut Canvas) {
    c.set_stroke(Color::hex3(0x666));
    c.set_line_width(6.0);
    segment(c, (-20.0, 0.0), (-40.0, -40.0));
    segment(c, (20.0, 0.0), (40.0, -40.0));

    c.set_fill(SCLERA);
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    outlined_disc(c, -40.0, -40.0, 10.0);
    outlined_disc(c, 40.0, -40.0, 10.0);
    c.set_fill(Color::BLACK);
    disc(c, -40.0, -40.0, 3.0);
    disc(c, 40.0, -40.0, 3.0);
}

fn vertical(c: &mut Canvas) {
    c.set_fill(Color::hex(0xfff9cc));
    c.set_stroke(Color::INK);
    c.set_line_width(2.0);
    outlined_disc(c, -20.0, 0.0, 12.0);
    outlined_disc(c, 20.0, 0.0, 12.0);
    c.set_fill(Color::BLACK);
    for x in [-20.0, 20.0] {
        c.begin_path();
        c.ellipse(x, 0.0, 2.0, 10.0, 0.0, 0.0, TAU, false);
        c.fill();
    }
}

fn visor(c: &mut Canvas) {
    c.set_fill(Color::hex(0x00ffff));
    c.set_stroke(Color::hex(0x009999));
    c.set_line_width(2.0);
    c.begin_path();
    c.round_rect(-50.0, -15.0, 100.0, 30.0, 5.0);
    c.fill();
    c.stroke();
    c.set_stroke(Color::WHITE.alpha(0.5));
    segment(c, (-45.0, 0.0), (45.0, 0.0));
}

fn laser(c: &mut Canvas) {
    c.set_fill(Color::RED);
    c.set_glow(Some(Glow { color: Color::RED, radius: 10.0 }));
    disc(c, -20.0, 0.0, 8.0);
    disc(c, 20.0, 0.0, 8.0);
    c.set_glow(None);

    c.set_stroke(Color::RED.alpha(0.6));
    c.set_line_width(4.0);
    segment(c, (-20.0, 0.0), (-100.0, 50.0));
    segment(c, (20.0, 0.0), (100.0, 50.0));
}

fn hypno(c: &mut Canvas) {
    c.set_stroke(Color::hex(0xff00ff));
    c.set_line_width(2.0);
    for r in [2.0, 6.0, 10.0, 14.0] {
        ring(c, -20.0, 0.0, r);
        ring(c, 20.0, 0.0, r);
    }
}

fn matrix(c: &mut Canvas) {
    const GLYPH: f32 = 8.0;
    c.set_fill(Color::hex3(0x0f0));
    // Rows sit on their baselines, like canvas text
    c.fill_text("10", -30.0, -GLYPH, GLYPH);
    c.fill_text("01", -30.0, 10.0 - GLYPH, GLYPH);
    c.fill_text("01", 15.0, -GLYPH, GLYPH);
    c.fill_text("10", 15.0, 10.0 - GLYPH, GLYPH);
}

fn glowing(c: &mut Canvas) {
    c.set_fill(Color::rgb(255, 255, 0));
    c.set_glow(Some(Glow {
        color: Color::rgb(255, 255, 0),
        radius: 15.0,
    }));
    disc(c, -20.0, 0.0, 10.0);
    disc(c, 20.0, 0.0, 10.0);
    c.set_glow(None);
}

fn scanner(c: &mut Canvas) {
    standard_eyes(c, 10.0, PUPIL, false);
    c.set_stroke(Color::hex3(0x0f0));
    c.set_line_width(1.0);
    ring(c, -20.0, 0.0, 15.0);
    segment(c, (-35.0, 0.0), (-5.0, 0.0));
    segment(c, (-20.0, -15.0), (-20.0, 15.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::body::DEFAULT_FACE;

    fn drawn(style: EyeStyle) -> Canvas {
        let mut c = Canvas::new(300, 300);
        draw(&mut c, &style, DEFAULT_FACE);
        c
    }

    #[test]
    fn test_dots_pupils_at_face_anchor() {
        let c = drawn(EyeStyle::Dots);
        // Pupil centres: (150 ± 20, 140)
        assert_eq!(*c.image().get_pixel(130, 140), Color::INK.to_pixel());
        assert_eq!(*c.image().get_pixel(169, 140), Color::INK.to_pixel());
        // Between the eyes is untouched
        assert_eq!(c.image().get_pixel(150, 140)[3], 0);
    }

    #[test]
    fn test_spider_eye_counts() {
        let two = drawn(EyeStyle::Spider { count: None });
        let four = drawn(EyeStyle::Spider { count: Some(4) });
        let eight = drawn(EyeStyle::Spider { count: Some(8) });
        // Centre eye at (150, 125) only past the main pair
        assert_eq!(two.image().get_pixel(150, 125)[3], 0);
        assert_eq!(four.image().get_pixel(150, 125)[3], 255);
        // Flanking pair from five up
        assert_eq!(four.image().get_pixel(125, 130)[3], 0);
        assert_eq!(eight.image().get_pixel(125, 130)[3], 255);
    }

    #[test]
    fn test_unknown_falls_back_to_dots() {
        let fallback = drawn(EyeStyle::Unknown);
        let dots = drawn(EyeStyle::Dots);
        assert_eq!(fallback.image().as_raw(), dots.image().as_raw());
    }
}
