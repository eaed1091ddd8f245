//! Body geometry and anchor points
//!
//! Bodies are drawn centred on the logical canvas centre. Each body type may
//! declare anchors (face, arms, legs) relative to that centre; anything it
//! leaves out falls back to the default offsets.

use std::f32::consts::{PI, TAU};

use crate::parts::{BodyShape, MAX_SURFACE_DETAIL, MAX_VERTEX_COUNT};

use super::canvas::{Canvas, Point};
use super::color::Color;
use super::CENTER;

pub const DEFAULT_FACE: Point = (0.0, -10.0);
pub const DEFAULT_ARM_L: Point = (-50.0, 0.0);
pub const DEFAULT_ARM_R: Point = (50.0, 0.0);
pub const DEFAULT_LEG_L: Point = (-30.0, 60.0);
pub const DEFAULT_LEG_R: Point = (30.0, 60.0);

const BODY_LINE_WIDTH: f32 = 3.0;

/// Anchors a body declares; `None` means "use the default"
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchors {
    pub face: Option<Point>,
    pub arm_l: Option<Point>,
    pub arm_r: Option<Point>,
    pub leg_l: Option<Point>,
    pub leg_r: Option<Point>,
}

/// Anchors with every default filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub face: Point,
    pub arm_l: Point,
    pub arm_r: Point,
    pub leg_l: Point,
    pub leg_r: Point,
}

impl Anchors {
    fn symmetric(face: Point, arm: Point, leg: Point) -> Self {
        Self {
            face: Some(face),
            arm_l: Some((-arm.0, arm.1)),
            arm_r: Some(arm),
            leg_l: Some((-leg.0, leg.1)),
            leg_r: Some(leg),
        }
    }

    pub fn resolve(&self) -> Placement {
        Placement {
            face: self.face.unwrap_or(DEFAULT_FACE),
            arm_l: self.arm_l.unwrap_or(DEFAULT_ARM_L),
            arm_r: self.arm_r.unwrap_or(DEFAULT_ARM_R),
            leg_l: self.leg_l.unwrap_or(DEFAULT_LEG_L),
            leg_r: self.leg_r.unwrap_or(DEFAULT_LEG_R),
        }
    }
}

impl Placement {
    /// Offset of the face from its default position
    pub fn face_shift(&self) -> Point {
        (self.face.0 - DEFAULT_FACE.0, self.face.1 - DEFAULT_FACE.1)
    }

    pub fn leg_midpoint(&self) -> Point {
        (
            (self.leg_l.0 + self.leg_r.0) / 2.0,
            (self.leg_l.1 + self.leg_r.1) / 2.0,
        )
    }
}

/// Anchors declared by a body shape. Parametric families and the circle
/// declare none.
pub fn anchors(shape: &BodyShape) -> Anchors {
    match shape {
        BodyShape::Square => Anchors::symmetric((0.0, -15.0), (55.0, 0.0), (30.0, 55.0)),
        BodyShape::Triangle => Anchors::symmetric((0.0, 0.0), (35.0, 10.0), (30.0, 35.0)),
        BodyShape::Blob => Anchors::symmetric((0.0, -10.0), (70.0, 0.0), (35.0, 45.0)),
        BodyShape::Hero => Anchors::symmetric((0.0, -20.0), (50.0, -35.0), (20.0, 40.0)),
        BodyShape::Mech => Anchors::symmetric((0.0, -25.0), (60.0, -10.0), (30.0, 50.0)),
        BodyShape::Beast => Anchors::symmetric((0.0, 0.0), (55.0, 10.0), (35.0, 40.0)),
        BodyShape::Insect => Anchors::symmetric((0.0, -25.0), (38.0, -15.0), (25.0, 60.0)),
        BodyShape::Slime => Anchors::symmetric((0.0, 0.0), (50.0, 10.0), (25.0, 55.0)),
        BodyShape::Circle
        | BodyShape::Star { .. }
        | BodyShape::Polygon { .. }
        | BodyShape::Rock { .. }
        | BodyShape::Cloud { .. }
        | BodyShape::Geode
        | BodyShape::Nova
        | BodyShape::Unknown => Anchors::default(),
    }
}

/// Point on a circle, angle in degrees counter-clockwise from +x with y up
fn polar(radius: f32, degrees: f32) -> Point {
    let a = degrees.to_radians();
    (radius * a.cos(), -radius * a.sin())
}

pub fn star_vertices(points: u32, outer: f32, inner: f32) -> Vec<Point> {
    let points = points.min(MAX_VERTEX_COUNT);
    let step = 360.0 / points as f32;
    (0..points)
        .flat_map(|k| {
            let a = 18.0 + k as f32 * step;
            [polar(outer, a), polar(inner, a + step / 2.0)]
        })
        .collect()
}

pub fn polygon_vertices(sides: u32, radius: f32) -> Vec<Point> {
    let sides = sides.min(MAX_VERTEX_COUNT);
    let step = 360.0 / sides as f32;
    (0..sides).map(|i| polar(radius, i as f32 * step)).collect()
}

/// Jagged silhouette keyed only on vertex index and roughness
pub fn rock_vertices(roughness: u32) -> Vec<Point> {
    let roughness = roughness.min(MAX_SURFACE_DETAIL);
    let n = roughness.saturating_add(8);
    let r = roughness as f32;
    (0..n)
        .map(|i| {
            let radius = 70.0 + (i as f32 * 3.0 + r).sin() * r * 4.0;
            polar(radius, i as f32 * 360.0 / n as f32)
        })
        .collect()
}

/// (centre, radius) of every cloud puff, the central disc first
pub fn cloud_puffs(fluffiness: u32) -> Vec<(Point, f32)> {
    let count = fluffiness.min(MAX_SURFACE_DETAIL).div_ceil(2).saturating_add(5);
    let mut puffs = vec![((0.0, 0.0), 40.0)];
    for i in 0..count {
        let size = if i % 2 == 0 { 25.0 } else { 35.0 };
        puffs.push((polar(40.0, i as f32 * 360.0 / count as f32), size));
    }
    puffs
}

fn fill_and_stroke(c: &mut Canvas) {
    c.fill();
    c.stroke();
}

pub fn draw(c: &mut Canvas, shape: &BodyShape, color: Color) {
    c.save();
    c.translate(CENTER.0, CENTER.1);
    c.set_fill(color);
    c.set_stroke(Color::INK);
    c.set_line_width(BODY_LINE_WIDTH);
    c.begin_path();

    match *shape {
        BodyShape::Circle => {
            c.circle(0.0, 0.0, 60.0);
            fill_and_stroke(c);
        }
        BodyShape::Square => {
            c.rect(-55.0, -55.0, 110.0, 110.0);
            fill_and_stroke(c);
        }
        BodyShape::Triangle => {
            c.polygon(&[polar(70.0, 90.0), polar(70.0, 210.0), polar(70.0, 330.0)]);
            fill_and_stroke(c);
        }
        BodyShape::Blob => {
            c.ellipse(0.0, 0.0, 75.0, 55.0, 0.0, 0.0, TAU, false);
            c.close_path();
            fill_and_stroke(c);
        }
        BodyShape::Star { points } => {
            c.polygon(&star_vertices(BodyShape::star_points(points), 80.0, 35.0));
            fill_and_stroke(c);
        }
        BodyShape::Polygon { sides } => {
            c.polygon(&polygon_vertices(BodyShape::polygon_sides(sides), 70.0));
            fill_and_stroke(c);
        }
        BodyShape::Rock { roughness } => {
            let roughness = BodyShape::rock_roughness(roughness);
            c.polygon(&rock_vertices(roughness));
            fill_and_stroke(c);
            if roughness > 3 {
                c.set_line_width(2.0);
                c.begin_path();
                c.move_to(-20.0, -30.0);
                c.line_to(-5.0, -10.0);
                c.line_to(-15.0, 10.0);
                c.line_to(5.0, 25.0);
                c.stroke();
            }
        }
        BodyShape::Cloud { fluffiness } => {
            for ((x, y), r) in cloud_puffs(BodyShape::cloud_fluffiness(fluffiness)) {
                c.circle(x, y, r);
            }
            // Stroke before fill: only the outer rim of the outline survives
            c.stroke();
            c.fill();
        }
        BodyShape::Hero => draw_hero(c),
        BodyShape::Mech => draw_mech(c),
        BodyShape::Beast => draw_beast(c),
        BodyShape::Insect => draw_insect(c),
        BodyShape::Slime => draw_slime(c),
        BodyShape::Geode => draw_geode(c),
        BodyShape::Nova => {
            let pts: Vec<Point> = (0..8)
                .map(|i| {
                    let a = (i as f32 * 45.0).to_radians();
                    let r = if i % 2 == 0 { 60.0 } else { 30.0 };
                    (a.cos() * r, a.sin() * r)
                })
                .collect();
            c.polygon(&pts);
            fill_and_stroke(c);
        }
        BodyShape::Unknown => {
            c.circle(0.0, 0.0, 50.0);
            fill_and_stroke(c);
        }
    }

    c.restore();
}

fn draw_hero(c: &mut Canvas) {
    c.polygon(&[(-50.0, -40.0), (50.0, -40.0), (30.0, 40.0), (0.0, 50.0), (-30.0, 40.0)]);
    fill_and_stroke(c);
    c.begin_path();
    c.move_to(-30.0, -10.0);
    c.quad_to(0.0, 10.0, 30.0, -10.0);
    c.stroke();
}

fn draw_mech(c: &mut Canvas) {
    c.polygon(&[
        (-40.0, -50.0),
        (40.0, -50.0),
        (60.0, -10.0),
        (40.0, 50.0),
        (-40.0, 50.0),
        (-60.0, -10.0),
    ]);
    fill_and_stroke(c);
    c.set_fill(Color::INK);
    c.fill_rect(-20.0, 10.0, 40.0, 5.0);
    c.fill_rect(-20.0, 20.0, 40.0, 5.0);
}

fn draw_beast(c: &mut Canvas) {
    c.ellipse(0.0, 10.0, 60.0, 40.0, 0.0, 0.0, TAU, false);
    c.close_path();
    fill_and_stroke(c);
    c.begin_path();
    c.arc(-30.0, 10.0, 20.0, 0.0, PI, true);
    c.stroke();
}

fn draw_insect(c: &mut Canvas) {
    c.ellipse(0.0, -20.0, 40.0, 30.0, 0.0, 0.0, TAU, false);
    c.close_path();
    fill_and_stroke(c);
    c.begin_path();
    c.ellipse(0.0, 30.0, 35.0, 40.0, 0.0, 0.0, TAU, false);
    c.close_path();
    fill_and_stroke(c);
}

fn draw_slime(c: &mut Canvas) {
    c.move_to(-40.0, -30.0);
    c.cubic_to(-60.0, -10.0, -50.0, 50.0, 0.0, 60.0);
    c.cubic_to(50.0, 50.0, 60.0, -10.0, 40.0, -30.0);
    c.quad_to(0.0, -50.0, -40.0, -30.0);
    fill_and_stroke(c);
    c.set_fill(Color::WHITE.alpha(0.3));
    c.begin_path();
    c.circle(-20.0, 0.0, 5.0);
    c.fill();
    c.begin_path();
    c.circle(20.0, 20.0, 8.0);
    c.fill();
}

fn draw_geode(c: &mut Canvas) {
    c.polygon(&[
        (-40.0, -50.0),
        (30.0, -60.0),
        (60.0, -10.0),
        (40.0, 60.0),
        (-30.0, 50.0),
        (-60.0, 0.0),
    ]);
    fill_and_stroke(c);
    c.set_fill(Color::hex3(0xbdf));
    c.begin_path();
    c.move_to(-10.0, -10.0);
    c.line_to(10.0, 10.0);
    c.line_to(20.0, -5.0);
    c.fill();
}
