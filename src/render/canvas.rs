//! Immediate-mode 2D rasterizer over an `RgbaImage`
//!
//! The API follows the usual 2D drawing context closely enough that the part routines
//! read like drawing instructions: a transform and style stack, a current
//! path in device space, and fill/stroke operations that consume it.
//!
//! Fills use the non-zero winding rule with four sub-scanlines per pixel row
//! and exact horizontal span coverage. Strokes are converted to outline
//! polygons (one quad per segment plus round joins) and filled in a single
//! non-zero pass, so self-overlapping strokes never blend twice.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use image::RgbaImage;

use super::color::Color;
use super::font;

const SUBSAMPLES: usize = 4;
const CURVE_SEGMENTS: usize = 16;
const GLOW_RINGS: u32 = 3;

pub type Point = (f32, f32);

/// 2D affine transform, `x' = a*x + c*y + e`, `y' = b*x + d*y + f`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn apply(&self, x: f32, y: f32) -> Point {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Uniform length scale of the transform (square root of |det|)
    pub fn scale_factor(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }

    fn translated(self, tx: f32, ty: f32) -> Self {
        Self {
            e: self.a * tx + self.c * ty + self.e,
            f: self.b * tx + self.d * ty + self.f,
            ..self
        }
    }

    fn scaled(self, sx: f32, sy: f32) -> Self {
        Self {
            a: self.a * sx,
            b: self.b * sx,
            c: self.c * sy,
            d: self.d * sy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Soft halo drawn around fills and strokes, standing in for shadow blur
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
struct State {
    transform: Transform,
    fill: Color,
    stroke: Color,
    line_width: f32,
    line_cap: LineCap,
    glow: Option<Glow>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            glow: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SubPath {
    points: Vec<Point>,
    closed: bool,
}

#[derive(Debug, Clone, Copy)]
enum Paint {
    Over(Color),
    Erase,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    dir: i32,
}

pub struct Canvas {
    image: RgbaImage,
    state: State,
    stack: Vec<State>,
    path: Vec<SubPath>,
}

impl Canvas {
    /// A fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            state: State::default(),
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // ---- state -------------------------------------------------------------

    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pop the last saved state; unbalanced restores are ignored
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform.translated(x, y);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform.scaled(sx, sy);
    }

    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    pub fn set_glow(&mut self, glow: Option<Glow>) {
        self.state.glow = glow;
    }

    // ---- path building -------------------------------------------------------

    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let p = self.state.transform.apply(x, y);
        if !(p.0.is_finite() && p.1.is_finite()) {
            return;
        }
        self.path.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        let p = self.state.transform.apply(x, y);
        self.push_device(p);
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let t = self.state.transform;
        let c = t.apply(cx, cy);
        let end = t.apply(x, y);
        let Some(start) = self.current_point() else {
            self.push_device(c);
            self.push_device(end);
            return;
        };
        for i in 1..=CURVE_SEGMENTS {
            let s = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - s;
            self.push_device((
                u * u * start.0 + 2.0 * u * s * c.0 + s * s * end.0,
                u * u * start.1 + 2.0 * u * s * c.1 + s * s * end.1,
            ));
        }
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let t = self.state.transform;
        let c1 = t.apply(c1x, c1y);
        let c2 = t.apply(c2x, c2y);
        let end = t.apply(x, y);
        let Some(start) = self.current_point() else {
            self.push_device(c1);
            self.push_device(end);
            return;
        };
        for i in 1..=CURVE_SEGMENTS {
            let s = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - s;
            let (w0, w1, w2, w3) = (u * u * u, 3.0 * u * u * s, 3.0 * u * s * s, s * s * s);
            self.push_device((
                w0 * start.0 + w1 * c1.0 + w2 * c2.0 + w3 * end.0,
                w0 * start.1 + w1 * c1.1 + w2 * c2.1 + w3 * end.1,
            ));
        }
    }

    /// Circular arc from `start` to `end` radians, clockwise on screen unless
    /// `ccw`. Connects from the current point with a straight line.
    pub fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32, ccw: bool) {
        self.ellipse(x, y, r, r, 0.0, start, end, ccw);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        start: f32,
        end: f32,
        ccw: bool,
    ) {
        if rx < 0.0 || ry < 0.0 {
            return;
        }
        let sweep = arc_sweep(start, end, ccw);
        let t = self.state.transform;
        let radius = rx.max(ry) * t.scale_factor();
        let per_turn = (radius * 0.75).max(16.0);
        let steps = ((sweep.abs() / TAU) * per_turn).ceil().clamp(1.0, 1024.0) as usize;
        let (rsin, rcos) = rotation.sin_cos();
        let point_at = |angle: f32| {
            let (s, c) = angle.sin_cos();
            let (px, py) = (rx * c, ry * s);
            t.apply(x + px * rcos - py * rsin, y + px * rsin + py * rcos)
        };
        let first = point_at(start);
        match self.path.last() {
            Some(sub) if !sub.closed => self.push_device(first),
            _ => self.path.push(SubPath {
                points: vec![first],
                closed: false,
            }),
        }
        for i in 1..=steps {
            let angle = start + sweep * (i as f32 / steps as f32);
            self.push_device(point_at(angle));
        }
    }

    pub fn close_path(&mut self) {
        if let Some(sub) = self.path.last_mut() {
            if !sub.points.is_empty() {
                sub.closed = true;
            }
        }
    }

    /// A full circle as its own subpath
    pub fn circle(&mut self, x: f32, y: f32, r: f32) {
        self.move_to(x + r, y);
        self.arc(x, y, r, 0.0, TAU, false);
        self.close_path();
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.polygon(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)]);
    }

    pub fn round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        let r = r.clamp(0.0, w.abs().min(h.abs()) / 2.0);
        self.move_to(x + r, y);
        self.line_to(x + w - r, y);
        self.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0, false);
        self.line_to(x + w, y + h - r);
        self.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2, false);
        self.line_to(x + r, y + h);
        self.arc(x + r, y + h - r, r, FRAC_PI_2, PI, false);
        self.line_to(x, y + r);
        self.arc(x + r, y + r, r, PI, PI + FRAC_PI_2, false);
        self.close_path();
    }

    /// A closed polygon as its own subpath
    pub fn polygon(&mut self, points: &[Point]) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.move_to(x0, y0);
        for &(x, y) in rest {
            self.line_to(x, y);
        }
        self.close_path();
    }

    fn current_point(&self) -> Option<Point> {
        let sub = self.path.last()?;
        if sub.closed {
            sub.points.first().copied()
        } else {
            sub.points.last().copied()
        }
    }

    fn push_device(&mut self, p: Point) {
        if !(p.0.is_finite() && p.1.is_finite()) {
            return;
        }
        match self.path.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            Some(sub) => {
                // A closed subpath leaves the pen at its start point
                let start = sub.points[0];
                self.path.push(SubPath {
                    points: vec![start, p],
                    closed: false,
                });
            }
            None => self.path.push(SubPath {
                points: vec![p],
                closed: false,
            }),
        }
    }

    // ---- painting --------------------------------------------------------------

    pub fn fill(&mut self) {
        if let Some(glow) = self.state.glow {
            let outlines = self.closed_outlines();
            self.paint_glow(&outlines, 0.0, glow);
        }
        let polys: Vec<Vec<Point>> = self.path.iter().map(|s| s.points.clone()).collect();
        let color = self.state.fill;
        self.rasterize(&polys, Paint::Over(color));
    }

    pub fn stroke(&mut self) {
        let hw = self.state.line_width * self.state.transform.scale_factor() / 2.0;
        let subpaths = self.path.clone();
        if let Some(glow) = self.state.glow {
            self.paint_glow(&subpaths, hw, glow);
        }
        let polys = self.outline(&subpaths, hw);
        let color = self.state.stroke;
        self.rasterize(&polys, Paint::Over(color));
    }

    /// Clear everything the current path covers back to transparent
    pub fn erase(&mut self) {
        let polys: Vec<Vec<Point>> = self.path.iter().map(|s| s.points.clone()).collect();
        self.rasterize(&polys, Paint::Erase);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let saved = std::mem::take(&mut self.path);
        self.rect(x, y, w, h);
        self.fill();
        self.path = saved;
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let saved = std::mem::take(&mut self.path);
        self.rect(x, y, w, h);
        self.stroke();
        self.path = saved;
    }

    /// Filled bitmap text, `height` user units tall, top-left at (x, y)
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32, height: f32) {
        let cell = height / font::GLYPH_HEIGHT as f32;
        let saved = std::mem::take(&mut self.path);
        for (col, row) in font::lit_cells(text) {
            self.rect(x + col as f32 * cell, y + row as f32 * cell, cell, cell);
        }
        self.fill();
        self.path = saved;
    }

    /// Bitmap text centred on (cx, cy)
    pub fn fill_text_centered(&mut self, text: &str, cx: f32, cy: f32, height: f32) {
        let width = Self::text_width(text, height);
        self.fill_text(text, cx - width / 2.0, cy - height / 2.0, height);
    }

    pub fn text_width(text: &str, height: f32) -> f32 {
        font::text_cells(text) as f32 * height / font::GLYPH_HEIGHT as f32
    }

    fn closed_outlines(&self) -> Vec<SubPath> {
        self.path
            .iter()
            .map(|s| SubPath {
                points: s.points.clone(),
                closed: true,
            })
            .collect()
    }

    /// Concentric translucent outlines around `subpaths`, widest first
    fn paint_glow(&mut self, subpaths: &[SubPath], hw: f32, glow: Glow) {
        let scale = self.state.transform.scale_factor();
        let ring_alpha = glow.color.a as f32 / 255.0 / (GLOW_RINGS as f32 + 1.0);
        for ring in (1..=GLOW_RINGS).rev() {
            let spread = glow.radius * scale * ring as f32 / GLOW_RINGS as f32;
            let polys = self.outline(subpaths, hw + spread);
            let color = glow.color.alpha(ring_alpha);
            self.rasterize(&polys, Paint::Over(color));
        }
    }

    /// Outline polygons of a set of polylines stroked with half-width `hw`
    fn outline(&self, subpaths: &[SubPath], hw: f32) -> Vec<Vec<Point>> {
        let mut polys = Vec::new();
        if hw <= 0.0 {
            return polys;
        }
        let round_caps = self.state.line_cap == LineCap::Round;
        let join_steps = ((hw * 2.0).ceil() as usize).clamp(8, 32);
        for sub in subpaths {
            let mut pts: Vec<Point> = Vec::with_capacity(sub.points.len());
            for &p in &sub.points {
                if pts.last().map_or(true, |&q| dist2(p, q) > 1e-6) {
                    pts.push(p);
                }
            }
            if sub.closed && pts.len() > 2 && dist2(pts[0], pts[pts.len() - 1]) <= 1e-6 {
                pts.pop();
            }
            if pts.len() == 1 {
                if round_caps {
                    polys.push(disc(pts[0], hw, join_steps));
                }
                continue;
            }
            let seg_count = if sub.closed && pts.len() > 2 { pts.len() } else { pts.len() - 1 };
            for i in 0..seg_count {
                let p0 = pts[i];
                let p1 = pts[(i + 1) % pts.len()];
                let (dx, dy) = (p1.0 - p0.0, p1.1 - p0.1);
                let len = (dx * dx + dy * dy).sqrt();
                if len <= 1e-6 {
                    continue;
                }
                let (nx, ny) = (-dy / len * hw, dx / len * hw);
                polys.push(oriented(vec![
                    (p0.0 + nx, p0.1 + ny),
                    (p1.0 + nx, p1.1 + ny),
                    (p1.0 - nx, p1.1 - ny),
                    (p0.0 - nx, p0.1 - ny),
                ]));
            }
            let joins: Box<dyn Iterator<Item = usize>> = if sub.closed && pts.len() > 2 {
                Box::new(0..pts.len())
            } else {
                Box::new(1..pts.len() - 1)
            };
            for i in joins {
                polys.push(disc(pts[i], hw, join_steps));
            }
            if round_caps && !(sub.closed && pts.len() > 2) {
                polys.push(disc(pts[0], hw, join_steps));
                polys.push(disc(pts[pts.len() - 1], hw, join_steps));
            }
        }
        polys
    }

    fn rasterize(&mut self, polys: &[Vec<Point>], paint: Paint) {
        if let Paint::Over(color) = paint {
            if color.a == 0 {
                return;
            }
        }
        let width = self.image.width() as usize;
        let height = self.image.height() as usize;
        if width == 0 || height == 0 {
            return;
        }

        let mut edges: Vec<Edge> = Vec::new();
        for poly in polys {
            if poly.len() < 3 {
                continue;
            }
            for i in 0..poly.len() {
                let (ax, ay) = poly[i];
                let (bx, by) = poly[(i + 1) % poly.len()];
                if ay == by {
                    continue;
                }
                edges.push(if ay < by {
                    Edge { x0: ax, y0: ay, x1: bx, y1: by, dir: 1 }
                } else {
                    Edge { x0: bx, y0: by, x1: ax, y1: ay, dir: -1 }
                });
            }
        }
        if edges.is_empty() {
            return;
        }
        edges.sort_by(|a, b| a.y0.total_cmp(&b.y0));

        let y_min = edges[0].y0.floor().max(0.0) as usize;
        let y_max = edges
            .iter()
            .map(|e| e.y1)
            .fold(f32::MIN, f32::max)
            .ceil()
            .min(height as f32);
        if y_max <= y_min as f32 {
            return;
        }
        let y_max = y_max as usize;

        let mut coverage = vec![0.0f32; width + 1];
        let mut active: Vec<usize> = Vec::new();
        let mut crossings: Vec<(f32, i32)> = Vec::new();
        let mut next = 0;
        let weight = 1.0 / SUBSAMPLES as f32;

        for py in y_min..y_max {
            let mut touched = (width, 0usize);
            for s in 0..SUBSAMPLES {
                let sy = py as f32 + (s as f32 + 0.5) * weight;
                while next < edges.len() && edges[next].y0 <= sy {
                    active.push(next);
                    next += 1;
                }
                active.retain(|&i| edges[i].y1 > sy);

                crossings.clear();
                for &i in &active {
                    let e = &edges[i];
                    if e.y0 <= sy {
                        let x = e.x0 + (sy - e.y0) * (e.x1 - e.x0) / (e.y1 - e.y0);
                        crossings.push((x, e.dir));
                    }
                }
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, dir) in &crossings {
                    let before = winding;
                    winding += dir;
                    if before == 0 && winding != 0 {
                        span_start = x;
                    } else if before != 0 && winding == 0 {
                        if let Some((lo, hi)) = add_span(&mut coverage, width, span_start, x, weight) {
                            touched = (touched.0.min(lo), touched.1.max(hi));
                        }
                    }
                }
            }

            if touched.0 > touched.1 {
                continue;
            }
            for px in touched.0..=touched.1.min(width - 1) {
                let cov = coverage[px].min(1.0);
                coverage[px] = 0.0;
                if cov <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(px as u32, py as u32);
                match paint {
                    Paint::Over(color) => blend_over(pixel, color, cov),
                    Paint::Erase => {
                        pixel[3] = (pixel[3] as f32 * (1.0 - cov)).round() as u8;
                    }
                }
            }
            coverage[width] = 0.0;
        }
    }
}

/// Signed sweep of an arc following 2D-canvas angle rules
fn arc_sweep(start: f32, end: f32, ccw: bool) -> f32 {
    if !ccw {
        let d = end - start;
        if d >= TAU {
            TAU
        } else {
            d.rem_euclid(TAU)
        }
    } else {
        let d = start - end;
        if d >= TAU {
            -TAU
        } else {
            -d.rem_euclid(TAU)
        }
    }
}

/// Accumulate a horizontal span [x0, x1) with exact partial coverage at both
/// ends. Returns the touched pixel range.
fn add_span(coverage: &mut [f32], width: usize, x0: f32, x1: f32, w: f32) -> Option<(usize, usize)> {
    let x0 = x0.clamp(0.0, width as f32);
    let x1 = x1.clamp(0.0, width as f32);
    if x1 <= x0 {
        return None;
    }
    let i0 = x0.floor() as usize;
    let i1 = x1.floor() as usize;
    if i0 == i1 {
        coverage[i0] += (x1 - x0) * w;
    } else {
        coverage[i0] += (i0 as f32 + 1.0 - x0) * w;
        for c in &mut coverage[i0 + 1..i1] {
            *c += w;
        }
        coverage[i1] += (x1 - i1 as f32) * w;
    }
    Some((i0, i1))
}

fn blend_over(pixel: &mut image::Rgba<u8>, color: Color, coverage: f32) {
    let sa = color.a as f32 / 255.0 * coverage;
    if sa <= 0.0 {
        return;
    }
    let da = pixel[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return;
    }
    let src = [color.r, color.g, color.b];
    for i in 0..3 {
        let c = (src[i] as f32 * sa + pixel[i] as f32 * da * (1.0 - sa)) / out_a;
        pixel[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    pixel[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

fn dist2(a: Point, b: Point) -> f32 {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    dx * dx + dy * dy
}

fn disc(center: Point, r: f32, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let a = TAU * i as f32 / steps as f32;
            (center.0 + r * a.cos(), center.1 + r * a.sin())
        })
        .collect()
}

fn signed_area(poly: &[Point]) -> f32 {
    let n = poly.len();
    (0..n)
        .map(|i| {
            let (ax, ay) = poly[i];
            let (bx, by) = poly[(i + 1) % n];
            ax * by - bx * ay
        })
        .sum::<f32>()
        / 2.0
}

/// Winding-normalised copy so every outline piece adds to the same sign
fn oriented(mut poly: Vec<Point>) -> Vec<Point> {
    if signed_area(&poly) < 0.0 {
        poly.reverse();
    }
    poly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(canvas: &Canvas, x: u32, y: u32) -> u8 {
        canvas.image().get_pixel(x, y)[3]
    }

    #[test]
    fn test_fill_rect_exact_coverage() {
        let mut c = Canvas::new(10, 10);
        c.set_fill(Color::RED);
        c.fill_rect(2.0, 2.0, 4.0, 4.0);
        assert_eq!(*c.image().get_pixel(3, 3), image::Rgba([255, 0, 0, 255]));
        assert_eq!(alpha_at(&c, 1, 3), 0);
        assert_eq!(alpha_at(&c, 6, 3), 0);

        // Half-covered column
        let mut c = Canvas::new(10, 10);
        c.fill_rect(2.5, 0.0, 3.0, 10.0);
        assert_eq!(alpha_at(&c, 2, 5), 128);
        assert_eq!(alpha_at(&c, 3, 5), 255);
        assert_eq!(alpha_at(&c, 5, 5), 128);
    }

    #[test]
    fn test_transform_stack() {
        let mut c = Canvas::new(20, 20);
        c.save();
        c.translate(10.0, 10.0);
        c.scale(-1.0, 1.0);
        assert_eq!(c.transform().apply(5.0, 0.0), (5.0, 10.0));
        c.restore();
        assert_eq!(c.transform(), Transform::IDENTITY);
        // Extra restores are harmless
        c.restore();
        assert_eq!(c.transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_circle_fill_centre_and_corner() {
        let mut c = Canvas::new(40, 40);
        c.set_fill(Color::WHITE);
        c.begin_path();
        c.circle(20.0, 20.0, 10.0);
        c.fill();
        assert_eq!(alpha_at(&c, 20, 20), 255);
        assert_eq!(alpha_at(&c, 2, 2), 0);
        assert_eq!(alpha_at(&c, 20, 5), 0);
    }

    #[test]
    fn test_nonzero_winding_keeps_overlaps_filled() {
        let mut c = Canvas::new(30, 10);
        c.set_fill(Color::BLACK.alpha(0.5));
        c.begin_path();
        c.rect(0.0, 0.0, 20.0, 10.0);
        c.rect(10.0, 0.0, 20.0, 10.0);
        c.fill();
        // Overlap painted once, not twice
        assert_eq!(alpha_at(&c, 15, 5), alpha_at(&c, 5, 5));
    }

    #[test]
    fn test_self_overlapping_stroke_blends_once() {
        let mut c = Canvas::new(40, 40);
        c.set_stroke(Color::BLACK.alpha(0.5));
        c.set_line_width(6.0);
        c.begin_path();
        c.move_to(5.0, 20.0);
        c.line_to(35.0, 20.0);
        c.line_to(20.0, 5.0);
        c.line_to(20.0, 35.0);
        c.stroke();
        let crossing = alpha_at(&c, 20, 20);
        let plain = alpha_at(&c, 10, 20);
        assert_eq!(crossing, plain);
        assert!(plain > 100);
    }

    #[test]
    fn test_erase_clears_to_transparent() {
        let mut c = Canvas::new(20, 20);
        c.set_fill(Color::GOLD);
        c.fill_rect(0.0, 0.0, 20.0, 20.0);
        c.begin_path();
        c.rect(5.0, 5.0, 5.0, 5.0);
        c.erase();
        assert_eq!(alpha_at(&c, 7, 7), 0);
        assert_eq!(alpha_at(&c, 15, 15), 255);
    }

    #[test]
    fn test_arc_sweep_rules() {
        assert!((arc_sweep(0.0, TAU, false) - TAU).abs() < 1e-6);
        assert!((arc_sweep(0.0, PI, true) + PI).abs() < 1e-6);
        assert!((arc_sweep(PI, 0.0, false) - PI).abs() < 1e-6);
        assert!((arc_sweep(PI, 0.0, true) + PI).abs() < 1e-6);
    }

    #[test]
    fn test_offscreen_and_degenerate_paths() {
        let mut c = Canvas::new(10, 10);
        c.begin_path();
        c.circle(-100.0, -100.0, 5.0);
        c.fill();
        c.begin_path();
        c.move_to(f32::NAN, 1.0);
        c.line_to(3.0, 3.0);
        c.stroke();
        c.fill_rect(0.0, 0.0, 0.0, 0.0);
        assert!(c.image().pixels().all(|p| p[3] == 0));

        let mut empty = Canvas::new(0, 0);
        empty.fill_rect(0.0, 0.0, 5.0, 5.0);
    }

    #[test]
    fn test_glow_spreads_beyond_shape() {
        let mut c = Canvas::new(40, 40);
        c.set_glow(Some(Glow { color: Color::RED, radius: 6.0 }));
        c.set_fill(Color::WHITE);
        c.begin_path();
        c.circle(20.0, 20.0, 8.0);
        c.fill();
        assert!(alpha_at(&c, 20, 9) > 0, "halo missing outside the disc");
        assert_eq!(alpha_at(&c, 20, 20), 255);
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut c = Canvas::new(40, 20);
        c.set_fill(Color::BLACK);
        c.fill_text("01", 1.0, 1.0, 14.0);
        assert!(c.image().pixels().any(|p| p[3] > 0));
    }
}
