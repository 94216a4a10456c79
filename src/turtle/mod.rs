//! # Pen module
//!
//! A logo-style raster pen used as the drawing backend for
//! [`crate::l_system::LSystem`]. The pen tracks a position, a heading, and
//! stroke attributes (color, width); drawn segments are collected as
//! [`Stroke`]s and rasterized on demand.
//!
//! Angle convention: headings are in degrees, `0°` points along +X, and
//! positive rotation is counter-clockwise in a y-up world frame. Rasters are
//! y-down, so [`Pen::render`] flips the Y axis when plotting.
use crate::errors::PenError;
use geo_types::Point;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// The saved/restored portion of the pen: position and heading only.
/// Color and stroke width deliberately stay out of this triple, so a
/// push/pop pair never disturbs them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

/// A single drawn segment in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub color: Rgba<u8>,
    pub width: f64,
}

/// A mutable pen cursor. Starts at the origin, heading `0°`, pen down,
/// drawing 1px black.
#[derive(Clone, Debug)]
pub struct Pen {
    position: Point<f64>,
    heading: f64,
    down: bool,
    color: Rgba<u8>,
    width: f64,
    strokes: Vec<Stroke>,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen {
    pub fn new() -> Self {
        Pen {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            down: true,
            color: Rgba([0, 0, 0, 255]),
            width: 1.0,
            strokes: vec![],
        }
    }

    /// Advance `distance` along the current heading. Records a [`Stroke`]
    /// when the pen is down; otherwise just relocates.
    pub fn forward(&mut self, distance: f64) {
        let rad = self.heading.to_radians();
        let next = self.position + Point::new(distance * rad.cos(), distance * rad.sin());
        if self.down {
            self.strokes.push(Stroke {
                start: self.position,
                end: next,
                color: self.color,
                width: self.width,
            });
        }
        self.position = next;
    }

    /// Turn by a signed angle in degrees; positive is counter-clockwise.
    pub fn rotate(&mut self, degrees: f64) {
        self.heading += degrees;
    }

    pub fn pen_up(&mut self) {
        self.down = false;
    }

    pub fn pen_down(&mut self) {
        self.down = true;
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn state(&self) -> PenState {
        PenState {
            x: self.position.x(),
            y: self.position.y(),
            heading: self.heading,
        }
    }

    pub fn restore(&mut self, state: PenState) {
        self.position = Point::new(state.x, state.y);
        self.heading = state.heading;
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Rasterize every stroke into an RGBA image sized to the drawing's
    /// bounding box plus a stroke-width margin, on a transparent background.
    pub fn render(&self) -> Result<RgbaImage, PenError> {
        if self.strokes.is_empty() {
            return Err(PenError::EmptyDrawing);
        }
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut max_w = 1.0f64;
        for s in &self.strokes {
            for p in [s.start, s.end] {
                min_x = min_x.min(p.x());
                min_y = min_y.min(p.y());
                max_x = max_x.max(p.x());
                max_y = max_y.max(p.y());
            }
            max_w = max_w.max(s.width);
        }
        let margin = max_w / 2.0 + 1.0;
        let w = (max_x - min_x + 2.0 * margin).ceil().max(1.0) as u32;
        let h = (max_y - min_y + 2.0 * margin).ceil().max(1.0) as u32;
        let mut img = RgbaImage::new(w, h);
        for s in &self.strokes {
            // World -> pixel, with the Y flip.
            let x0 = s.start.x() - min_x + margin;
            let y0 = max_y - s.start.y() + margin;
            let x1 = s.end.x() - min_x + margin;
            let y1 = max_y - s.end.y() + margin;
            let radius = (s.width / 2.0).max(0.5);
            let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            let steps = (len / 0.25).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                stamp(&mut img, x0 + t * (x1 - x0), y0 + t * (y1 - y0), radius, s.color);
            }
        }
        Ok(img)
    }

    /// Write the rendered drawing to `name`. The format is chosen by
    /// extension; only `.png` is supported.
    pub fn save(&self, name: &str) -> Result<(), PenError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => {
                let img = self.render()?;
                img.save(name)?;
                Ok(())
            }
            _ => Err(PenError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// Fill a disc of `radius` around (`cx`, `cy`) in pixel space.
fn stamp(img: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(img.width().saturating_sub(1));
    let y1 = ((cy + radius).ceil() as u32).min(img.height().saturating_sub(1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PenError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_forward_draws_stroke() {
        let mut pen = Pen::new();
        pen.forward(100.0);
        assert_eq!(pen.strokes().len(), 1);
        assert!(close(pen.position().x(), 100.0));
        assert!(close(pen.position().y(), 0.0));
    }

    #[test]
    fn test_penup_leaves_no_mark() {
        let mut pen = Pen::new();
        pen.pen_up();
        pen.forward(50.0);
        assert!(pen.strokes().is_empty());
        assert!(close(pen.position().x(), 50.0));
    }

    #[test]
    fn test_rotate_is_counter_clockwise() {
        // Heading 0 is +X; +90 degrees must point the pen at +Y.
        let mut pen = Pen::new();
        pen.rotate(90.0);
        pen.forward(10.0);
        assert!(close(pen.position().x(), 0.0));
        assert!(close(pen.position().y(), 10.0));
    }

    #[test]
    fn test_forward_displacement_magnitude() {
        let mut pen = Pen::new();
        pen.rotate(33.7);
        pen.forward(42.0);
        let p = pen.position();
        let dist = (p.x() * p.x() + p.y() * p.y()).sqrt();
        assert!((dist - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_state_restore_roundtrip() {
        let mut pen = Pen::new();
        pen.rotate(45.0);
        pen.forward(10.0);
        let saved = pen.state();
        pen.rotate(-170.0);
        pen.forward(99.0);
        pen.restore(saved);
        assert_eq!(pen.state(), saved);
    }

    #[test]
    fn test_restore_keeps_style() {
        let mut pen = Pen::new();
        let saved = pen.state();
        pen.set_color(Rgba([10, 20, 30, 40]));
        pen.set_width(3.0);
        pen.restore(saved);
        pen.forward(5.0);
        let s = &pen.strokes()[0];
        assert_eq!(s.color, Rgba([10, 20, 30, 40]));
        assert!(close(s.width, 3.0));
    }

    #[test]
    fn test_render_covers_drawing() {
        let mut pen = Pen::new();
        pen.forward(10.0);
        pen.rotate(90.0);
        pen.forward(5.0);
        let img = pen.render().unwrap();
        assert!(img.width() >= 10);
        assert!(img.height() >= 5);
        // Something actually got inked.
        assert!(img.pixels().any(|p| p.0[3] != 0));
    }

    #[test]
    fn test_render_empty_is_error() {
        let pen = Pen::new();
        assert!(matches!(pen.render(), Err(PenError::EmptyDrawing)));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let mut pen = Pen::new();
        pen.forward(1.0);
        match pen.save("drawing.svg") {
            Err(PenError::UnsupportedFormat(name)) => assert_eq!(name, "drawing.svg"),
            other => panic!("expected UnsupportedFormat, got {:?}", other.err()),
        }
    }
}
