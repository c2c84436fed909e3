//! Minimal 2D drawing interface used by the canvas effects.
//!
//! The simulators only ever issue these few calls, so the browser binds them
//! to a `CanvasRenderingContext2d` and host tests record them instead.

use glam::Vec2;

/// Straight RGBA colour; `a` is 0..1 like CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Shadow settings applied to a glyph. A `blur` of 0 means no glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow<'a> {
    pub color: &'a str,
    pub blur: f32,
}

pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn set_font(&mut self, font: &str);
    fn fill_glyph(&mut self, glyph: char, at: Vec2, color: &str, glow: Glow<'_>);
}

/// Anything that renders one frame onto a surface.
pub trait Animation {
    fn draw_frame<S: Surface>(&mut self, surface: &mut S);
}
