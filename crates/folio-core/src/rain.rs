//! Matrix-style glyph rain drawn with fading trails.
//!
//! The page runs two instances: the ambient background, which never stops,
//! and the hacker overlay, which only runs while the overlay is shown.

use crate::constants::*;
use crate::surface::{Animation, Glow, Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct RainParams {
    pub name: &'static str,
    pub glyphs: Vec<char>,
    pub column_pitch: f32,
    pub font_px: f32,
    pub fade_alpha: f32,
    pub bright_probability: f32,
    pub glow_bright: f32,
    pub glow_normal: f32,
    pub increment: f32,
    pub reset_probability: f32,
    pub stagger_rows: f32,
}

impl RainParams {
    pub fn ambient() -> Self {
        Self {
            name: "ambient",
            glyphs: RAIN_GLYPHS.chars().collect(),
            column_pitch: RAIN_COLUMN_PITCH_PX,
            font_px: AMBIENT_FONT_PX,
            fade_alpha: AMBIENT_FADE_ALPHA,
            bright_probability: AMBIENT_BRIGHT_PROBABILITY,
            glow_bright: AMBIENT_GLOW_BRIGHT,
            glow_normal: AMBIENT_GLOW_NORMAL,
            increment: AMBIENT_INCREMENT,
            reset_probability: RAIN_RESET_PROBABILITY,
            stagger_rows: AMBIENT_STAGGER_ROWS,
        }
    }

    pub fn overlay() -> Self {
        Self {
            name: "overlay",
            font_px: OVERLAY_FONT_PX,
            fade_alpha: OVERLAY_FADE_ALPHA,
            bright_probability: OVERLAY_BRIGHT_PROBABILITY,
            glow_bright: OVERLAY_GLOW_BRIGHT,
            glow_normal: OVERLAY_GLOW_NORMAL,
            increment: OVERLAY_INCREMENT,
            stagger_rows: OVERLAY_STAGGER_ROWS,
            ..Self::ambient()
        }
    }

    pub fn font(&self) -> String {
        format!("{}px Share Tech Mono", self.font_px)
    }
}

pub struct MatrixRain {
    pub params: RainParams,
    columns: Vec<f32>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(params: RainParams, rng: StdRng) -> Self {
        Self {
            params,
            columns: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn with_seed(params: RainParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }

    /// Resize the canvas area and re-seed every column.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.reset();
    }

    /// Re-seed the columns with a random negative stagger so they enter unevenly.
    pub fn reset(&mut self) {
        let count = column_count(self.width, self.params.column_pitch);
        let stagger = self.params.stagger_rows;
        let rng = &mut self.rng;
        self.columns = (0..count).map(|_| -rng.gen::<f32>() * stagger).collect();
        log::debug!("[rain:{}] reset {} columns", self.params.name, count);
    }

    pub fn columns(&self) -> &[f32] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [f32] {
        &mut self.columns
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        let p = &self.params;
        surface.fill_rect(
            0.0,
            0.0,
            self.width,
            self.height,
            Rgba::new(0, 0, 0, p.fade_alpha),
        );
        surface.set_font(&p.font());
        for (i, cursor) in self.columns.iter_mut().enumerate() {
            let glyph = p.glyphs.choose(&mut self.rng).copied().unwrap_or(' ');
            let bright = self.rng.gen::<f32>() < p.bright_probability;
            let (color, blur) = if bright {
                (RAIN_BRIGHT, p.glow_bright)
            } else {
                (RAIN_GREEN, p.glow_normal)
            };
            let at = Vec2::new(i as f32 * p.column_pitch, *cursor * p.column_pitch);
            surface.fill_glyph(
                glyph,
                at,
                color,
                Glow {
                    color: RAIN_GREEN,
                    blur,
                },
            );
            if at.y > self.height && self.rng.gen::<f32>() < p.reset_probability {
                *cursor = 0.0;
            }
            *cursor += p.increment;
        }
    }
}

impl Animation for MatrixRain {
    fn draw_frame<S: Surface>(&mut self, surface: &mut S) {
        self.tick(surface);
    }
}

#[inline]
pub fn column_count(width: f32, pitch: f32) -> usize {
    if width <= 0.0 || pitch <= 0.0 {
        return 0;
    }
    (width / pitch).floor() as usize
}
