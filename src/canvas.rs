use folio_core::{Glow, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by a 2D canvas context.
#[derive(Clone)]
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_glyph(&mut self, glyph: char, at: Vec2, color: &str, glow: Glow<'_>) {
        let mut buf = [0u8; 4];
        self.ctx.set_fill_style_str(color);
        self.ctx.set_shadow_color(glow.color);
        self.ctx.set_shadow_blur(glow.blur as f64);
        _ = self
            .ctx
            .fill_text(glyph.encode_utf8(&mut buf), at.x as f64, at.y as f64);
    }
}
