// Shared helpers for the host-side tests: a recording drawing surface and
// instant waits for the async sequences.

#![allow(dead_code)]

use folio_core::{Glow, Rgba, Surface, Wait};
use glam::Vec2;
use std::cell::RefCell;
use std::future::{ready, Future};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Clear { width: f32, height: f32 },
    Rect { alpha: f32 },
    Circle { center: Vec2, radius: f32, alpha: f32 },
    Line { from: Vec2, to: Vec2, alpha: f32 },
    Font(String),
    Glyph { glyph: char, at: Vec2, color: String, blur: f32 },
}

/// Records every draw call. Clones share the same log.
#[derive(Clone, Default)]
pub struct Recorder {
    pub cmds: Rc<RefCell<Vec<Cmd>>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<Cmd> {
        std::mem::take(&mut *self.cmds.borrow_mut())
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.cmds.borrow_mut().push(Cmd::Clear { width, height });
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, color: Rgba) {
        self.cmds.borrow_mut().push(Cmd::Rect { alpha: color.a });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.cmds.borrow_mut().push(Cmd::Circle {
            center,
            radius,
            alpha: color.a,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.cmds.borrow_mut().push(Cmd::Line {
            from,
            to,
            alpha: color.a,
        });
    }

    fn set_font(&mut self, font: &str) {
        self.cmds.borrow_mut().push(Cmd::Font(font.to_string()));
    }

    fn fill_glyph(&mut self, glyph: char, at: Vec2, color: &str, glow: Glow<'_>) {
        self.cmds.borrow_mut().push(Cmd::Glyph {
            glyph,
            at,
            color: color.to_string(),
            blur: glow.blur,
        });
    }
}

/// Resolves immediately and remembers every requested delay.
#[derive(Default)]
pub struct InstantWait {
    pub waits: RefCell<Vec<u32>>,
}

impl InstantWait {
    pub fn total_ms(&self) -> u64 {
        self.waits.borrow().iter().map(|&ms| ms as u64).sum()
    }
}

impl Wait for InstantWait {
    fn wait(&self, ms: u32) -> impl Future<Output = ()> {
        self.waits.borrow_mut().push(ms);
        ready(())
    }
}
