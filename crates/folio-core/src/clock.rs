//! Frame scheduling for the independent animation loops.
//!
//! Every owner (cursor follower, particle field, each rain renderer) registers
//! its own loop and receives a handle. The browser driver calls
//! [`FrameClock::frame`] once per `requestAnimationFrame`; tests call it
//! directly to advance deterministically.

use crate::surface::{Animation, Surface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub trait Tickable {
    fn tick(&mut self);
}

/// Cancel handle for a registered loop. Cloning shares the same loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    name: &'static str,
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            log::debug!("[clock] stop loop {}", self.name);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

struct Registered {
    running: Rc<Cell<bool>>,
    body: Box<dyn Tickable>,
}

#[derive(Default)]
pub struct FrameClock {
    loops: Vec<Registered>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, body: Box<dyn Tickable>) -> LoopHandle {
        let running = Rc::new(Cell::new(true));
        self.loops.push(Registered {
            running: running.clone(),
            body,
        });
        log::debug!("[clock] start loop {}", name);
        LoopHandle { name, running }
    }

    /// Run one frame: drop stopped loops, then tick the rest in registration order.
    pub fn frame(&mut self) {
        self.loops.retain(|l| l.running.get());
        for l in &mut self.loops {
            // a loop stopped earlier in this frame must not draw again
            if l.running.get() {
                l.body.tick();
            }
        }
        self.frames += 1;
    }

    pub fn active_loops(&self) -> usize {
        self.loops.iter().filter(|l| l.running.get()).count()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Binds a shared animation to the surface it draws on.
///
/// The animation stays shared so resize handlers and the hacker stage can
/// reach it between frames.
pub struct Painter<A, S> {
    pub scene: Rc<RefCell<A>>,
    pub surface: S,
}

impl<A, S> Painter<A, S> {
    pub fn new(scene: Rc<RefCell<A>>, surface: S) -> Self {
        Self { scene, surface }
    }
}

impl<A: Animation, S: Surface> Tickable for Painter<A, S> {
    fn tick(&mut self) {
        self.scene.borrow_mut().draw_frame(&mut self.surface);
    }
}
