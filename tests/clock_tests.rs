// Host-side tests for the frame clock driving the animation loops.

mod support;

use folio_core::{FrameClock, LoopHandle, MatrixRain, Painter, ParticleField, RainParams, Tickable};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use support::{Cmd, Recorder};

struct Count(Rc<Cell<u32>>);

impl Tickable for Count {
    fn tick(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Stops another loop the first time it runs.
struct Stopper(Rc<RefCell<Option<LoopHandle>>>);

impl Tickable for Stopper {
    fn tick(&mut self) {
        if let Some(h) = self.0.borrow_mut().take() {
            h.stop();
        }
    }
}

#[test]
fn every_registered_loop_ticks_once_per_frame() {
    let mut clock = FrameClock::new();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    clock.register("a", Box::new(Count(a.clone())));
    clock.register("b", Box::new(Count(b.clone())));
    for _ in 0..5 {
        clock.frame();
    }
    assert_eq!(a.get(), 5);
    assert_eq!(b.get(), 5);
    assert_eq!(clock.frames(), 5);
    assert_eq!(clock.active_loops(), 2);
}

#[test]
fn stopped_loop_never_ticks_again() {
    let mut clock = FrameClock::new();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let ha = clock.register("a", Box::new(Count(a.clone())));
    clock.register("b", Box::new(Count(b.clone())));
    clock.frame();
    ha.stop();
    ha.stop();
    assert!(!ha.is_running());
    assert_eq!(ha.name(), "a");
    for _ in 0..3 {
        clock.frame();
    }
    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 4);
    assert_eq!(clock.active_loops(), 1);
}

#[test]
fn stop_from_inside_a_frame_takes_effect_immediately() {
    let mut clock = FrameClock::new();
    let slot = Rc::new(RefCell::new(None));
    let victim = Rc::new(Cell::new(0));
    clock.register("stopper", Box::new(Stopper(slot.clone())));
    let handle = clock.register("victim", Box::new(Count(victim.clone())));
    *slot.borrow_mut() = Some(handle);
    clock.frame();
    clock.frame();
    assert_eq!(victim.get(), 0);
}

#[test]
fn painters_draw_their_scene_each_frame() {
    let mut clock = FrameClock::new();
    let field = Rc::new(RefCell::new(ParticleField::with_seed(2)));
    field.borrow_mut().initialize(180.0, 100.0);
    let rain = Rc::new(RefCell::new(MatrixRain::with_seed(RainParams::ambient(), 2)));
    rain.borrow_mut().resize(140.0, 100.0);

    let particles_rec = Recorder::default();
    let rain_rec = Recorder::default();
    clock.register(
        "particles",
        Box::new(Painter::new(field.clone(), particles_rec.clone())),
    );
    let rain_loop = clock.register("rain", Box::new(Painter::new(rain.clone(), rain_rec.clone())));

    clock.frame();
    let circles = particles_rec
        .take()
        .iter()
        .filter(|c| matches!(c, Cmd::Circle { .. }))
        .count();
    assert_eq!(circles, 10);
    let glyphs = rain_rec
        .take()
        .iter()
        .filter(|c| matches!(c, Cmd::Glyph { .. }))
        .count();
    assert_eq!(glyphs, 10);

    rain_loop.stop();
    clock.frame();
    assert!(rain_rec.take().is_empty());
    assert!(!particles_rec.take().is_empty());
}
