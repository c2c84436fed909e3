use folio_core::FrameClock;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SLOW_FRAME: Duration = Duration::from_millis(50);

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive the clock from `requestAnimationFrame` forever. Each frame requests
/// the next one after it finishes, so slow frames delay later ticks.
pub fn start_loop(clock: Rc<RefCell<FrameClock>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let started = Instant::now();
        clock.borrow_mut().frame();
        let spent = started.elapsed();
        if spent > SLOW_FRAME {
            log::debug!("[frame] slow frame {:?}", spent);
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
