#![cfg(target_arch = "wasm32")]
use folio_core::{
    load_theme, toggle_hacker_mode, AppState, FrameClock, MatrixRain, Painter, ParticleField,
    ParticleParams, RainParams, TypedText,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod form;
mod frame;
mod observers;
mod overlay;
mod storage;
mod timer;

use canvas::CanvasSurface;
use overlay::HackerStage;
use timer::{sleep_ms, TimeoutWait};

/// Canvas effects kept alive for the resize handler.
struct Canvases {
    particles: Option<(web::HtmlCanvasElement, Rc<RefCell<ParticleField>>)>,
    ambient: Option<(web::HtmlCanvasElement, Rc<RefCell<MatrixRain>>)>,
    overlay: Option<(web::HtmlCanvasElement, Rc<RefCell<MatrixRain>>)>,
}

// Resizing is a full replace, so every listener may call it.
fn resize_all(c: &Canvases) {
    if let Some((canvas, field)) = &c.particles {
        let (w, h) = dom::sync_canvas_to_viewport(canvas);
        field.borrow_mut().resize(w, h);
    }
    for (canvas, rain) in [&c.ambient, &c.overlay].into_iter().flatten() {
        let (w, h) = dom::sync_canvas_to_viewport(canvas);
        rain.borrow_mut().resize(w, h);
    }
}

fn wire_canvas_resize(canvases: Canvases) {
    resize_all(&canvases);
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move || resize_all(&canvases));
    }
}

/// Register a canvas animation on the clock, or skip it when the canvas is absent.
fn start_painter<A>(
    document: &web::Document,
    id: &'static str,
    scene: A,
    clock: &Rc<RefCell<FrameClock>>,
) -> Option<(web::HtmlCanvasElement, Rc<RefCell<A>>)>
where
    A: folio_core::Animation + 'static,
{
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, id) else {
        log::warn!("[init] #{} missing; effect skipped", id);
        return None;
    };
    let ctx = match dom::context_2d(&canvas) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[init] #{}: {:?}", id, e);
            return None;
        }
    };
    let scene = Rc::new(RefCell::new(scene));
    clock.borrow_mut().register(
        id,
        Box::new(Painter::new(scene.clone(), CanvasSurface::new(ctx))),
    );
    Some((canvas, scene))
}

fn wire_typed_text(document: &web::Document) {
    let Some(el) = document.get_element_by_id("typed-text") else {
        log::warn!("[init] #typed-text missing; hero text is static");
        return;
    };
    spawn_local(async move {
        let mut typed = TypedText::hero();
        loop {
            let frame = typed.step();
            el.set_text_content(Some(&frame.text));
            sleep_ms(frame.next_delay_ms).await;
        }
    });
}

fn wire_hacker_toggle(
    document: &web::Document,
    state: Rc<RefCell<AppState>>,
    clock: Rc<RefCell<FrameClock>>,
) -> Option<(web::HtmlCanvasElement, Rc<RefCell<MatrixRain>>)> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, "hk-ov-canvas") else {
        log::warn!("[init] #hk-ov-canvas missing; hacker mode skipped");
        return None;
    };
    let rain = Rc::new(RefCell::new(MatrixRain::new(
        RainParams::overlay(),
        StdRng::from_entropy(),
    )));
    let Some(stage) = HackerStage::from_document(document, rain.clone(), clock) else {
        log::warn!("[init] hacker-mode elements missing; toggle disabled");
        return None;
    };
    let trigger = stage.trigger().clone();
    dom::add_listener(&trigger, "click", move || {
        if state.borrow().is_transitioning() {
            log::warn!("[hacker] toggle ignored; transition in progress");
            return;
        }
        let state = state.clone();
        let mut stage = stage.clone();
        spawn_local(async move {
            if let Err(e) = toggle_hacker_mode(&state, &mut stage, &TimeoutWait).await {
                log::warn!("[hacker] {}", e);
            }
        });
    });
    Some((canvas, rain))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = storage::LocalStore::open();
    let state = Rc::new(RefCell::new(AppState::new(load_theme(&store))));
    let clock = Rc::new(RefCell::new(FrameClock::new()));

    events::wire_cursor(&document, &clock);
    events::wire_scroll_state(&document);
    events::wire_mobile_menu(&document);
    events::wire_theme_toggle(&document, state.clone(), store);
    events::wire_tabs(&document);
    events::wire_back_to_top(&document);
    wire_typed_text(&document);

    for (name, wired) in [
        ("reveal", observers::wire_reveal(&document)),
        ("counters", observers::wire_counters(&document)),
        ("skill bars", observers::wire_skill_bars(&document)),
        ("active nav", observers::wire_active_nav(&document)),
    ] {
        if let Err(e) = wired {
            log::warn!("[init] {} observer: {:?}", name, e);
        }
    }

    let particles = start_painter(
        &document,
        "particle-canvas",
        ParticleField::new(ParticleParams::default(), StdRng::from_entropy()),
        &clock,
    );
    // ambient rain always runs; CSS decides whether it is visible
    let ambient = start_painter(
        &document,
        "hk-matrix",
        MatrixRain::new(RainParams::ambient(), StdRng::from_entropy()),
        &clock,
    );
    let overlay = wire_hacker_toggle(&document, state, clock.clone());
    wire_canvas_resize(Canvases {
        particles,
        ambient,
        overlay,
    });

    form::wire_contact_form(&document);

    log::info!(
        "[init] {} frame loops registered",
        clock.borrow().active_loops()
    );
    frame::start_loop(clock);
    Ok(())
}
