use crate::canvas::CanvasSurface;
use crate::dom;
use folio_core::{FrameClock, LoopHandle, MatrixRain, Mode, Painter, Phase, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const ACTIVE: &str = "active";
const HACKER_BODY: &str = "hacker-mode";

/// DOM side of the hacker-mode transition.
#[derive(Clone)]
pub struct HackerStage {
    body: web::HtmlElement,
    overlay: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    lines: [web::Element; 3],
    status: web::HtmlElement,
    trigger: web::HtmlButtonElement,
    label: Option<web::Element>,
    icon: Option<web::Element>,
    rain: Rc<RefCell<MatrixRain>>,
    clock: Rc<RefCell<FrameClock>>,
    running: Option<LoopHandle>,
}

impl HackerStage {
    /// `None` when any element the transition cannot do without is missing.
    pub fn from_document(
        document: &web::Document,
        rain: Rc<RefCell<MatrixRain>>,
        clock: Rc<RefCell<FrameClock>>,
    ) -> Option<Self> {
        let canvas: web::HtmlCanvasElement = dom::by_id(document, "hk-ov-canvas")?;
        let ctx = match dom::context_2d(&canvas) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[hacker] overlay canvas: {:?}", e);
                return None;
            }
        };
        Some(Self {
            body: document.body()?,
            overlay: dom::by_id(document, "hk-overlay")?,
            canvas,
            ctx,
            lines: [
                document.get_element_by_id("hk-line-1")?,
                document.get_element_by_id("hk-line-2")?,
                document.get_element_by_id("hk-line-3")?,
            ],
            status: dom::by_id(document, "hk-status")?,
            trigger: dom::by_id(document, "hacker-toggle")?,
            label: document.get_element_by_id("hacker-btn-label"),
            icon: document
                .query_selector("#hacker-toggle .hm-skull")
                .ok()
                .flatten(),
            rain,
            clock,
            running: None,
        })
    }

    pub fn trigger(&self) -> &web::HtmlButtonElement {
        &self.trigger
    }
}

impl Stage for HackerStage {
    fn set_trigger_locked(&mut self, locked: bool) {
        self.trigger.set_disabled(locked);
    }

    fn show_overlay(&mut self) {
        self.rain.borrow_mut().reset();
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = self.overlay.class_list().add_1(ACTIVE);
        let painter = Painter::new(self.rain.clone(), CanvasSurface::new(self.ctx.clone()));
        if let Some(old) = self.running.take() {
            old.stop();
        }
        self.running = Some(
            self.clock
                .borrow_mut()
                .register("overlay-rain", Box::new(painter)),
        );
    }

    fn clear_text(&mut self) {
        for line in &self.lines {
            line.set_text_content(Some(""));
        }
        self.status.set_text_content(Some(""));
    }

    fn set_line(&mut self, line: usize, text: &str) {
        if let Some(el) = self.lines.get(line) {
            el.set_text_content(Some(text));
        }
    }

    fn set_status(&mut self, text: &str, color: &str) {
        self.status.set_text_content(Some(text));
        dom::set_style(&self.status, "color", color);
    }

    fn apply_mode(&mut self, mode: Mode) {
        _ = self
            .body
            .class_list()
            .toggle_with_force(HACKER_BODY, mode.is_hacker());
        if let Some(label) = &self.label {
            label.set_text_content(Some(mode.toggle_label()));
        }
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(mode.toggle_icon()));
        }
    }

    fn begin_fade(&mut self, duration_ms: u32) {
        let transition = format!("opacity {}s ease", duration_ms as f32 / 1000.0);
        dom::set_style(&self.overlay, "transition", &transition);
        dom::set_style(&self.overlay, "opacity", "0");
    }

    fn hide_overlay(&mut self) {
        if let Some(handle) = self.running.take() {
            handle.stop();
        }
        _ = self.overlay.class_list().remove_1(ACTIVE);
        dom::clear_style(&self.overlay, "opacity");
        dom::clear_style(&self.overlay, "transition");
    }

    fn enter_phase(&mut self, phase: Phase) {
        log::debug!("[hacker] phase {:?}", phase);
    }
}
