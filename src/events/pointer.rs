use crate::dom;
use folio_core::{follower_look, Follower, FrameClock, Tickable};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HOVER_TARGETS: &str = "a, button, .project-card, .contact-card";

/// Moves the follower ring toward the pointer once per frame.
struct FollowerLoop {
    follower: Rc<RefCell<Follower>>,
    el: web::HtmlElement,
}

impl Tickable for FollowerLoop {
    fn tick(&mut self) {
        let pos = self.follower.borrow_mut().ease();
        dom::set_style(&self.el, "left", &format!("{}px", pos.x));
        dom::set_style(&self.el, "top", &format!("{}px", pos.y));
    }
}

pub fn wire_cursor(document: &web::Document, clock: &Rc<RefCell<FrameClock>>) {
    let (Some(cursor), Some(ring)) = (
        dom::by_id::<web::HtmlElement>(document, "cursor"),
        dom::by_id::<web::HtmlElement>(document, "cursor-follower"),
    ) else {
        log::warn!("[cursor] #cursor or #cursor-follower missing; custom cursor disabled");
        return;
    };
    let follower = Rc::new(RefCell::new(Follower::default()));

    let follower_move = follower.clone();
    dom::add_event_listener(document, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        dom::set_style(&cursor, "left", &format!("{}px", x));
        dom::set_style(&cursor, "top", &format!("{}px", y));
        follower_move.borrow_mut().target = Vec2::new(x, y);
    });

    for el in dom::query_all(document, HOVER_TARGETS) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let ring = ring.clone();
            dom::add_listener(&el, event, move || {
                let (size, border) = follower_look(hovering);
                dom::set_style(&ring, "width", &format!("{}px", size));
                dom::set_style(&ring, "height", &format!("{}px", size));
                dom::set_style(&ring, "border-color", border);
            });
        }
    }

    clock.borrow_mut().register(
        "cursor-follower",
        Box::new(FollowerLoop { follower, el: ring }),
    );
}
