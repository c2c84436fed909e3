use crate::dom;
use crate::storage::LocalStore;
use crate::timer::sleep_ms;
use folio_core::constants::TAB_REVEAL_REPLAY_MS;
use folio_core::{toggle_theme, AppState, ScrollState, Tab, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_scroll_state(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navbar = document.get_element_by_id("navbar");
    let back_to_top = document.get_element_by_id("back-to-top");
    dom::add_listener(&window, "scroll", move || {
        let s = ScrollState::from_offset(dom::scroll_y());
        if let Some(el) = &navbar {
            _ = el.class_list().toggle_with_force("scrolled", s.navbar_scrolled);
        }
        if let Some(el) = &back_to_top {
            _ = el.class_list().toggle_with_force("visible", s.back_to_top_visible);
        }
    });
}

pub fn wire_back_to_top(document: &web::Document) {
    let wired = dom::add_click_listener(document, "back-to-top", || {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
    if !wired {
        log::warn!("[page] #back-to-top missing");
    }
}

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(hamburger), Some(links), Some(body)) = (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("nav-links"),
        document.body(),
    ) else {
        log::warn!("[page] mobile menu elements missing");
        return;
    };

    {
        let target = hamburger.clone();
        let (hamburger, links, body) = (hamburger.clone(), links.clone(), body.clone());
        dom::add_listener(&target, "click", move || {
            _ = hamburger.class_list().toggle("open");
            let open = links.class_list().toggle("open").unwrap_or(false);
            dom::set_style(&body, "overflow", if open { "hidden" } else { "" });
        });
    }

    if let Ok(anchors) = links.query_selector_all("a") {
        for i in 0..anchors.length() {
            let Some(anchor) = anchors.item(i) else {
                continue;
            };
            let (hamburger, links, body) = (hamburger.clone(), links.clone(), body.clone());
            dom::add_listener(&anchor, "click", move || {
                _ = hamburger.class_list().remove_1("open");
                _ = links.class_list().remove_1("open");
                dom::set_style(&body, "overflow", "");
            });
        }
    }
}

pub fn apply_theme(body: &web::HtmlElement, button: &web::Element, theme: Theme) {
    _ = body
        .class_list()
        .toggle_with_force(Theme::BODY_MARKER, theme == Theme::Light);
    button.set_inner_html(&theme.button_html());
}

pub fn wire_theme_toggle(document: &web::Document, state: Rc<RefCell<AppState>>, store: LocalStore) {
    let (Some(button), Some(body)) = (document.get_element_by_id("theme-toggle"), document.body())
    else {
        log::warn!("[theme] #theme-toggle missing; theme switch disabled");
        return;
    };
    apply_theme(&body, &button, state.borrow().theme());

    let store = RefCell::new(store);
    let button_click = button.clone();
    dom::add_listener(&button, "click", move || {
        let current = state.borrow().theme();
        let next = toggle_theme(current, &mut *store.borrow_mut());
        state.borrow_mut().set_theme(next);
        apply_theme(&body, &button_click, next);
    });
}

pub fn wire_tabs(document: &web::Document) {
    let tabs = dom::query_all(document, ".blog-tab");
    for tab in &tabs {
        let tabs = tabs.clone();
        let tab_el = tab.clone();
        let doc = document.clone();
        dom::add_listener(tab, "click", move || {
            let raw = tab_el.get_attribute("data-tab").unwrap_or_default();
            let target: Tab = match raw.parse() {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("[tabs] {}", e);
                    return;
                }
            };
            for t in &tabs {
                _ = t.class_list().remove_1("active");
            }
            _ = tab_el.class_list().add_1("active");
            for t in Tab::ALL {
                if let Some(content) = doc.get_element_by_id(&t.content_id()) {
                    _ = content.class_list().toggle_with_force("hidden", t != target);
                }
            }
            replay_reveal(&doc, target);
        });
    }
}

fn replay_reveal(document: &web::Document, tab: Tab) {
    let cards = dom::query_all(document, &format!("#{} .reveal", tab.content_id()));
    for card in &cards {
        _ = card.class_list().remove_1("visible");
    }
    spawn_local(async move {
        sleep_ms(TAB_REVEAL_REPLAY_MS).await;
        for card in cards {
            _ = card.class_list().add_1("visible");
        }
    });
}
