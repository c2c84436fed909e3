use crate::dom;
use crate::timer::sleep_ms;
use folio_core::constants::{
    BAR_THRESHOLD, COUNTER_INTERVAL_MS, HERO_THRESHOLD, REVEAL_THRESHOLD, SECTION_ROOT_MARGIN,
};
use folio_core::{reveal_delay_secs, Counter, Fire, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub enum Options {
    Threshold(f64),
    RootMargin(&'static str),
}

/// Observe `targets`, each with its own subscription built by `subscribe`.
/// `on_fire` gets the target and its index within the observer batch; once
/// subscriptions are unobserved after firing.
pub fn observe(
    targets: Vec<web::Element>,
    options: Options,
    subscribe: fn() -> Subscription,
    mut on_fire: impl FnMut(&web::Element, usize) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let subs: Rc<RefCell<Vec<(web::Element, Subscription)>>> = Rc::new(RefCell::new(
        targets.iter().map(|t| (t.clone(), subscribe())).collect(),
    ));

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for (i, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let fire = {
                    let mut subs = subs.borrow_mut();
                    match subs.iter_mut().find(|(el, _)| *el == target) {
                        Some((_, sub)) => sub.on_visibility(entry.is_intersecting()),
                        None => Fire::Skip,
                    }
                };
                if let Fire::Run { detach } = fire {
                    on_fire(&target, i);
                    if detach {
                        observer.unobserve(&target);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    match options {
        Options::Threshold(t) => init.set_threshold(&JsValue::from_f64(t)),
        Options::RootMargin(m) => init.set_root_margin(m),
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for t in &targets {
        observer.observe(t);
    }
    callback.forget();
    Ok(())
}

pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    observe(
        dom::query_all(document, ".reveal"),
        Options::Threshold(REVEAL_THRESHOLD),
        Subscription::once,
        |el, i| {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "transition-delay", &format!("{}s", reveal_delay_secs(i)));
            }
            _ = el.class_list().add_1("visible");
        },
    )
}

pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let Some(hero) = document.get_element_by_id("hero") else {
        log::warn!("[counters] #hero missing; counters stay at their initial text");
        return Ok(());
    };
    let stats = dom::query_all(document, ".stat-num");
    observe(
        vec![hero],
        Options::Threshold(HERO_THRESHOLD),
        Subscription::once,
        move |_, _| {
            for el in &stats {
                let target = el
                    .get_attribute("data-target")
                    .and_then(|t| t.trim().parse::<u32>().ok())
                    .unwrap_or(0);
                spawn_local(run_counter(el.clone(), Counter::new(target)));
            }
        },
    )
}

async fn run_counter(el: web::Element, mut counter: Counter) {
    while !counter.is_done() {
        sleep_ms(COUNTER_INTERVAL_MS).await;
        let value = counter.advance();
        el.set_text_content(Some(&value.to_string()));
    }
}

pub fn wire_skill_bars(document: &web::Document) -> anyhow::Result<()> {
    observe(
        dom::query_all(document, ".bar-fill"),
        Options::Threshold(BAR_THRESHOLD),
        Subscription::once,
        |el, _| {
            let width = el.get_attribute("data-width").unwrap_or_default();
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "width", &format!("{}%", width));
            }
        },
    )
}

pub fn wire_active_nav(document: &web::Document) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, ".nav-links a");
    let doc = document.clone();
    observe(
        dom::query_all(document, "section[id]"),
        Options::RootMargin(SECTION_ROOT_MARGIN),
        Subscription::repeat,
        move |section, _| {
            for a in &anchors {
                _ = a.class_list().remove_1("active");
            }
            let selector = format!(".nav-links a[href=\"#{}\"]", section.id());
            if let Ok(Some(active)) = doc.query_selector(&selector) {
                _ = active.class_list().add_1("active");
            }
        },
    )
}
