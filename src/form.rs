use crate::dom;
use crate::timer::TimeoutWait;
use folio_core::{submit_contact, FormView};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const SENDING_HTML: &str = "<i class=\"fa-solid fa-spinner fa-spin\"></i> Sending…";
const SENT_HTML: &str = "<i class=\"fa-solid fa-check\"></i> Message Sent!";
const IDLE_HTML: &str = "<i class=\"fa-solid fa-paper-plane\"></i> Send Message";
const SENT_NOTE: &str = "✅ Thanks! I'll get back to you soon.";

#[derive(Clone)]
struct ContactForm {
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    note: Option<web::Element>,
}

impl FormView for ContactForm {
    fn show_sending(&mut self) {
        self.button.set_disabled(true);
        self.button.set_inner_html(SENDING_HTML);
    }

    fn show_sent(&mut self) {
        self.button.set_inner_html(SENT_HTML);
        if let Some(note) = &self.note {
            note.set_text_content(Some(SENT_NOTE));
        }
        self.form.reset();
    }

    fn restore(&mut self) {
        self.button.set_disabled(false);
        self.button.set_inner_html(IDLE_HTML);
        if let Some(note) = &self.note {
            note.set_text_content(Some(""));
        }
    }
}

pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = dom::by_id::<web::HtmlFormElement>(document, "contact-form") else {
        return;
    };
    let Some(button) = dom::by_id::<web::HtmlButtonElement>(document, "submit-btn") else {
        log::warn!("[form] #submit-btn missing; contact form left to the browser");
        return;
    };
    let view = ContactForm {
        form: form.clone(),
        button,
        note: document.get_element_by_id("form-note"),
    };
    dom::add_event_listener(&form, "submit", move |ev| {
        ev.prevent_default();
        let mut view = view.clone();
        spawn_local(async move {
            submit_contact(&mut view, &TimeoutWait).await;
        });
    });
}
