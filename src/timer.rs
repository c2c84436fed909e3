use folio_core::Wait;
use std::future::Future;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve after `ms` via `setTimeout`; resolves immediately without a window.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web::window().is_some_and(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .is_ok()
        });
        if !scheduled {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutWait;

impl Wait for TimeoutWait {
    fn wait(&self, ms: u32) -> impl Future<Output = ()> {
        sleep_ms(ms)
    }
}
