mod web;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use reference_theme_core::{ThemeController, ThemeError};

use crate::web::{popup_key, WebDocument, WebStorage};

type PageController = ThemeController<WebDocument, WebStorage>;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = RefCell::new(None);
}

fn with_controller<T>(action: impl FnOnce(&PageController) -> T) -> Result<T, JsValue> {
    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            let document =
                WebDocument::current().ok_or_else(|| js_error("theme: no document available"))?;
            *slot = Some(ThemeController::new(document, WebStorage));
        }
        match slot.as_ref() {
            Some(controller) => Ok(action(controller)),
            None => Err(js_error("theme: controller unavailable")),
        }
    })
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn popup_fault(err: ThemeError) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("theme: popup toggle failed", err.to_string());
    }
    js_error(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _shown = with_controller(|controller| controller.init())?;
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::log!("theme: initialized", "railroad shown", _shown);
    }
    Ok(())
}

// Exported names are called from the generated page markup's onclick handlers.
#[wasm_bindgen]
pub fn spec_toggle_uncovered(item_index: JsValue) -> Result<(), JsValue> {
    let key = popup_key(&item_index);
    with_controller(|controller| controller.toggle_uncovered_popup(&key))?
        .map(|_| ())
        .map_err(popup_fault)
}

#[wasm_bindgen]
pub fn spec_toggle_tests(rule_id: JsValue) -> Result<(), JsValue> {
    let key = popup_key(&rule_id);
    with_controller(|controller| controller.toggle_tests_popup(&key))?
        .map(|_| ())
        .map_err(popup_fault)
}

#[wasm_bindgen]
pub fn toggle_railroad() -> Result<(), JsValue> {
    with_controller(|controller| {
        controller.toggle_railroad_diagrams();
    })
}

#[wasm_bindgen]
pub fn show_railroad() -> Result<(), JsValue> {
    with_controller(|controller| controller.show_railroad_diagrams())
}
