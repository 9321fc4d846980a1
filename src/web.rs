use wasm_bindgen::{JsCast, JsValue};

use reference_theme_core::{Document, Element, PreferenceStore, StorageError};

#[derive(Clone)]
pub(crate) struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub(crate) fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

#[derive(Clone)]
pub(crate) struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(&format!(".{class}")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|idx| nodes.item(idx))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct WebStorage;

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(storage_error)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let result = self
            .storage()
            .and_then(|storage| storage.get_item(key).map_err(storage_error));
        if let Err(err) = &result {
            log_storage_failure("storage get failed", key, err);
        }
        result
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let result = self
            .storage()
            .and_then(|storage| storage.set_item(key, value).map_err(storage_error));
        if let Err(err) = &result {
            log_storage_failure("storage set failed", key, err);
        }
        result
    }
}

fn storage_error(err: JsValue) -> StorageError {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        return StorageError::from_exception(&exception.name(), &exception.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return StorageError::from_exception(&name, &message);
    }
    StorageError::Other(err.as_string().unwrap_or_default())
}

fn log_storage_failure(event: &str, key: &str, err: &StorageError) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!(
            format!("railroad preference: {event}"),
            key.to_string(),
            err.kind(),
            err.to_string()
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (event, key, err);
    }
}

pub(crate) fn popup_key(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if value.as_f64().is_some() {
        if let Ok(text) = js_sys::Number::from(value.clone()).to_string(10) {
            return text.into();
        }
    }
    js_sys::JsString::from("").concat(value).into()
}
