use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::error::StorageError;
use crate::preference::PreferenceStore;

#[derive(Debug, Default)]
struct ElementData {
    id: Option<String>,
    classes: Vec<String>,
    text: String,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }
}

impl Element for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, id: Option<&str>, classes: &str, text: &str) -> MemoryElement {
        let element = MemoryElement(Rc::new(RefCell::new(ElementData {
            id: id.map(str::to_string),
            classes: classes.split_whitespace().map(str::to_string).collect(),
            text: text.to_string(),
        })));
        self.elements.borrow_mut().push(element.clone());
        element
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .find(|element| element.0.borrow().id.as_deref() == Some(id))
            .cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.has_class(class))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    read_failure: RefCell<Option<StorageError>>,
    write_failure: RefCell<Option<StorageError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn unavailable() -> Self {
        let store = Self::new();
        store.fail_reads(StorageError::Unavailable);
        store.fail_writes(StorageError::Unavailable);
        store
    }

    pub fn fail_reads(&self, err: StorageError) {
        *self.read_failure.borrow_mut() = Some(err);
    }

    pub fn fail_writes(&self, err: StorageError) {
        *self.write_failure.borrow_mut() = Some(err);
    }

    pub fn recover(&self) {
        self.read_failure.borrow_mut().take();
        self.write_failure.borrow_mut().take();
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(err) = self.read_failure.borrow().clone() {
            return Err(err);
        }
        Ok(self.item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(err) = self.write_failure.borrow().clone() {
            return Err(err);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
