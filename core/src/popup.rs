use crate::config::{PopupSetConfig, ThemeConfig};
use crate::dom::{Document, Element};
use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopupSet {
    Uncovered,
    Tests,
}

impl PopupSet {
    pub fn config(self, config: &ThemeConfig) -> &PopupSetConfig {
        match self {
            PopupSet::Uncovered => &config.uncovered,
            PopupSet::Tests => &config.tests,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupVisibility {
    Visible,
    Hidden,
}

pub fn hide_all<D: Document>(document: &D, config: &ThemeConfig, set: PopupSet) {
    let class = &set.config(config).class;
    for element in document.elements_by_class(class) {
        element.add_class(&config.popup_hidden_class);
    }
}

pub fn toggle_exclusive<D: Document>(
    document: &D,
    config: &ThemeConfig,
    set: PopupSet,
    key: &str,
) -> Result<PopupVisibility, ThemeError> {
    let id = set.config(config).element_id(key);
    let Some(target) = document.element_by_id(&id) else {
        return Err(ThemeError::MissingPopup { id });
    };
    let was_hidden = target.has_class(&config.popup_hidden_class);
    hide_all(document, config, set);
    if was_hidden {
        target.remove_class(&config.popup_hidden_class);
        Ok(PopupVisibility::Visible)
    } else {
        Ok(PopupVisibility::Hidden)
    }
}
