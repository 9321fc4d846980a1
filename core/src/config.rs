pub const POPUP_HIDDEN_CLASS: &str = "popup-hidden";
pub const UNCOVERED_POPUP_CLASS: &str = "uncovered-rules-popup";
pub const UNCOVERED_ID_PREFIX: &str = "uncovered";
pub const TESTS_POPUP_CLASS: &str = "tests-popup";
pub const TESTS_ID_PREFIX: &str = "tests";

pub const RAILROAD_CLASS: &str = "grammar-railroad";
pub const RAILROAD_HIDDEN_CLASS: &str = "grammar-hidden";
pub const RAILROAD_TOGGLE_CLASS: &str = "grammar-toggle-railroad";
pub const RAILROAD_STORAGE_KEY: &str = "grammar-railroad";

pub const SHOW_RAILROAD_LABEL: &str = "Show syntax diagram";
pub const HIDE_RAILROAD_LABEL: &str = "Hide syntax diagram";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupSetConfig {
    pub class: String,
    pub id_prefix: String,
}

impl PopupSetConfig {
    pub fn new(class: &str, id_prefix: &str) -> Self {
        Self {
            class: class.to_string(),
            id_prefix: id_prefix.to_string(),
        }
    }

    pub fn element_id(&self, key: &str) -> String {
        format!("{}-{key}", self.id_prefix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub popup_hidden_class: String,
    pub uncovered: PopupSetConfig,
    pub tests: PopupSetConfig,
    pub railroad_class: String,
    pub railroad_hidden_class: String,
    pub railroad_toggle_class: String,
    pub railroad_storage_key: String,
    pub show_label: String,
    pub hide_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            popup_hidden_class: POPUP_HIDDEN_CLASS.to_string(),
            uncovered: PopupSetConfig::new(UNCOVERED_POPUP_CLASS, UNCOVERED_ID_PREFIX),
            tests: PopupSetConfig::new(TESTS_POPUP_CLASS, TESTS_ID_PREFIX),
            railroad_class: RAILROAD_CLASS.to_string(),
            railroad_hidden_class: RAILROAD_HIDDEN_CLASS.to_string(),
            railroad_toggle_class: RAILROAD_TOGGLE_CLASS.to_string(),
            railroad_storage_key: RAILROAD_STORAGE_KEY.to_string(),
            show_label: SHOW_RAILROAD_LABEL.to_string(),
            hide_label: HIDE_RAILROAD_LABEL.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn toggle_label(&self, shown: bool) -> &str {
        if shown {
            &self.hide_label
        } else {
            &self.show_label
        }
    }
}
