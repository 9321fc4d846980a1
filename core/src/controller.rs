use crate::config::ThemeConfig;
use crate::dom::Document;
use crate::error::ThemeError;
use crate::popup::{self, PopupSet, PopupVisibility};
use crate::preference::PreferenceStore;
use crate::railroad::{self, RailroadFlag};

pub struct ThemeController<D, S> {
    document: D,
    store: S,
    config: ThemeConfig,
}

impl<D: Document, S: PreferenceStore> ThemeController<D, S> {
    pub fn new(document: D, store: S) -> Self {
        Self::with_config(document, store, ThemeConfig::default())
    }

    pub fn with_config(document: D, store: S, config: ThemeConfig) -> Self {
        Self {
            document,
            store,
            config,
        }
    }

    pub fn init(&self) -> bool {
        self.sync_railroad_display()
    }

    pub fn toggle_uncovered_popup(&self, item_index: &str) -> Result<PopupVisibility, ThemeError> {
        popup::toggle_exclusive(&self.document, &self.config, PopupSet::Uncovered, item_index)
    }

    pub fn toggle_tests_popup(&self, rule_id: &str) -> Result<PopupVisibility, ThemeError> {
        popup::toggle_exclusive(&self.document, &self.config, PopupSet::Tests, rule_id)
    }

    pub fn hide_all(&self, set: PopupSet) {
        popup::hide_all(&self.document, &self.config, set);
    }

    pub fn toggle_railroad_diagrams(&self) -> bool {
        let next = !self.railroad_flag();
        self.set_railroad_flag(next);
        self.sync_railroad_display();
        next
    }

    pub fn show_railroad_diagrams(&self) {
        self.set_railroad_flag(true);
        self.sync_railroad_display();
    }

    pub fn railroad_flag(&self) -> bool {
        railroad::read_flag(&self.store, &self.config)
            .unwrap_or_default()
            .is_shown()
    }

    pub fn set_railroad_flag(&self, value: bool) {
        let _ = railroad::write_flag(&self.store, &self.config, RailroadFlag(value));
    }

    pub fn sync_railroad_display(&self) -> bool {
        let flag = RailroadFlag(self.railroad_flag());
        railroad::apply_flag(&self.document, &self.config, flag);
        flag.is_shown()
    }
}
