use crate::config::ThemeConfig;
use crate::dom::{Document, Element};
use crate::error::StorageError;
use crate::preference::PreferenceStore;

const STORED_TRUE: &str = "true";
const STORED_FALSE: &str = "false";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RailroadFlag(pub bool);

impl RailroadFlag {
    pub const HIDDEN: RailroadFlag = RailroadFlag(false);
    pub const SHOWN: RailroadFlag = RailroadFlag(true);

    pub fn is_shown(self) -> bool {
        self.0
    }

    pub fn as_stored(self) -> &'static str {
        if self.0 {
            STORED_TRUE
        } else {
            STORED_FALSE
        }
    }

    pub fn from_stored(raw: Option<&str>) -> Self {
        RailroadFlag(raw == Some(STORED_TRUE))
    }
}

impl std::ops::Not for RailroadFlag {
    type Output = RailroadFlag;

    fn not(self) -> RailroadFlag {
        RailroadFlag(!self.0)
    }
}

pub fn read_flag<S: PreferenceStore>(
    store: &S,
    config: &ThemeConfig,
) -> Result<RailroadFlag, StorageError> {
    let raw = store.get_item(&config.railroad_storage_key)?;
    Ok(RailroadFlag::from_stored(raw.as_deref()))
}

pub fn write_flag<S: PreferenceStore>(
    store: &S,
    config: &ThemeConfig,
    flag: RailroadFlag,
) -> Result<(), StorageError> {
    store.set_item(&config.railroad_storage_key, flag.as_stored())
}

pub fn apply_flag<D: Document>(document: &D, config: &ThemeConfig, flag: RailroadFlag) {
    for diagram in document.elements_by_class(&config.railroad_class) {
        diagram.set_class(&config.railroad_hidden_class, !flag.is_shown());
    }
    let label = config.toggle_label(flag.is_shown());
    for button in document.elements_by_class(&config.railroad_toggle_class) {
        button.set_text(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_is_shown() {
        assert!(RailroadFlag::from_stored(Some("true")).is_shown());
        for raw in ["false", "1", "yes", "TRUE", " true", ""] {
            assert!(!RailroadFlag::from_stored(Some(raw)).is_shown(), "{raw:?}");
        }
        assert!(!RailroadFlag::from_stored(None).is_shown());
    }

    #[test]
    fn stored_form_is_literal() {
        assert_eq!(RailroadFlag::SHOWN.as_stored(), "true");
        assert_eq!(RailroadFlag::HIDDEN.as_stored(), "false");
        assert_eq!(!RailroadFlag::HIDDEN, RailroadFlag::SHOWN);
    }
}
