use reference_theme_core::memory::{MemoryDocument, MemoryStore};
use reference_theme_core::{
    Element, PopupSetConfig, PopupVisibility, ThemeConfig, ThemeController, ThemeError,
};

fn book_config() -> ThemeConfig {
    ThemeConfig {
        popup_hidden_class: "is-closed".to_string(),
        uncovered: PopupSetConfig::new("gap-list", "gap"),
        tests: PopupSetConfig::new("case-list", "case"),
        railroad_class: "rr".to_string(),
        railroad_hidden_class: "rr-off".to_string(),
        railroad_toggle_class: "rr-button".to_string(),
        railroad_storage_key: "book.railroad".to_string(),
        show_label: "Diagram".to_string(),
        hide_label: "Text only".to_string(),
    }
}

#[test]
fn popups_follow_configured_names() {
    let doc = MemoryDocument::new();
    let first = doc.append(Some("gap-0"), "gap-list is-closed", "");
    let second = doc.append(Some("gap-1"), "gap-list is-closed", "");
    let case = doc.append(Some("case-lex"), "case-list is-closed", "");
    let default_named = doc.append(Some("uncovered-0"), "uncovered-rules-popup popup-hidden", "");
    let store = MemoryStore::new();
    let controller = ThemeController::with_config(&doc, &store, book_config());

    assert_eq!(controller.toggle_uncovered_popup("0").unwrap(), PopupVisibility::Visible);
    assert!(!first.has_class("is-closed"));
    assert_eq!(controller.toggle_uncovered_popup("1").unwrap(), PopupVisibility::Visible);
    assert!(first.has_class("is-closed"));
    assert!(!second.has_class("is-closed"));

    controller.toggle_tests_popup("lex").unwrap();
    assert!(!case.has_class("is-closed"));
    assert!(!second.has_class("is-closed"));

    assert!(default_named.has_class("popup-hidden"));
    assert!(!default_named.has_class("is-closed"));
    assert_eq!(
        controller.toggle_tests_popup("missing").unwrap_err(),
        ThemeError::MissingPopup {
            id: "case-missing".to_string()
        }
    );
}

#[test]
fn railroad_sync_follows_configured_names() {
    let doc = MemoryDocument::new();
    let button = doc.append(None, "rr-button", "");
    let diagram = doc.append(None, "rr rr-off", "");
    let default_diagram = doc.append(None, "grammar-railroad grammar-hidden", "");
    let store = MemoryStore::with_item("grammar-railroad", "true");
    let controller = ThemeController::with_config(&doc, &store, book_config());

    assert!(!controller.init());
    assert_eq!(button.text(), "Diagram");
    assert!(diagram.has_class("rr-off"));

    assert!(controller.toggle_railroad_diagrams());
    assert_eq!(store.item("book.railroad").as_deref(), Some("true"));
    assert_eq!(button.text(), "Text only");
    assert!(!diagram.has_class("rr-off"));
    assert!(default_diagram.has_class("grammar-hidden"));
}
