pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod popup;
pub mod preference;
pub mod railroad;

pub use config::{PopupSetConfig, ThemeConfig};
pub use controller::ThemeController;
pub use dom::{Document, Element};
pub use error::{StorageError, ThemeError};
pub use popup::{PopupSet, PopupVisibility};
pub use preference::PreferenceStore;
pub use railroad::RailroadFlag;
