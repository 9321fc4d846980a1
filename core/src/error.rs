#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage access denied")]
    SecurityDenied,
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn from_exception(name: &str, message: &str) -> Self {
        match name {
            "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StorageError::QuotaExceeded,
            "SecurityError" => StorageError::SecurityDenied,
            "InvalidStateError" => StorageError::Unavailable,
            _ if message.is_empty() => StorageError::Other(name.to_string()),
            _ => StorageError::Other(format!("{name}: {message}")),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Unavailable => "unavailable",
            StorageError::QuotaExceeded => "quota",
            StorageError::SecurityDenied => "security",
            StorageError::Other(_) => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("popup element `{id}` not found")]
    MissingPopup { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exception_names_map_to_kinds() {
        assert_eq!(
            StorageError::from_exception("QuotaExceededError", "full"),
            StorageError::QuotaExceeded
        );
        assert_eq!(
            StorageError::from_exception("NS_ERROR_DOM_QUOTA_REACHED", ""),
            StorageError::QuotaExceeded
        );
        assert_eq!(
            StorageError::from_exception("SecurityError", "denied"),
            StorageError::SecurityDenied
        );
        assert_eq!(
            StorageError::from_exception("InvalidStateError", "storage closed"),
            StorageError::Unavailable
        );
        assert_eq!(
            StorageError::from_exception("TypeError", "boom"),
            StorageError::Other("TypeError: boom".to_string())
        );
        assert_eq!(
            StorageError::from_exception("TypeError", ""),
            StorageError::Other("TypeError".to_string())
        );
    }

    #[test]
    fn missing_popup_names_the_id() {
        let err = ThemeError::MissingPopup {
            id: "tests-lex.keywords".to_string(),
        };
        assert_eq!(err.to_string(), "popup element `tests-lex.keywords` not found");
    }
}
