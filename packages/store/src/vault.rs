//! # Token vault — persisted session token
//!
//! [`TokenVault`] holds the opaque bearer token across application loads. The
//! backing storage depends on the platform:
//!
//! | Variant | Platform | Storage |
//! |---------|----------|---------|
//! | `Browser` | wasm | `window.localStorage`, under the configured key |
//! | `File` | native | a file under the platform config dir (`dirs::config_dir()`) |
//! | `Memory` | any | in-process, for tests and the fixture backend |
//!
//! All operations are synchronous and infallible from the caller's point of
//! view: a missing or unreadable token is simply `None`, and failed writes are
//! dropped (the session then degrades to "not authenticated" on next load).

use std::sync::{Arc, Mutex};

/// Persistent store for the session bearer token.
#[derive(Clone, Debug)]
pub enum TokenVault {
    /// Browser localStorage, keyed by the configured token key.
    #[cfg(target_arch = "wasm32")]
    Browser { key: String },
    /// Token file on the local filesystem.
    #[cfg(not(target_arch = "wasm32"))]
    File { path: std::path::PathBuf },
    /// In-memory token, shared across clones.
    Memory(Arc<Mutex<Option<String>>>),
}

impl TokenVault {
    /// The platform-appropriate persistent vault.
    pub fn for_platform(token_key: &str) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            TokenVault::Browser {
                key: token_key.to_string(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
            TokenVault::File {
                path: base.join("pressboard").join(token_key),
            }
        }
    }

    /// A fresh in-memory vault.
    pub fn memory() -> Self {
        TokenVault::Memory(Arc::new(Mutex::new(None)))
    }

    /// Read the persisted token, if any.
    pub fn load(&self) -> Option<String> {
        match self {
            #[cfg(target_arch = "wasm32")]
            TokenVault::Browser { key } => {
                let storage = web_sys::window()?.local_storage().ok()??;
                storage.get_item(key).ok()?
            }
            #[cfg(not(target_arch = "wasm32"))]
            TokenVault::File { path } => {
                let token = std::fs::read_to_string(path).ok()?;
                let token = token.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            TokenVault::Memory(slot) => slot.lock().unwrap().clone(),
        }
    }

    /// Persist a token, replacing any previous one.
    pub fn save(&self, token: &str) {
        match self {
            #[cfg(target_arch = "wasm32")]
            TokenVault::Browser { key } => {
                if let Some(storage) =
                    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
                {
                    let _ = storage.set_item(key, token);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            TokenVault::File { path } => {
                if let Some(parent) = path.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                if let Err(e) = std::fs::write(path, token) {
                    tracing::warn!("failed to persist session token: {e}");
                }
            }
            TokenVault::Memory(slot) => {
                *slot.lock().unwrap() = Some(token.to_string());
            }
        }
    }

    /// Remove the persisted token.
    pub fn clear(&self) {
        match self {
            #[cfg(target_arch = "wasm32")]
            TokenVault::Browser { key } => {
                if let Some(storage) =
                    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
                {
                    let _ = storage.remove_item(key);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            TokenVault::File { path } => {
                let _ = std::fs::remove_file(path);
            }
            TokenVault::Memory(slot) => {
                *slot.lock().unwrap() = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_vault_roundtrip() {
        let vault = TokenVault::memory();
        assert_eq!(vault.load(), None);

        vault.save("tok-123");
        assert_eq!(vault.load(), Some("tok-123".to_string()));

        // Clones share the same slot
        let clone = vault.clone();
        assert_eq!(clone.load(), Some("tok-123".to_string()));

        vault.clear();
        assert_eq!(clone.load(), None);
    }

    #[test]
    fn file_vault_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let vault = TokenVault::File {
            path: dir.path().join("nested").join("auth_token"),
        };

        assert_eq!(vault.load(), None);

        vault.save("tok-456");
        assert_eq!(vault.load(), Some("tok-456".to_string()));

        // Re-opening from the same path sees the token
        let reopened = TokenVault::File {
            path: dir.path().join("nested").join("auth_token"),
        };
        assert_eq!(reopened.load(), Some("tok-456".to_string()));

        vault.clear();
        assert_eq!(reopened.load(), None);
        // Clearing twice is fine
        vault.clear();
    }

    #[test]
    fn file_vault_ignores_blank_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth_token");
        std::fs::write(&path, "  \n").unwrap();

        let vault = TokenVault::File { path };
        assert_eq!(vault.load(), None);
    }
}
