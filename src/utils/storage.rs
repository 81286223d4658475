// Session Store: persistencia clave/valor de la identidad del usuario y del
// token. Los view-models reciben la capacidad por inyección, nunca un global.

use web_sys::window;

/// Capacidad de almacenamiento de sesión
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Session Store respaldado por el localStorage del navegador
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("❌ Error guardando '{}' en localStorage", key);
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session Store en memoria para tests (equivalente del mock de localStorage)
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{JWT_STORAGE_KEY, USER_STORAGE_KEY};

    #[test]
    fn missing_keys_read_none() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.get_item(USER_STORAGE_KEY), None);
        assert_eq!(storage.get_item(JWT_STORAGE_KEY), None);
    }

    #[test]
    fn a_new_login_overwrites_user_and_jwt() {
        let storage = MemoryStorage::default();
        storage.set_item(USER_STORAGE_KEY, r#"{"email":"a@a"}"#);
        storage.set_item(JWT_STORAGE_KEY, "token-1");

        storage.set_item(USER_STORAGE_KEY, r#"{"email":"b@b"}"#);
        storage.set_item(JWT_STORAGE_KEY, "token-2");

        assert_eq!(
            storage.get_item(USER_STORAGE_KEY).as_deref(),
            Some(r#"{"email":"b@b"}"#)
        );
        assert_eq!(storage.get_item(JWT_STORAGE_KEY).as_deref(), Some("token-2"));
    }

    #[test]
    fn removed_keys_read_none() {
        let storage = MemoryStorage::default();
        storage.set_item(JWT_STORAGE_KEY, "token");
        storage.remove_item(JWT_STORAGE_KEY);
        assert_eq!(storage.get_item(JWT_STORAGE_KEY), None);
    }
}
