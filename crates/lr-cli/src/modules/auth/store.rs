#[cfg(test)]
use std::collections::HashMap;
use std::sync::Mutex;
#[cfg(test)]
use std::sync::OnceLock;

#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
#[cfg(not(test))]
use tracing::warn;

use lr_core::token_keys;

/// Storage for the JWT pair. Implementations must be shareable across
/// concurrent requests.
pub(crate) trait TokenStore: Send + Sync {
    fn get_access(&self) -> anyhow::Result<Option<String>>;
    fn set_access(&self, token: &str) -> anyhow::Result<()>;
    fn get_refresh(&self) -> anyhow::Result<Option<String>>;
    fn set_refresh(&self, token: &str) -> anyhow::Result<()>;
    fn clear(&self) -> anyhow::Result<()>;
}

/// Keeps the token pair in the platform keychain.
pub(crate) struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub(crate) fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }
}

impl TokenStore for KeyringStore {
    fn get_access(&self) -> anyhow::Result<Option<String>> {
        keyring_get(&self.service, token_keys::ACCESS)
    }

    fn set_access(&self, token: &str) -> anyhow::Result<()> {
        keyring_set(&self.service, token_keys::ACCESS, token)
    }

    fn get_refresh(&self) -> anyhow::Result<Option<String>> {
        keyring_get(&self.service, token_keys::REFRESH)
    }

    fn set_refresh(&self, token: &str) -> anyhow::Result<()> {
        keyring_set(&self.service, token_keys::REFRESH, token)
    }

    fn clear(&self) -> anyhow::Result<()> {
        keyring_delete(&self.service, token_keys::ACCESS)?;
        keyring_delete(&self.service, token_keys::REFRESH)
    }
}

/// In-process store backing `--token` runs. Nothing touches the keychain.
#[derive(Default)]
pub(crate) struct MemoryStore {
    inner: Mutex<StoredTokens>,
}

#[derive(Default)]
struct StoredTokens {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryStore {
    pub(crate) fn with_access(token: &str) -> Self {
        Self {
            inner: Mutex::new(StoredTokens {
                access: Some(token.to_string()),
                refresh: None,
            }),
        }
    }
}

impl TokenStore for MemoryStore {
    fn get_access(&self) -> anyhow::Result<Option<String>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        Ok(inner.access.clone())
    }

    fn set_access(&self, token: &str) -> anyhow::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        inner.access = Some(token.to_string());
        Ok(())
    }

    fn get_refresh(&self) -> anyhow::Result<Option<String>> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        Ok(inner.refresh.clone())
    }

    fn set_refresh(&self, token: &str) -> anyhow::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        inner.refresh = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        inner.access = None;
        inner.refresh = None;
        Ok(())
    }
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(not(test))]
fn keyring_entry(service: &str, key: &str) -> anyhow::Result<keyring::Entry> {
    keyring::Entry::new(service, key)
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(service: &str, key: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(service, key)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {key} in keychain: {err}"))
}

#[cfg(not(test))]
fn keyring_get(service: &str, key: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(service, key)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {key} from keychain: {err}"
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(service: &str, key: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(service, key)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!(key = %key, "failed to delete keychain entry: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
fn keyring_set(service: &str, key: &str, value: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(format!("{service}::{key}"), value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(service: &str, key: &str) -> anyhow::Result<Option<String>> {
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&format!("{service}::{key}")).cloned())
}

#[cfg(test)]
fn keyring_delete(service: &str, key: &str) -> anyhow::Result<()> {
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&format!("{service}::{key}"));
    Ok(())
}

#[cfg(test)]
fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}
