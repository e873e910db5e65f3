//! Persisted login session.
//!
//! The login flow and logout are the only writers; everything else reads
//! the session through [`SessionContext`].

use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::config::SessionTrust;
use crate::models::LoginResponse;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USERNAME_KEY: &str = "username";
pub const USER_ID_KEY: &str = "userId";

pub const SESSION_KEYS: [&str; 4] = [AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, USER_ID_KEY];

/// Durable string storage (browser `localStorage` or an in-memory map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!("Could not persist {} to local storage", key);
                }
            }
            None => tracing::warn!("Local storage unavailable; {} not persisted", key),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!("Could not remove {} from local storage", key);
                }
            }
            None => tracing::warn!("Local storage unavailable; {} not removed", key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        SessionStore { backend }
    }

    /// The store for the running target: `localStorage` in the browser,
    /// memory elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        let backend: Rc<dyn KeyValueStore> = Rc::new(BrowserStore);
        #[cfg(not(target_arch = "wasm32"))]
        let backend: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());

        Self::new(backend)
    }

    /// Read the persisted session.
    ///
    /// Under [`SessionTrust::Presence`] a token and a username together mean
    /// logged in and a half-written session is discarded. Under
    /// [`SessionTrust::Revalidate`] the token alone is kept until the backend
    /// has been asked about it.
    pub fn load(&self, trust: SessionTrust) -> Option<Session> {
        let token = self.backend.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty());
        let username = self.backend.get(USERNAME_KEY).filter(|u| !u.is_empty());

        match (token, username, trust) {
            (Some(access_token), username, SessionTrust::Revalidate) => Some(self.restore(access_token, username)),
            (Some(access_token), Some(username), SessionTrust::Presence) => {
                Some(self.restore(access_token, Some(username)))
            }
            _ => {
                self.backend.remove(AUTH_TOKEN_KEY);
                self.backend.remove(USERNAME_KEY);
                None
            }
        }
    }

    fn restore(&self, access_token: String, username: Option<String>) -> Session {
        Session {
            access_token,
            refresh_token: self.backend.get(REFRESH_TOKEN_KEY),
            username,
            user_id: self.backend.get(USER_ID_KEY),
        }
    }

    /// Write whichever session fields the login reply carried.
    pub fn persist(&self, response: &LoginResponse) -> Option<Session> {
        if let Some(token) = &response.access_token {
            self.backend.set(AUTH_TOKEN_KEY, token);
        }
        if let Some(token) = &response.refresh_token {
            self.backend.set(REFRESH_TOKEN_KEY, token);
        }
        if let Some(name) = response.username() {
            self.backend.set(USERNAME_KEY, name);
        }
        if let Some(id) = response.user_id() {
            self.backend.set(USER_ID_KEY, &id);
        }

        response.access_token.as_ref().map(|token| Session {
            access_token: token.clone(),
            refresh_token: response.refresh_token.clone(),
            username: response.username().map(str::to_string),
            user_id: response.user_id(),
        })
    }

    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.backend.remove(key);
        }
    }
}

/// Whether the backend's view of the current token agrees with ours.
pub fn token_confirmed(stored: &str, remote: Option<&str>) -> bool {
    matches!(remote, Some(remote) if !remote.is_empty() && remote == stored)
}

/// Session handle shared with components through the Dioxus context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    current: Signal<Option<Session>>,
    store: Signal<SessionStore>,
}

impl SessionContext {
    /// Must be called from within a component (it creates signals).
    pub fn new(store: SessionStore, trust: SessionTrust) -> Self {
        let restored = store.load(trust);
        SessionContext {
            current: Signal::new(restored),
            store: Signal::new(store),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// Current session without subscribing the caller to changes.
    pub fn peek(&self) -> Option<Session> {
        self.current.peek().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.current.read().as_ref().and_then(|s| s.username.clone())
    }

    pub fn sign_in(&mut self, client: &ApiClient, response: &LoginResponse) {
        let session = self.store.peek().persist(response);
        client.set_token(session.as_ref().map(|s| s.access_token.clone()));
        if session.as_ref().and_then(|s| s.username.as_ref()).is_none() {
            tracing::warn!("Login reply had no username");
        }
        self.current.set(session);
    }

    pub fn sign_out(&mut self, client: &ApiClient) {
        self.store.peek().clear();
        client.set_token(None);
        self.current.set(None);
        tracing::info!("Signed out");
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
