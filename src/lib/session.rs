//! Bearer token storage. The token lives in a single browser cookie so it
//! survives reloads; expiry is left to the API, which rejects stale tokens.
//! Pages never touch the cookie directly: they go through the one `Session`
//! handle provided at the root of the app, which the request client reads on
//! every call. The token itself must never be logged.

use std::{
    fmt,
    sync::{Arc, RwLock},
};

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Persistence backend for the bearer token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Shared handle to the session token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by process memory, used outside the browser.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Session backed by the `token` cookie.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(CookieTokenStore::new(TOKEN_COOKIE))
    }

    /// Current token; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.trim().is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        let token = token.trim();
        if token.is_empty() {
            self.clear_token();
        } else {
            self.store.save(token);
        }
    }

    pub fn clear_token(&self) {
        self.store.remove();
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("has_token", &self.has_token())
            .finish()
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

/// Cookie-backed store. Values are URI-encoded on write and decoded on read.
#[cfg(target_arch = "wasm32")]
pub struct CookieTokenStore {
    name: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl CookieTokenStore {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        let raw = cookie_value(&cookies, self.name)?;
        js_sys::decode_uri_component(raw)
            .ok()
            .map(String::from)
            .or_else(|| Some(raw.to_string()))
    }

    fn save(&self, token: &str) {
        let Some(document) = Self::document() else {
            log::warn!("session cookie unavailable; token not stored");
            return;
        };
        let encoded = String::from(js_sys::encode_uri_component(token));
        if document
            .set_cookie(&set_cookie_directive(self.name, &encoded))
            .is_err()
        {
            log::warn!("failed to write session cookie");
        }
    }

    fn remove(&self) {
        let Some(document) = Self::document() else {
            log::warn!("session cookie unavailable; token not cleared");
            return;
        };
        if document
            .set_cookie(&expire_cookie_directive(self.name))
            .is_err()
        {
            log::warn!("failed to expire session cookie");
        }
    }
}

/// Finds a cookie value in a `document.cookie` style string.
pub(crate) fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

pub(crate) fn set_cookie_directive(name: &str, encoded_value: &str) -> String {
    format!("{name}={encoded_value}; path=/; SameSite=Lax")
}

pub(crate) fn expire_cookie_directive(name: &str) -> String {
    format!("{name}=; path=/; max-age=0; expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::{
        Session, TOKEN_COOKIE, cookie_value, expire_cookie_directive, set_cookie_directive,
    };

    #[test]
    fn new_session_has_no_token() {
        let session = Session::in_memory();
        assert_eq!(session.token(), None);
        assert!(!session.has_token());
    }

    #[test]
    fn set_token_is_visible_to_clones() {
        let session = Session::in_memory();
        let reader = session.clone();
        session.set_token(" 42|abcdef ");
        assert_eq!(reader.token().as_deref(), Some("42|abcdef"));
    }

    #[test]
    fn blank_token_counts_as_absent() {
        let session = Session::in_memory();
        session.set_token("abc");
        session.set_token("   ");
        assert!(!session.has_token());
    }

    #[test]
    fn clear_token_is_idempotent() {
        let session = Session::in_memory();
        session.set_token("abc");

        session.clear_token();
        let once = session.token();
        session.clear_token();
        let twice = session.token();

        assert_eq!(once, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn debug_output_hides_token() {
        let session = Session::in_memory();
        session.set_token("super-secret");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("has_token: true"));
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let cookies = "theme=dark; token=12%7Cabc; lang=en";
        assert_eq!(cookie_value(cookies, TOKEN_COOKIE), Some("12%7Cabc"));
        assert_eq!(cookie_value(cookies, "lang"), Some("en"));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", TOKEN_COOKIE), None);
    }

    #[test]
    fn cookie_value_does_not_match_prefixes() {
        assert_eq!(cookie_value("xtoken=1; tokens=2", TOKEN_COOKIE), None);
    }

    #[test]
    fn cookie_directives_are_site_wide() {
        assert_eq!(
            set_cookie_directive(TOKEN_COOKIE, "abc"),
            "token=abc; path=/; SameSite=Lax"
        );
        let expired = expire_cookie_directive(TOKEN_COOKIE);
        assert!(expired.starts_with("token=;"));
        assert!(expired.contains("max-age=0"));
        assert!(expired.contains("path=/"));
    }
}
