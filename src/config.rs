//! Console configuration.
//!
//! Every field has a default, so a page without any configuration runs the
//! stock console. The browser build reads overrides from a
//! `<meta name="agent-console-config" content="{...}">` tag.

use serde::Deserialize;

use crate::error::ConsoleError;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_WS_PATH: &str = "/ws";
pub const DEFAULT_LOGIN_PATH: &str = "/login.html";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_TOAST_TTL_MS: u32 = 3000;
pub const DEFAULT_BADGE_INTERVAL_MS: u32 = 10_000;
pub const DEFAULT_BADGE_PROBABILITY: f64 = 0.2;

#[cfg(feature = "csr")]
const META_NAME: &str = "agent-console-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix for REST endpoints and the websocket path.
    pub api_base: String,
    pub ws_path: String,
    /// Full-page redirect target on auth failure and logout.
    pub login_path: String,
    /// Local-storage key holding the auth token.
    pub token_key: String,
    pub toast_ttl_ms: u32,
    pub badge_interval_ms: u32,
    /// Chance per simulator tick that a badge is bumped.
    pub badge_probability: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            ws_path: DEFAULT_WS_PATH.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
            badge_interval_ms: DEFAULT_BADGE_INTERVAL_MS,
            badge_probability: DEFAULT_BADGE_PROBABILITY,
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] if the document is malformed or a
    /// value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConsoleError> {
        let mut cfg: Self = serde_json::from_str(raw).map_err(|e| ConsoleError::Config(e.to_string()))?;
        cfg.api_base = cfg.api_base.trim_end_matches('/').to_owned();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if !(0.0..=1.0).contains(&self.badge_probability) {
            return Err(ConsoleError::Config(format!(
                "badge_probability must be within [0, 1], got {}",
                self.badge_probability
            )));
        }
        if self.toast_ttl_ms == 0 {
            return Err(ConsoleError::Config("toast_ttl_ms must be positive".into()));
        }
        if self.badge_interval_ms == 0 {
            return Err(ConsoleError::Config("badge_interval_ms must be positive".into()));
        }
        if self.token_key.is_empty() {
            return Err(ConsoleError::Config("token_key must not be empty".into()));
        }
        Ok(())
    }

    /// Load config from the page's meta tag, falling back to defaults.
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        use wasm_bindgen::JsCast;

        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring console config: {e}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
