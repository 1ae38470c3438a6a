//! REST + realtime access to the console backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` and a websocket task
//! spawned on the UI thread. Native builds get only the pure URL helpers, so
//! the bootstrap can be exercised with doubles.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors and non-success statuses map into `ConsoleError`; the
//! bootstrap decides which of them are fatal.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use crate::console::events::EventBus;
#[cfg(feature = "csr")]
use crate::error::ConsoleError;
#[cfg(feature = "csr")]
use crate::net::types::User;

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join `api_base` and an endpoint path.
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Build the realtime socket URL.
///
/// An absolute `api_base` decides scheme and host; a relative one is
/// resolved against the page (`page_href` for the scheme, `page_host`).
/// The token is percent-encoded into the query.
pub fn websocket_url(page_href: &str, page_host: &str, api_base: &str, ws_path: &str, token: &str) -> String {
    let path = endpoint(api_base, ws_path);
    let token = urlencoding::encode(token);
    if let Some(rest) = path.strip_prefix("https://") {
        return format!("wss://{rest}?token={token}");
    }
    if let Some(rest) = path.strip_prefix("http://") {
        return format!("ws://{rest}?token={token}");
    }
    let proto = if page_href.starts_with("https") { "wss" } else { "ws" };
    format!("{proto}://{page_host}{path}?token={token}")
}

/// Backend client used by the browser build.
#[cfg(feature = "csr")]
pub struct HttpApiClient {
    api_base: String,
    ws_path: String,
}

#[cfg(feature = "csr")]
impl HttpApiClient {
    pub fn new(config: &crate::config::ConsoleConfig) -> Self {
        Self { api_base: config.api_base.clone(), ws_path: config.ws_path.clone() }
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl crate::console::ports::ApiClient for HttpApiClient {
    async fn get_current_user(&self, token: &str) -> Result<User, ConsoleError> {
        let resp = gloo_net::http::Request::get(&endpoint(&self.api_base, "auth/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ConsoleError::AuthFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ConsoleError::Api { status: resp.status() });
        }
        resp.json::<User>()
            .await
            .map_err(|e| ConsoleError::AuthFailed(e.to_string()))
    }

    fn connect_realtime(&self, token: &str, bus: EventBus) -> Result<(), ConsoleError> {
        let location = web_sys::window()
            .map(|w| w.location())
            .ok_or_else(|| ConsoleError::Realtime("no window".into()))?;
        let href = location.href().unwrap_or_default();
        let host = location.host().unwrap_or_default();
        let url = websocket_url(&href, &host, &self.api_base, &self.ws_path, token);

        let ws = gloo_net::websocket::futures::WebSocket::open(&url).map_err(|e| ConsoleError::Realtime(e.to_string()))?;
        leptos::task::spawn_local(crate::net::realtime::run(ws, bus));
        Ok(())
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ConsoleError> {
        let mut req = gloo_net::http::Request::post(&endpoint(&self.api_base, "auth/logout"));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| ConsoleError::Send(e.to_string()))?;
        if !resp.ok() {
            return Err(ConsoleError::Api { status: resp.status() });
        }
        Ok(())
    }
}
