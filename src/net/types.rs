//! Wire DTOs shared with the backend.
//!
//! DESIGN
//! ======
//! `User` mirrors the `/auth/me` payload. `RealtimeFrame` is the minimal
//! envelope the console understands on the realtime socket; anything else is
//! parsed as `Unknown` and dropped by the dispatcher.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated agent operating the console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email, if the backend exposes one.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Console role (e.g. `"agent"`, `"supervisor"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "agent".to_owned()
}

/// An inbound realtime frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RealtimeFrame {
    /// A new inbound message arrived on some channel.
    #[serde(rename = "newMessage")]
    NewMessage {
        #[serde(default)]
        channel: Option<String>,
    },

    /// A free-form notification to show the agent.
    #[serde(rename = "notification")]
    Notification { message: String },

    #[serde(other)]
    Unknown,
}
