//! Per-channel conversation and unread-badge state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChannelState` is the concrete channel manager behind the console. The
//! browser build keeps it in an `RwSignal` so renders follow mutations; the
//! bootstrap only ever sees it through the `ChannelManager` port.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::console::ports::ChannelManager;
use crate::error::ConsoleError;

/// One communication medium handled by the console.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelId {
    #[default]
    Chat,
    Email,
    Social,
    Web,
}

impl ChannelId {
    pub const ALL: [ChannelId; 4] = [Self::Chat, Self::Email, Self::Social, Self::Web];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Email => "email",
            Self::Social => "social",
            Self::Web => "web",
        }
    }

    /// DOM id of the channel's text input.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Chat => "message-input",
            Self::Email => "email-input",
            Self::Social => "social-input",
            Self::Web => "web-response",
        }
    }

    /// DOM id of the channel's unread badge.
    pub fn badge_id(self) -> String {
        format!("badge-{}", self.as_str())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Live Chat",
            Self::Email => "Email",
            Self::Social => "Social",
            Self::Web => "Web Forms",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Self::Chat),
            "email" => Ok(Self::Email),
            "social" => Ok(Self::Social),
            "web" => Ok(Self::Web),
            other => Err(format!("unknown channel: {other}")),
        }
    }
}

/// Who authored a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Agent,
    Customer,
    System,
}

/// A single message in a channel conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, timestamp_ms: f64) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text: text.into(), timestamp_ms }
    }
}

/// Summary of the active conversation, refreshed after each chat send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationInsight {
    pub channel: ChannelId,
    pub total: usize,
    pub agent_messages: usize,
    pub customer_messages: usize,
    /// The last message came from the customer and has no agent reply yet.
    pub awaiting_reply: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ChannelState {
    pub initialized: bool,
    pub current: ChannelId,
    pub conversations: BTreeMap<ChannelId, Vec<Message>>,
    pub badges: BTreeMap<ChannelId, u32>,
    /// Bumped on every render request so views can re-read conversations.
    pub render_revision: u64,
    pub insight: Option<ConversationInsight>,
}

impl ChannelState {
    /// Reset to an empty conversation and zero badge for every channel.
    pub fn initialize(&mut self) {
        for channel in ChannelId::ALL {
            self.conversations.entry(channel).or_default();
            self.badges.insert(channel, 0);
        }
        self.initialized = true;
    }

    pub fn append(&mut self, channel: ChannelId, message: Message) {
        self.conversations.entry(channel).or_default().push(message);
    }

    pub fn conversation(&self, channel: ChannelId) -> &[Message] {
        self.conversations.get(&channel).map_or(&[], Vec::as_slice)
    }

    pub fn badge(&self, channel: ChannelId) -> u32 {
        self.badges.get(&channel).copied().unwrap_or(0)
    }

    pub fn set_badge(&mut self, channel: ChannelId, count: u32) {
        self.badges.insert(channel, count);
    }

    /// Make `channel` active and mark its unread messages as seen.
    pub fn switch_to(&mut self, channel: ChannelId) {
        self.current = channel;
        self.badges.insert(channel, 0);
        self.render_revision += 1;
    }

    pub fn request_render(&mut self) {
        self.render_revision += 1;
    }

    /// Recompute the insight for the active conversation.
    pub fn analyze(&mut self) -> &ConversationInsight {
        let channel = self.current;
        let messages = self.conversation(channel);
        let agent_messages = messages.iter().filter(|m| m.sender == Sender::Agent).count();
        let customer_messages = messages.iter().filter(|m| m.sender == Sender::Customer).count();
        let awaiting_reply = messages
            .iter()
            .rev()
            .find(|m| m.sender != Sender::System)
            .is_some_and(|m| m.sender == Sender::Customer);
        let total = messages.len();

        self.insight.insert(ConversationInsight { channel, total, agent_messages, customer_messages, awaiting_reply })
    }
}

#[async_trait::async_trait(?Send)]
impl ChannelManager for RwSignal<ChannelState> {
    async fn initialize(&self) -> Result<(), ConsoleError> {
        self.update(ChannelState::initialize);
        Ok(())
    }

    fn current_channel(&self) -> ChannelId {
        self.with_untracked(|s| s.current)
    }

    fn append_message(&self, channel: ChannelId, message: Message) {
        self.update(|s| s.append(channel, message));
    }

    fn render_conversation(&self) {
        self.update(ChannelState::request_render);
    }

    async fn analyze_conversation(&self) -> Result<(), ConsoleError> {
        self.update(|s| {
            let insight = s.analyze();
            log::debug!(
                "{}: {} messages, awaiting reply: {}",
                insight.channel,
                insight.total,
                insight.awaiting_reply
            );
        });
        Ok(())
    }

    fn switch_channel(&self, channel: ChannelId) {
        self.update(|s| s.switch_to(channel));
    }

    fn badge(&self, channel: ChannelId) -> u32 {
        self.with_untracked(|s| s.badge(channel))
    }

    fn update_notification_badge(&self, channel: ChannelId, count: u32) {
        self.update(|s| s.set_badge(channel, count));
    }
}
