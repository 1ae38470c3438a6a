//! Console view components.

pub mod channel_composer;
pub mod channel_tabs;
pub mod conversation;
pub mod toast_stack;
