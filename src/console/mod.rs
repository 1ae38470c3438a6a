//! Console bootstrap, collaborator ports, and event plumbing.
//!
//! DESIGN
//! ======
//! `bootstrap::ConsoleApp` owns the startup sequence and the per-channel
//! actions. It reaches the outside world only through `ports`, so the
//! browser build and the tests differ only in what they inject.

pub mod badges;
pub mod bootstrap;
pub mod events;
pub mod notify;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};

pub use bootstrap::{ConsoleApp, ConsoleDeps, SendOutcome, ViewBindings, is_submit_key};

/// Shared handle to the running console, provided via context.
pub type ConsoleHandle = StoredValue<Rc<ConsoleApp>, LocalStorage>;
