//! Networking modules for the console backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and opens the realtime socket, `realtime` reads
//! socket frames, and `types` defines the shared wire schema.

pub mod api;
#[cfg(feature = "csr")]
pub mod realtime;
pub mod types;
