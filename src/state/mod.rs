//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `channels`, `toast`) so components
//! depend on small focused models held in signals.

pub mod channels;
pub mod session;
pub mod toast;
