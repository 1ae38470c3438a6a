//! Route-level page components.

pub mod console;
