//! Shared helpers for the host parser adapter.

pub mod docs;
pub mod tokens;
