//! Command handlers.

pub mod pack;
