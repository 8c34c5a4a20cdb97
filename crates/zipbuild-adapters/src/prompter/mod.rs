//! Prompter adapters.
//!
//! The terminal prompter lives in the CLI crate, next to the terminal it
//! drives.

mod scripted;

pub use scripted::{Answer, ScriptedPrompter};
