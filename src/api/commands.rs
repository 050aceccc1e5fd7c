//! Command modules for the front end
//!
//! Each command takes plain request values and returns `AppResult`, so any
//! front end (the bundled CLI, a GUI shell) can call them directly.
//!
//! - `analysis`: full statistics for a document
//! - `palette`: command listing, ranking and action execution
//! - `settings`: settings persistence

pub mod analysis;
pub mod palette;
pub mod settings;
