//! Data models for the app
//!
//! - Static catalogs (puzzle words, story starters, moods)
//! - The persisted user profile
//! - Enums for screen routing

pub mod catalog;
pub mod enums;
pub mod profile;

// Re-exports for convenient access
pub use catalog::{MOODS, MoodOption, PuzzleWord};
pub use enums::{Screen, Section};
pub use profile::{MAX_NAME_CHARS, UserProfile};
