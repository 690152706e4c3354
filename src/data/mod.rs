//! Data layer - Static tables
//!
//! This module contains the static data shipped with the renderer:
//! - Header width profiles per dataset
//! - The built-in link catalog

pub mod links;
pub mod profiles;

// Re-export commonly used items
pub use links::{CITATION_KEYWORD, CITATION_URL, EXACT_LINKS, PREFIX_LINKS, SUBSTRING_LINKS};
pub use profiles::{lookup_profile, profile_names, WIDTH_PROFILES};
