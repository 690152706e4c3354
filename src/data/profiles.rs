//! Header width profiles
//!
//! Column widths per dataset. They do not vary much between releases, so the
//! dataset name alone selects the profile.

use phf::phf_map;

/// Dataset name to header widths (percentages, summing to 100%)
pub static WIDTH_PROFILES: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "AquaMine" => &["10%", "15%", "22%", "23%", "20%", "10%"],
    "FAANGMine" => &["15%", "15%", "10%", "25%", "25%", "10%"],
    "HymenopteraMine" => &["15%", "15%", "15%", "25%", "20%", "10%"],
    "MaizeMine" => &["15%", "15%", "15%", "20%", "20%", "15%"],
};

/// Widths registered for `name`
pub fn lookup_profile(name: &str) -> Option<&'static [&'static str]> {
    WIDTH_PROFILES.get(name).copied()
}

/// Registered dataset names, sorted
pub fn profile_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = WIDTH_PROFILES.keys().copied().collect();
    names.sort_unstable();
    names
}
