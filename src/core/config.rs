//! Dataset configuration
//!
//! A render is configured by a dataset name, which selects the header width
//! profile, and a release version of the form `X.Y`. Both are checked before
//! any file is touched.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::data::profiles::lookup_profile;
use crate::utils::error::{RenderError, RenderResult};

/// Default directory holding the input tables
pub const DEFAULT_INPUT_DIR: &str = "input_csv";
/// Default directory receiving the rendered pages
pub const DEFAULT_OUTPUT_DIR: &str = "output_html";

/// Release version: two dot-separated non-negative integers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MineVersion {
    raw: String,
}

impl MineVersion {
    /// Parse `X.Y`, keeping the text as written (`1.06` stays `1.06`)
    pub fn parse(input: &str) -> RenderResult<Self> {
        let mut parts = input.split('.');
        let valid = match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => is_number(major) && is_number(minor),
            _ => false,
        };
        if !valid {
            return Err(RenderError::invalid_version(input));
        }
        Ok(MineVersion {
            raw: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> &str {
        self.raw.split('.').next().unwrap_or_default()
    }

    pub fn minor(&self) -> &str {
        self.raw.split('.').nth(1).unwrap_or_default()
    }
}

fn is_number(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for MineVersion {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MineVersion::parse(s)
    }
}

impl fmt::Display for MineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Where the header widths come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthSource {
    /// Registered profile of the dataset
    Profile(&'static [&'static str]),
    /// Caller-supplied widths
    Custom(Vec<String>),
}

/// Validated dataset identity plus header widths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    name: String,
    version: MineVersion,
    widths: WidthSource,
}

impl DatasetConfig {
    /// Look up the width profile of `name` and validate `version`
    pub fn new(name: &str, version: &str) -> RenderResult<Self> {
        let version = MineVersion::parse(version)?;
        let widths = lookup_profile(name).ok_or_else(|| RenderError::unknown_profile(name))?;
        Ok(DatasetConfig {
            name: name.to_string(),
            version,
            widths: WidthSource::Profile(widths),
        })
    }

    /// Any dataset name, with explicit widths
    pub fn with_widths(name: &str, version: &str, widths: Vec<String>) -> RenderResult<Self> {
        let version = MineVersion::parse(version)?;
        Ok(DatasetConfig {
            name: name.to_string(),
            version,
            widths: WidthSource::Custom(widths),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &MineVersion {
        &self.version
    }

    pub fn width_source(&self) -> &WidthSource {
        &self.widths
    }

    /// Header widths, one per column
    pub fn widths(&self) -> Vec<&str> {
        match self.widths {
            WidthSource::Profile(w) => w.to_vec(),
            WidthSource::Custom(ref w) => w.iter().map(String::as_str).collect(),
        }
    }

    /// `<Name>_v<Version>_Data_Sources.csv`
    pub fn input_file_name(&self) -> String {
        format!("{}_v{}_Data_Sources.csv", self.name, self.version)
    }

    /// `dataSourcesTable_<Name>_v<Version>.html`
    pub fn output_file_name(&self) -> String {
        format!("dataSourcesTable_{}_v{}.html", self.name, self.version)
    }

    pub fn input_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.input_file_name())
    }

    pub fn output_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.output_file_name())
    }

    pub fn default_input_path(&self) -> PathBuf {
        self.input_path(DEFAULT_INPUT_DIR)
    }

    pub fn default_output_path(&self) -> PathBuf {
        self.output_path(DEFAULT_OUTPUT_DIR)
    }
}

/// Widths registered for `name`
pub fn width_profile(name: &str) -> RenderResult<&'static [&'static str]> {
    lookup_profile(name).ok_or_else(|| RenderError::unknown_profile(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_accepted() {
        for v in ["1.6", "0.0", "10.12", "1.06"] {
            let parsed = MineVersion::parse(v).unwrap();
            assert_eq!(parsed.as_str(), v);
        }
        let v: MineVersion = "2.13".parse().unwrap();
        assert_eq!(v.major(), "2");
        assert_eq!(v.minor(), "13");
        assert_eq!(v.to_string(), "2.13");
    }

    #[test]
    fn test_version_rejected() {
        for v in ["1.6.2", "a.b", "1", "", ".", "1.", ".6", "-1.6", "1.6b", " 1.6", "1,6", "١.٢"] {
            assert_eq!(
                MineVersion::parse(v).unwrap_err(),
                RenderError::invalid_version(v),
                "expected {:?} to be rejected",
                v
            );
        }
    }

    #[test]
    fn test_dataset_config() {
        let cfg = DatasetConfig::new("MaizeMine", "1.6").unwrap();
        assert_eq!(cfg.name(), "MaizeMine");
        assert_eq!(cfg.widths(), vec!["15%", "15%", "15%", "20%", "20%", "15%"]);
        assert_eq!(cfg.input_file_name(), "MaizeMine_v1.6_Data_Sources.csv");
        assert_eq!(
            cfg.default_output_path(),
            PathBuf::from("output_html").join("dataSourcesTable_MaizeMine_v1.6.html")
        );
        assert_eq!(
            cfg.default_input_path(),
            PathBuf::from("input_csv").join("MaizeMine_v1.6_Data_Sources.csv")
        );
    }

    #[test]
    fn test_version_checked_before_profile() {
        let err = DatasetConfig::new("NoSuchMine", "x").unwrap_err();
        assert!(matches!(err, RenderError::InvalidVersionFormat { .. }));
    }

    #[test]
    fn test_unknown_profile() {
        let err = DatasetConfig::new("NoSuchMine", "1.0").unwrap_err();
        assert_eq!(err, RenderError::unknown_profile("NoSuchMine"));
        assert!(width_profile("NoSuchMine").is_err());
        assert_eq!(width_profile("AquaMine").unwrap().len(), 6);
    }

    #[test]
    fn test_custom_widths() {
        let cfg =
            DatasetConfig::with_widths("MyMine", "3.1", vec!["50%".into(), "50%".into()]).unwrap();
        assert_eq!(cfg.widths(), vec!["50%", "50%"]);
        assert_eq!(cfg.output_file_name(), "dataSourcesTable_MyMine_v3.1.html");
        assert!(matches!(cfg.width_source(), WidthSource::Custom(_)));
    }
}
