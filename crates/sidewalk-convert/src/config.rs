//! Converter configuration.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! profile: profiles/USWebCoatedSWOP.icc
//! parallel: true
//! printer:
//!   width_inches: 24
//!   dpi: 4
//! ```
//!
//! A relative `profile` path is resolved against the directory holding the
//! config file. `parallel` and `printer` are optional.

use crate::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use sidewalk_ops::PrinterGeometry;
use std::path::{Path, PathBuf};

/// Settings for building an [`crate::ImageConverter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Path to the CMYK output profile. Required before conversion.
    #[serde(default)]
    pub profile: Option<PathBuf>,

    /// Convert rows on the rayon pool.
    #[serde(default)]
    pub parallel: bool,

    /// Print geometry used to size images before conversion.
    #[serde(default)]
    pub printer: PrinterGeometry,
}

impl ConvertConfig {
    /// Creates a config for the given profile with defaults elsewhere.
    pub fn new(profile: impl Into<PathBuf>) -> Self {
        Self {
            profile: Some(profile.into()),
            ..Self::default()
        }
    }

    /// Loads a config from a YAML file.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Io`] if the file cannot be read and
    /// [`ConvertError::Parse`] if it is not valid config YAML.
    pub fn from_file(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let config = Self::from_yaml_str(&text, base)?;
        tracing::debug!(path = %path.display(), profile = ?config.profile, "loaded config");
        Ok(config)
    }

    /// Parses config YAML, resolving a relative profile path against `base_dir`.
    pub fn from_yaml_str(yaml: &str, base_dir: impl AsRef<Path>) -> ConvertResult<Self> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        if let Some(profile) = config.profile.take() {
            config.profile = Some(if profile.is_relative() {
                base_dir.as_ref().join(profile)
            } else {
                profile
            });
        }
        Ok(config)
    }

    /// The configured profile path.
    ///
    /// # Errors
    ///
    /// [`ConvertError::Config`] if no profile was configured.
    pub fn profile_path(&self) -> ConvertResult<&Path> {
        self.profile
            .as_deref()
            .ok_or_else(|| ConvertError::Config("no CMYK profile configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::from_yaml_str("profile: /icc/press.icc", "/etc").unwrap();
        assert_eq!(config.profile_path().unwrap(), Path::new("/icc/press.icc"));
        assert!(!config.parallel);
        assert_eq!(config.printer.target_width(), 96);
    }

    #[test]
    fn test_relative_profile_resolved() {
        let yaml = "profile: press.icc\nparallel: true\nprinter:\n  dpi: 10\n";
        let config = ConvertConfig::from_yaml_str(yaml, "/srv/sidewalk").unwrap();
        assert_eq!(
            config.profile_path().unwrap(),
            Path::new("/srv/sidewalk/press.icc")
        );
        assert!(config.parallel);
        assert_eq!(config.printer.target_width(), 240);
    }

    #[test]
    fn test_missing_profile() {
        let config = ConvertConfig::from_yaml_str("parallel: true", "").unwrap();
        assert!(matches!(config.profile_path(), Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_bad_yaml() {
        let err = ConvertConfig::from_yaml_str("parallel: [1, 2", "").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidewalk.yaml");
        std::fs::write(&path, "profile: cmyk.icc\n").unwrap();

        let config = ConvertConfig::from_file(&path).unwrap();
        assert_eq!(config.profile_path().unwrap(), dir.path().join("cmyk.icc"));

        let missing = ConvertConfig::from_file(dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(ConvertError::Io(_))));
    }
}
