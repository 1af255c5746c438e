//! Resolver settings.
//!
//! Settings select the current platform and, optionally, a built-in
//! profile. They are read from TOML:
//!
//! ```toml
//! platform = "xplane12"
//! aircraft = "c172sp"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use simdata_spec::{AircraftProfile, SimPlatform};

/// Errors raised while loading [`ResolverSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The settings are not valid TOML or have the wrong shape.
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    /// The named aircraft has no built-in profile.
    #[error("no built-in profile for aircraft `{0}`")]
    UnknownAircraft(String),
}

/// Inputs that select what a resolution computes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSettings {
    /// The current platform.
    pub platform: SimPlatform,
    /// Aircraft code of a built-in profile to resolve, if any.
    #[serde(default)]
    pub aircraft: Option<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        ResolverSettings::for_platform(SimPlatform::Xplane12)
    }
}

impl ResolverSettings {
    /// Settings for `platform` with no built-in profile.
    #[must_use]
    pub fn for_platform(platform: SimPlatform) -> Self {
        ResolverSettings {
            platform,
            aircraft: None,
        }
    }

    /// Parses settings from TOML text. `platform` is required.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the text is not valid settings.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its contents are not valid settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the built-in profile named by `aircraft`, or `None` when no
    /// aircraft is configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownAircraft`] when no built-in profile
    /// has the configured aircraft code.
    pub fn builtin_profile(&self) -> Result<Option<AircraftProfile>, SettingsError> {
        let Some(code) = &self.aircraft else {
            return Ok(None);
        };
        simdata_spec::profiles::builtin()
            .into_iter()
            .find(|p| &p.aircraft_code == code)
            .map(Some)
            .ok_or_else(|| SettingsError::UnknownAircraft(code.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_and_aircraft() {
        let settings =
            ResolverSettings::from_toml_str("platform = \"xplane12\"\naircraft = \"c172sp\"\n");
        let settings = settings.unwrap_or_default();
        assert_eq!(settings.platform, SimPlatform::Xplane12);
        assert_eq!(settings.aircraft.as_deref(), Some("c172sp"));
    }

    #[test]
    fn platform_is_required() {
        assert!(matches!(
            ResolverSettings::from_toml_str("aircraft = \"c172sp\""),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ResolverSettings::from_toml_str("platform = \"msfs2020\"\nmode = 1").is_err());
    }

    #[test]
    fn builtin_profile_lookup() {
        let settings = ResolverSettings {
            aircraft: Some("c172sp".to_owned()),
            ..ResolverSettings::default()
        };
        let profile = settings.builtin_profile().ok().flatten();
        assert_eq!(profile.map(|p| p.aircraft_name), Some("Cessna Skyhawk 172SP".to_owned()));

        let missing = ResolverSettings {
            aircraft: Some("concorde".to_owned()),
            ..ResolverSettings::default()
        };
        assert!(matches!(
            missing.builtin_profile(),
            Err(SettingsError::UnknownAircraft(code)) if code == "concorde"
        ));
        assert!(matches!(ResolverSettings::default().builtin_profile(), Ok(None)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ResolverSettings::load(Path::new("/nonexistent/simdata.toml"));
        assert!(matches!(err, Err(SettingsError::Io { .. })));
    }
}
