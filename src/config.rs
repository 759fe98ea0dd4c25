//! Configuration for scenes and curve sampling.
//!
//! [`SceneConfig`] is always available. With the `config` feature, a YAML
//! document can be loaded into [`Config`]; every field has a default, so a
//! partial file is valid.

use crate::render::RasterOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scene settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Canvas width in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_size"))]
    pub width: u32,

    /// Canvas height in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_size"))]
    pub height: u32,

    /// Curve sampling options.
    #[cfg_attr(feature = "serde", serde(default))]
    pub raster: RasterOptions,
}

fn default_size() -> u32 {
    500
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            raster: RasterOptions::default(),
        }
    }
}

#[cfg(feature = "config")]
pub use yaml::Config;

#[cfg(feature = "config")]
mod yaml {
    use super::SceneConfig;
    use crate::error::{Error, Result};
    use crate::scene::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
    use serde::{Deserialize, Serialize};
    use std::path::Path;

    /// Top-level configuration document.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Config {
        /// Configuration version.
        #[serde(default = "default_version")]
        pub version: u32,

        /// Scene settings.
        #[serde(default)]
        pub scene: SceneConfig,
    }

    fn default_version() -> u32 {
        1
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                version: default_version(),
                scene: SceneConfig::default(),
            }
        }
    }

    impl Config {
        /// Creates a new configuration with default values.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Loads and validates configuration from a YAML file.
        ///
        /// # Errors
        ///
        /// Returns an error if the file cannot be read, parsed or validated.
        pub fn load(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();

            let content = std::fs::read_to_string(path)
                .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

            Self::parse(&content)
        }

        /// Parses and validates configuration from a YAML string.
        ///
        /// # Errors
        ///
        /// Returns an error with line number if parsing fails, or
        /// [`Error::ConfigInvalid`] if a value is out of range.
        pub fn parse(yaml: &str) -> Result<Self> {
            let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
                let line = e.location().map_or(0, |l| l.line());
                Error::ConfigParse {
                    line,
                    message: e.to_string(),
                }
            })?;
            config.validate()?;
            Ok(config)
        }

        /// Loads configuration with fallback to defaults.
        #[must_use]
        pub fn load_or_default(path: impl AsRef<Path>) -> Self {
            Self::load(path).unwrap_or_default()
        }

        /// Checks value ranges.
        ///
        /// # Errors
        ///
        /// Returns [`Error::ConfigInvalid`] naming the first offending key.
        pub fn validate(&self) -> Result<()> {
            let sizes = [("scene.width", self.scene.width), ("scene.height", self.scene.height)];
            for (key, value) in sizes {
                if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&value) {
                    return Err(Error::ConfigInvalid {
                        key: key.to_string(),
                        message: format!(
                            "{value} is outside {MIN_CANVAS_SIZE}..={MAX_CANVAS_SIZE}"
                        ),
                    });
                }
            }

            let steps = [
                ("scene.raster.curve_steps", self.scene.raster.curve_steps),
                ("scene.raster.spline_steps", self.scene.raster.spline_steps),
            ];
            for (key, value) in steps {
                if value == Some(0) {
                    return Err(Error::ConfigInvalid {
                        key: key.to_string(),
                        message: "step count must be positive".to_string(),
                    });
                }
            }
            Ok(())
        }
    }

}
