use serde::{Deserialize, Serialize};

use crate::{circle, error::ConfigError, palette::Palette};

/// Settings for one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Number of points approximating a circle's boundary
    pub circle_resolution: usize,
    /// Colors assigned to overlap groups, in order
    pub palette: Palette,
    /// Evaluate the pairwise overlap scan on the rayon thread pool
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            circle_resolution: circle::DEFAULT_RESOLUTION,
            palette: Palette::default(),
            parallel: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.circle_resolution < 3 {
            return Err(ConfigError::CircleResolution(self.circle_resolution));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.circle_resolution, 32);
        assert_eq!(config.palette.color(0), "#FF0000");
        assert!(!config.parallel);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json() {
        let config: Config = serde_json::from_str(r#"{ "parallel": true }"#).unwrap();
        assert_eq!(config, Config { parallel: true, ..Config::default() });

        let config: Config = serde_json::from_str(r##"{ "circleResolution": 2, "palette": ["#ABCDEF"] }"##).unwrap();
        assert_eq!(config.palette.color(3), "#ABCDEF");
        assert_eq!(config.validate(), Err(ConfigError::CircleResolution(2)));

        assert!(serde_json::from_str::<Config>(r#"{ "palette": [] }"#).is_err());
    }
}
