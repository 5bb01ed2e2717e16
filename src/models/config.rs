use serde::Deserialize;
use std::path::Path;

/// Session configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Number of images loaded at session start
    #[serde(default = "default_images")]
    pub images: usize,

    /// Attempts allowed per image before the session gives up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Dither every loaded image instead of only the first
    #[serde(default)]
    pub dither_all: bool,
}

fn default_images() -> usize {
    2
}

fn default_max_attempts() -> u32 {
    3
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// A missing path or file is not an error; an unreadable or invalid
    /// file is logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        images = config.images,
                        max_attempts = config.max_attempts,
                        dither_all = config.dither_all,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// A session needs at least one image and one attempt.
    fn normalized(mut self) -> Self {
        if self.images == 0 {
            tracing::warn!("images must be at least 1, using 1");
            self.images = 1;
        }
        if self.max_attempts == 0 {
            tracing::warn!("max_attempts must be at least 1, using 1");
            self.max_attempts = 1;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            max_attempts: default_max_attempts(),
            dither_all: false,
        }
    }
}
