use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::paths::{DEFAULT_EXTENSION, TexturePaths};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    #[default]
    Point,
    Bilinear,
}

// textures.toml; every key is optional
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    pub root: String,
    pub extension: String,
    pub filter: FilterName,
    pub preload: Vec<String>,
    /// Missing images get a visible stand-in instead of an empty texture.
    pub highlight_missing: bool,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            filter: FilterName::Point,
            preload: Vec::new(),
            highlight_missing: false,
        }
    }
}

impl TextureConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TextureConfig = toml::from_str(toml_str)?;
        if cfg.extension.trim_start_matches('.').is_empty() {
            return Err("texture extension must not be empty".into());
        }
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Texture paths with `root` taken relative to `base`.
    pub fn paths(&self, base: &Path) -> TexturePaths {
        TexturePaths::new(base.join(&self.root), self.extension.as_str())
    }
}
