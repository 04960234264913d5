use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// Backend that turns an image file into a texture resource.
pub trait TextureLoader {
    type Texture;

    fn load(&mut self, path: &Path) -> Result<Self::Texture, Box<dyn Error>>;

    /// Resource stored in place of a texture whose file could not be loaded.
    fn placeholder(&mut self) -> Self::Texture;
}

#[derive(Debug)]
pub struct TextureLoadError {
    pub name: String,
    pub path: PathBuf,
    pub message: String,
}

impl TextureLoadError {
    pub(crate) fn new(name: &str, path: &Path, err: Box<dyn Error>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for TextureLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to load texture '{}' from {}: {}",
            self.name,
            self.path.display(),
            self.message
        )
    }
}

impl Error for TextureLoadError {}
