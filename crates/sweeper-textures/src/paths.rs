use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "png";

/// Maps texture names to files: `<root>/<name>.<extension>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TexturePaths {
    pub root: PathBuf,
    pub extension: String,
}

impl Default for TexturePaths {
    fn default() -> Self {
        // Empty root resolves relative to the working directory
        Self {
            root: PathBuf::new(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl TexturePaths {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, self.extension))
    }

    /// Inverse of [`resolve`](Self::resolve), used for file watcher events.
    /// Nested directories under the root map to `/`-joined names.
    pub fn name_for_path(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        if !ext.eq_ignore_ascii_case(&self.extension) {
            return None;
        }
        let rel = if self.root.as_os_str().is_empty() {
            path
        } else {
            path.strip_prefix(&self.root).ok()?
        };
        let stem = rel.with_extension("");
        let parts: Vec<&str> = stem
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }
}
