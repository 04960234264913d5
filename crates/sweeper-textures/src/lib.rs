//! Name-keyed texture cache with lazy fill on miss, independent of the graphics backend.
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod loader;
pub mod paths;

pub use cache::{TextureCache, TextureCacheStats};
pub use config::{FilterName, TextureConfig};
pub use loader::{TextureLoadError, TextureLoader};
pub use paths::TexturePaths;
