use std::collections::HashMap;
use std::rc::Rc;

use crate::loader::{TextureLoadError, TextureLoader};
use crate::paths::TexturePaths;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextureCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub loads: u64,
    pub failures: u64,
    pub clears: u64,
    pub entries: usize,
}

/// Owned name -> texture table. Each name is read from disk at most once
/// until it is reloaded, removed or the cache is cleared.
///
/// Handles are `Rc` clones, so textures handed out earlier outlive `clear`.
pub struct TextureCache<T> {
    map: HashMap<String, Rc<T>>,
    paths: TexturePaths,
    hits: u64,
    misses: u64,
    loads: u64,
    failures: u64,
    clears: u64,
}

impl<T> Default for TextureCache<T> {
    fn default() -> Self {
        Self::new(TexturePaths::default())
    }
}

impl<T> TextureCache<T> {
    pub fn new(paths: TexturePaths) -> Self {
        Self {
            map: HashMap::new(),
            paths,
            hits: 0,
            misses: 0,
            loads: 0,
            failures: 0,
            clears: 0,
        }
    }

    pub fn paths(&self) -> &TexturePaths {
        &self.paths
    }

    /// Reads `name` from disk and stores it, replacing any cached entry.
    /// A failed read stores the loader's placeholder; nothing is reported
    /// to the caller beyond a warning in the log.
    pub fn load<L>(&mut self, loader: &mut L, name: &str) -> Rc<T>
    where
        L: TextureLoader<Texture = T>,
    {
        let tex = match self.read(loader, name) {
            Ok(tex) => tex,
            Err(e) => {
                log::warn!("{}", e);
                loader.placeholder()
            }
        };
        let tex = Rc::new(tex);
        self.map.insert(name.to_string(), Rc::clone(&tex));
        tex
    }

    /// Re-reads `name` and replaces the entry only when the read succeeds;
    /// on failure the previous entry (if any) is kept.
    pub fn reload<L>(&mut self, loader: &mut L, name: &str) -> Result<Rc<T>, TextureLoadError>
    where
        L: TextureLoader<Texture = T>,
    {
        let tex = Rc::new(self.read(loader, name)?);
        self.map.insert(name.to_string(), Rc::clone(&tex));
        Ok(tex)
    }

    /// Returns the cached texture for `name`, loading it on first request.
    pub fn get<L>(&mut self, loader: &mut L, name: &str) -> Rc<T>
    where
        L: TextureLoader<Texture = T>,
    {
        if let Some(tex) = self.map.get(name) {
            self.hits += 1;
            return Rc::clone(tex);
        }
        self.misses += 1;
        self.load(loader, name)
    }

    /// Like [`get`](Self::get) but surfaces load failures. Nothing is cached
    /// when the read fails, so a later call retries.
    pub fn try_get<L>(&mut self, loader: &mut L, name: &str) -> Result<Rc<T>, TextureLoadError>
    where
        L: TextureLoader<Texture = T>,
    {
        if let Some(tex) = self.map.get(name) {
            self.hits += 1;
            return Ok(Rc::clone(tex));
        }
        self.misses += 1;
        let tex = Rc::new(self.read(loader, name)?);
        self.map.insert(name.to_string(), Rc::clone(&tex));
        Ok(tex)
    }

    /// Fills the cache for every name; returns how many fell back to the placeholder.
    pub fn preload<L, I, S>(&mut self, loader: &mut L, names: I) -> usize
    where
        L: TextureLoader<Texture = T>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.failures;
        let mut count = 0usize;
        for name in names {
            self.get(loader, name.as_ref());
            count += 1;
        }
        let failed = (self.failures - before) as usize;
        log::info!("preloaded {} texture(s), {} failed", count, failed);
        failed
    }

    pub fn get_cached(&self, name: &str) -> Option<Rc<T>> {
        self.map.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Rc<T>> {
        self.map.remove(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Cached names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn clear(&mut self) {
        let removed = self.map.len();
        self.map.clear();
        self.clears += 1;
        log::info!("texture cache cleared ({} entries)", removed);
    }

    pub fn stats(&self) -> TextureCacheStats {
        TextureCacheStats {
            hits: self.hits,
            misses: self.misses,
            loads: self.loads,
            failures: self.failures,
            clears: self.clears,
            entries: self.map.len(),
        }
    }

    fn read<L>(&mut self, loader: &mut L, name: &str) -> Result<T, TextureLoadError>
    where
        L: TextureLoader<Texture = T>,
    {
        let path = self.paths.resolve(name);
        self.loads += 1;
        match loader.load(&path) {
            Ok(tex) => {
                log::debug!("loaded texture '{}' from {}", name, path.display());
                Ok(tex)
            }
            Err(e) => {
                self.failures += 1;
                Err(TextureLoadError::new(name, &path, e))
            }
        }
    }
}
