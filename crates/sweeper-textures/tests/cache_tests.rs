use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use sweeper_textures::{TextureCache, TextureLoader, TexturePaths};

// Stand-in for a GPU texture: the file bytes, or empty for the placeholder.
#[derive(Debug, PartialEq)]
struct FakeTexture {
    bytes: Vec<u8>,
}

#[derive(Default)]
struct DiskLoader {
    reads: Vec<PathBuf>,
}

impl TextureLoader for DiskLoader {
    type Texture = FakeTexture;

    fn load(&mut self, path: &Path) -> Result<FakeTexture, Box<dyn Error>> {
        self.reads.push(path.to_path_buf());
        let bytes = fs::read(path)?;
        Ok(FakeTexture { bytes })
    }

    fn placeholder(&mut self) -> FakeTexture {
        FakeTexture { bytes: Vec::new() }
    }
}

fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, TextureCache<FakeTexture>) {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(format!("{}.png", name)), contents).unwrap();
    }
    let cache = TextureCache::new(TexturePaths::new(dir.path(), "png"));
    (dir, cache)
}

#[test]
fn same_name_returns_same_texture_and_reads_once() {
    let (_dir, mut cache) = setup(&[("mine", "mine-bytes")]);
    let mut loader = DiskLoader::default();

    let a = cache.get(&mut loader, "mine");
    let b = cache.get(&mut loader, "mine");

    assert!(Rc::ptr_eq(&a, &b));
    assert_eq!(a.bytes, b"mine-bytes");
    assert_eq!(loader.reads.len(), 1);
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses, stats.loads), (1, 1, 1));
    assert_eq!(stats.entries, 1);
}

#[test]
fn appends_png_extension_to_name() {
    let (dir, mut cache) = setup(&[("flag", "f")]);
    let mut loader = DiskLoader::default();
    cache.get(&mut loader, "flag");
    assert_eq!(loader.reads, vec![dir.path().join("flag.png")]);
}

#[test]
fn clear_forces_fresh_disk_read() {
    let (dir, mut cache) = setup(&[("tile_hidden", "old")]);
    let mut loader = DiskLoader::default();

    let first = cache.get(&mut loader, "tile_hidden");
    fs::write(dir.path().join("tile_hidden.png"), b"new").unwrap();
    cache.clear();
    assert!(cache.is_empty());

    let second = cache.get(&mut loader, "tile_hidden");
    assert_eq!(loader.reads.len(), 2);
    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(second.bytes, b"new");
    // Handles taken before the clear stay usable.
    assert_eq!(first.bytes, b"old");
    assert_eq!(cache.stats().clears, 1);
}

#[test]
fn missing_file_yields_placeholder_without_retry() {
    let (_dir, mut cache) = setup(&[]);
    let mut loader = DiskLoader::default();

    let tex = cache.get(&mut loader, "does_not_exist");
    assert!(tex.bytes.is_empty());
    assert!(cache.contains("does_not_exist"));

    let again = cache.get(&mut loader, "does_not_exist");
    assert!(Rc::ptr_eq(&tex, &again));
    assert_eq!(loader.reads.len(), 1);
    assert_eq!(cache.stats().failures, 1);
}

#[test]
fn load_rereads_and_replaces_entry() {
    let (dir, mut cache) = setup(&[("face", "smile")]);
    let mut loader = DiskLoader::default();

    let before = cache.get(&mut loader, "face");
    fs::write(dir.path().join("face.png"), b"dead").unwrap();
    let reloaded = cache.load(&mut loader, "face");

    assert_eq!(reloaded.bytes, b"dead");
    assert_eq!(before.bytes, b"smile");
    assert!(Rc::ptr_eq(&reloaded, &cache.get(&mut loader, "face")));
    assert_eq!(cache.len(), 1);
    assert_eq!(loader.reads.len(), 2);
}

#[test]
fn try_get_reports_failure_and_caches_nothing() {
    let (dir, mut cache) = setup(&[]);
    let mut loader = DiskLoader::default();

    let err = cache.try_get(&mut loader, "number_1").unwrap_err();
    assert_eq!(err.name, "number_1");
    assert_eq!(err.path, dir.path().join("number_1.png"));
    assert!(err.to_string().contains("number_1"));
    assert!(!cache.contains("number_1"));

    fs::write(dir.path().join("number_1.png"), b"1").unwrap();
    let tex = cache.try_get(&mut loader, "number_1").unwrap();
    assert_eq!(tex.bytes, b"1");
    assert_eq!(loader.reads.len(), 2);
}

#[test]
fn preload_counts_failures() {
    let (_dir, mut cache) = setup(&[("mine", "m"), ("flag", "f")]);
    let mut loader = DiskLoader::default();

    let failed = cache.preload(&mut loader, ["mine", "flag", "missing", "mine"]);
    assert_eq!(failed, 1);
    assert_eq!(cache.names(), vec!["flag", "mine", "missing"]);
    assert_eq!(loader.reads.len(), 3);
}

#[test]
fn remove_and_get_cached() {
    let (_dir, mut cache) = setup(&[("mine", "m")]);
    let mut loader = DiskLoader::default();

    assert!(cache.get_cached("mine").is_none());
    let tex = cache.get(&mut loader, "mine");
    assert!(Rc::ptr_eq(&tex, &cache.get_cached("mine").unwrap()));

    let removed = cache.remove("mine").unwrap();
    assert!(Rc::ptr_eq(&tex, &removed));
    assert!(cache.get_cached("mine").is_none());
    assert!(cache.remove("mine").is_none());
}

#[test]
fn reload_of_missing_file_keeps_previous_texture() {
    let (dir, mut cache) = setup(&[("mine", "good")]);
    let mut loader = DiskLoader::default();

    let before = cache.get(&mut loader, "mine");
    fs::remove_file(dir.path().join("mine.png")).unwrap();

    let err = cache.reload(&mut loader, "mine").unwrap_err();
    assert_eq!(err.name, "mine");
    assert_eq!(loader.reads.len(), 2);
    assert_eq!(cache.stats().failures, 1);

    let after = cache.get(&mut loader, "mine");
    assert!(Rc::ptr_eq(&before, &after));
    assert_eq!(after.bytes, b"good");
}

#[test]
fn reload_replaces_entry_when_file_reads() {
    let (dir, mut cache) = setup(&[("flag", "v1")]);
    let mut loader = DiskLoader::default();

    let before = cache.get(&mut loader, "flag");
    fs::write(dir.path().join("flag.png"), b"v2").unwrap();
    let reloaded = cache.reload(&mut loader, "flag").unwrap();

    assert_eq!(reloaded.bytes, b"v2");
    assert!(!Rc::ptr_eq(&before, &reloaded));
    assert!(Rc::ptr_eq(&reloaded, &cache.get_cached("flag").unwrap()));
}
