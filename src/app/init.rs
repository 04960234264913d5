use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use raylib::prelude::*;
use sweeper_render_raylib::{RaylibTextureCache, RaylibTextureLoader};
use sweeper_textures::TextureConfig;

use super::App;

// Image set shipped with the Minesweeper board
pub const DEFAULT_TILESET: &[&str] = &[
    "tile_hidden",
    "tile_revealed",
    "flag",
    "mine",
    "number_1",
    "number_2",
    "number_3",
    "number_4",
    "number_5",
    "number_6",
    "number_7",
    "number_8",
    "face_happy",
    "face_win",
    "face_lose",
    "digits",
    "debug",
    "test_1",
    "test_2",
    "test_3",
];

impl App {
    pub fn new(
        cfg: &TextureConfig,
        assets_root: &Path,
        tex_event_rx: Option<Receiver<PathBuf>>,
    ) -> Self {
        let names: Vec<String> = if cfg.preload.is_empty() {
            DEFAULT_TILESET.iter().map(|s| s.to_string()).collect()
        } else {
            cfg.preload.clone()
        };
        let paths = cfg.paths(assets_root);
        log::info!("textures resolve as {}", paths.resolve("<name>").display());
        Self {
            textures: RaylibTextureCache::new(paths),
            names,
            filter: cfg.filter.into(),
            highlight_missing: cfg.highlight_missing,
            tex_event_rx,
            show_stats: true,
        }
    }

    pub(crate) fn loader<'a>(
        &self,
        rl: &'a mut RaylibHandle,
        thread: &'a RaylibThread,
    ) -> RaylibTextureLoader<'a> {
        RaylibTextureLoader::new(rl, thread)
            .with_filter(self.filter)
            .with_highlight_missing(self.highlight_missing)
    }

    pub fn preload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let mut loader = self.loader(rl, thread);
        let failed = self.textures.preload(&mut loader, &self.names);
        if failed > 0 {
            log::warn!("{} texture(s) missing; drawing placeholders", failed);
        }
    }
}
