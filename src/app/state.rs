use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use sweeper_render_raylib::{RaylibTextureCache, TextureFilterMode};

pub struct App {
    pub(crate) textures: RaylibTextureCache,
    /// Names drawn each frame, in display order.
    pub(crate) names: Vec<String>,
    pub(crate) filter: TextureFilterMode,
    pub(crate) highlight_missing: bool,
    pub(crate) tex_event_rx: Option<Receiver<PathBuf>>,
    pub(crate) show_stats: bool,
}
