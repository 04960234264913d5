//! Raylib backend for the texture cache: file loading, filtering and the fallback texture.

use std::error::Error;
use std::path::Path;

use raylib::prelude::*;
use sweeper_textures::{FilterName, TextureCache, TextureLoader};

pub type RaylibTextureCache = TextureCache<Texture2D>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextureFilterMode {
    #[default]
    Point,
    Bilinear,
}

impl TextureFilterMode {
    fn to_rl(self) -> raylib::consts::TextureFilter {
        match self {
            TextureFilterMode::Point => raylib::consts::TextureFilter::TEXTURE_FILTER_POINT,
            TextureFilterMode::Bilinear => raylib::consts::TextureFilter::TEXTURE_FILTER_BILINEAR,
        }
    }
}

impl From<FilterName> for TextureFilterMode {
    fn from(f: FilterName) -> Self {
        match f {
            FilterName::Point => TextureFilterMode::Point,
            FilterName::Bilinear => TextureFilterMode::Bilinear,
        }
    }
}

/// Borrows the raylib handle for the duration of a cache call.
pub struct RaylibTextureLoader<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
    filter: TextureFilterMode,
    highlight_missing: bool,
}

impl<'a> RaylibTextureLoader<'a> {
    pub fn new(rl: &'a mut RaylibHandle, thread: &'a RaylibThread) -> Self {
        Self {
            rl,
            thread,
            filter: TextureFilterMode::default(),
            highlight_missing: false,
        }
    }

    pub fn with_filter(mut self, filter: TextureFilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Draw missing textures as a magenta square instead of nothing.
    pub fn with_highlight_missing(mut self, highlight: bool) -> Self {
        self.highlight_missing = highlight;
        self
    }

    fn configure(&self, tex: &Texture2D) {
        tex.set_texture_filter(self.thread, self.filter.to_rl());
        tex.set_texture_wrap(
            self.thread,
            raylib::consts::TextureWrap::TEXTURE_WRAP_CLAMP,
        );
    }
}

impl TextureLoader for RaylibTextureLoader<'_> {
    type Texture = Texture2D;

    fn load(&mut self, path: &Path) -> Result<Texture2D, Box<dyn Error>> {
        if !path.is_file() {
            return Err(format!("no such file: {}", path.display()).into());
        }
        let p = path.to_string_lossy();
        let tex = self
            .rl
            .load_texture(self.thread, &p)
            .map_err(|e| e.to_string())?;
        self.configure(&tex);
        Ok(tex)
    }

    fn placeholder(&mut self) -> Texture2D {
        if !self.highlight_missing {
            return empty_texture();
        }
        let img = Image::gen_image_color(1, 1, Color::MAGENTA);
        match self.rl.load_texture_from_image(self.thread, &img) {
            Ok(tex) => {
                self.configure(&tex);
                tex
            }
            Err(e) => {
                log::warn!("missing-texture highlight upload failed: {}", e);
                empty_texture()
            }
        }
    }
}

/// Texture with GL id 0; raylib skips it when drawing and unloading.
fn empty_texture() -> Texture2D {
    let raw = raylib::ffi::Texture2D {
        id: 0,
        width: 0,
        height: 0,
        mipmaps: 0,
        format: 0,
    };
    unsafe { Texture2D::from_raw(raw) }
}
