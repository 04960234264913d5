use std::rc::Rc;

use raylib::prelude::*;

use super::App;

const TILE: i32 = 64;
const PAD: i32 = 12;
const LABEL: i32 = 14;

impl App {
    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.preload(rl, thread);
        while !rl.window_should_close() {
            self.process_texture_file_events(rl, thread);
            self.handle_input(rl, thread);
            self.draw_frame(rl, thread);
        }
        // Textures must be unloaded while the GL context is still alive
        self.textures.clear();
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if rl.is_key_pressed(KeyboardKey::KEY_C) {
            self.textures.clear();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            let names = self.textures.names();
            let mut loader = self.loader(rl, thread);
            let mut failed = 0usize;
            for name in &names {
                if let Err(e) = self.textures.reload(&mut loader, name) {
                    log::warn!("failed to reload texture: {}", e);
                    failed += 1;
                }
            }
            log::info!("reloaded {} texture(s), {} kept", names.len() - failed, failed);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F1) {
            self.show_stats = !self.show_stats;
        }
    }

    fn draw_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        // Fill (or refill after a clear) before drawing borrows the handle
        let tiles: Vec<(String, Rc<Texture2D>)> = {
            let mut loader = self.loader(rl, thread);
            self.names
                .iter()
                .map(|n| (n.clone(), self.textures.get(&mut loader, n)))
                .collect()
        };
        let stats = self.textures.stats();
        let screen_w = rl.get_screen_width();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::RAYWHITE);

        let cols = ((screen_w - PAD) / (TILE + PAD)).max(1);
        for (i, (name, tex)) in tiles.iter().enumerate() {
            let col = i as i32 % cols;
            let row = i as i32 / cols;
            let x = PAD + col * (TILE + PAD);
            let y = PAD + row * (TILE + PAD + LABEL);
            // Placeholder textures may be 0x0
            let side = tex.width.max(tex.height).max(1);
            let scale = TILE as f32 / side as f32;
            d.draw_rectangle_lines(x - 1, y - 1, TILE + 2, TILE + 2, Color::LIGHTGRAY);
            d.draw_texture_ex(
                &**tex,
                Vector2::new(x as f32, y as f32),
                0.0,
                scale,
                Color::WHITE,
            );
            d.draw_text(name, x, y + TILE + 2, 10, Color::DARKGRAY);
        }

        if self.show_stats {
            let h = d.get_screen_height();
            let line = format!(
                "entries {}  hits {}  misses {}  loads {}  failed {}  clears {}   [R] reload  [C] clear",
                stats.entries, stats.hits, stats.misses, stats.loads, stats.failures, stats.clears
            );
            d.draw_text(&line, PAD, h - 24, 16, Color::DARKGRAY);
        }
    }
}
