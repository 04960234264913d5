use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

use raylib::prelude::*;

use super::App;

/// Watches `dir` for image changes and forwards the changed paths.
pub(crate) fn spawn_texture_watcher(dir: PathBuf, extension: String) -> Receiver<PathBuf> {
    let (tx, rx) = channel::<PathBuf>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let watcher =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else {
                    return;
                };
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                        for p in event.paths {
                            let matches = p
                                .extension()
                                .and_then(|e| e.to_str())
                                .is_some_and(|e| e.eq_ignore_ascii_case(&extension));
                            if matches {
                                let _ = tx.send(p);
                            }
                        }
                    }
                    _ => {}
                }
            });
        let mut watcher = match watcher {
            Ok(w) => w,
            Err(e) => {
                log::warn!("texture watcher unavailable: {}", e);
                return;
            }
        };
        if let Err(e) = watcher.watch(dir.as_path(), RecursiveMode::Recursive) {
            log::warn!("failed to watch {}: {}", dir.display(), e);
            return;
        }
        log::info!("watching {} for texture changes", dir.display());
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
    rx
}

impl App {
    pub fn process_texture_file_events(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let Some(rx) = self.tex_event_rx.as_ref() else {
            return;
        };
        let mut changed: Vec<String> = rx
            .try_iter()
            .filter_map(|p| {
                let canon = std::fs::canonicalize(&p).unwrap_or(p);
                self.textures.paths().name_for_path(&canon)
            })
            .collect();
        if changed.is_empty() {
            return;
        }
        changed.sort();
        changed.dedup();
        log::info!("Texture changes detected: {} file(s)", changed.len());
        let mut loader = self.loader(rl, thread);
        for name in &changed {
            // Uncached names get picked up lazily on their next draw
            if !self.textures.contains(name) {
                continue;
            }
            match self.textures.reload(&mut loader, name) {
                Ok(_) => log::debug!("reloaded texture {}", name),
                Err(e) => log::warn!("failed to reload texture: {}", e),
            }
        }
    }
}
