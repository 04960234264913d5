mod init;
mod render;
mod state;
mod watchers;

pub use state::App;
pub(crate) use watchers::spawn_texture_watcher;
