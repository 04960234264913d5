use std::path::PathBuf;

use clap::Parser;
use sweeper_textures::TextureConfig;

mod app;
mod assets;

#[derive(Parser, Debug)]
#[command(name = "sweeper", about = "Minesweeper texture viewer")]
struct Args {
    /// Directory holding textures.toml and the images
    #[arg(long)]
    assets: Option<String>,

    /// Texture config file; defaults to <assets>/textures.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reload textures when their files change
    #[arg(long)]
    watch: bool,

    /// Overrides RUST_LOG (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<log::LevelFilter>,

    #[arg(long, default_value_t = 800)]
    width: i32,

    #[arg(long, default_value_t = 600)]
    height: i32,
}

fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = args.log_level {
        logger.filter_level(level);
    }
    logger.init();

    let assets_root = assets::resolve_assets_root(args.assets.clone());
    let assets_root = std::fs::canonicalize(&assets_root).unwrap_or(assets_root);
    log::info!("assets root: {}", assets_root.display());

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| assets::config_path(&assets_root));
    let cfg = if config_path.exists() {
        match TextureConfig::from_path(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{}: {}", config_path.display(), e);
                std::process::exit(2);
            }
        }
    } else {
        log::info!("{} not found, using defaults", config_path.display());
        TextureConfig::default()
    };

    let tex_event_rx = if args.watch {
        let dir = cfg.paths(&assets_root).root;
        Some(app::spawn_texture_watcher(dir, cfg.extension.clone()))
    } else {
        None
    };

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Sweeper textures")
        .resizable()
        .build();
    rl.set_target_fps(60);

    let mut app = app::App::new(&cfg, &assets_root, tex_event_rx);
    app.run(&mut rl, &thread);
}
