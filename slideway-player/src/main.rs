use slideway_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("slideway_player", LevelFilter::Debug)
        .filter_module("slideway_core", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    log::info!(
        "Starting Slideway player (showcase: {})",
        config
            .showcase_path()
            .map_or_else(|| "built-in demo".to_string(), |path| path.display().to_string())
    );

    app::application(config).run()
}
