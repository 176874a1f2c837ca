use anyhow::Context;
use trispin::{SceneSettings, Window, WindowSettings};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn run() -> anyhow::Result<()> {
    let settings = WindowSettings::default().title("Rotating Triangle").size(800, 600);
    Window::new(settings)
        .scene(SceneSettings::default())
        .run()
        .context("failed to start")
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        log::error!("{:#}", err);
        std::process::exit(-1);
    }
}
