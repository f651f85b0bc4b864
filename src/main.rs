use clap::Parser;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use spriteoscope::{
    Config, GridRenderer, ScreenRenderer, Session, GRID_SIZE,
    rendering::{self, Layout},
};

fn window_conf() -> Conf {
    let config = Config::parse();
    Conf {
        window_title: "Spriteoscope".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    if let Err(err) = run(config).await {
        tracing::error!(%err, "failed to start");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> spriteoscope::Result<()> {
    config.validate()?;

    let layout = Layout::fit(screen_width(), screen_height(), GRID_SIZE, GRID_SIZE)?;
    let renderer = ScreenRenderer::create_grid(GRID_SIZE, GRID_SIZE, layout.cell_size())?;
    let mut session = Session::from_config(&config, renderer);

    loop {
        session = session.tick(f64::from(get_frame_time()));

        clear_background(BLACK);
        session.renderer().draw();
        if config.hud {
            rendering::draw_hud(&session);
        }

        next_frame().await;
    }
}
