mod graphics;
mod settings;

use graphics::window_conf;
use headon_navigation::Scenario;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Head-on viewer started. Loading configuration and planning...");

    if let Err(e) = run().await {
        error!("Viewer failed: {:?}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let app = settings::load_config(&settings::config_path())?;
    let scenario = Scenario::seeded(app.motion, &app.scenario)?;
    info!(
        red = %scenario.red_plan(),
        blue = %scenario.blue_plan(),
        "Initial plans ready; press M to start"
    );

    graphics::run_visualization_loop(scenario).await;
    Ok(())
}
