mod app;
mod config;
mod main_lib;
mod terminal;
mod ui;

use app::App;
use config::Config;
use main_lib::{build_service, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config)?;
    tracing::info!("Starting ratedesk with {:?}", config);

    let service = build_service(&config);
    let app = App::new(service, config.board.lookup_debounce);

    terminal::run(app).await
}
