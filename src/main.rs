use landing::{config::AppConfig, App, Result};

use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        landing::init_production_tracing()
    }
    #[cfg(debug_assertions)]
    {
        landing::init_dbg_tracing();
    }

    // Refuse to start unless every collaborator is ready.
    let app = match AppConfig::load() {
        Ok(config) => App::build_from_config(config).await,
        Err(er) => Err(er.into()),
    }
    .inspect_err(|er| error!("Fatal Error: startup failed: {er}"))?;

    landing::serve(app).await?;

    Ok(())
}
