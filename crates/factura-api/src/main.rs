use factura_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    factura_api::telemetry::init_telemetry();

    // Load configuration; a missing GOOGLE_API_KEY is fatal here.
    let config = Config::from_env()?;

    let (_state, router) = factura_api::setup::initialize_app(config.clone())?;

    factura_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
