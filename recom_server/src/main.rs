use anyhow::Context;

use recom_server::configuration::{load_dotenv, Settings};
use recom_server::startup::create_application;
use recom_server::telemetry::init_telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv().context("Failed to load .env file")?;

    let settings = Settings::load().context("Failed to read configuration")?;
    init_telemetry(&settings.telemetry).context("Failed to install telemetry")?;

    let application = create_application(settings).context("Failed to create application")?;
    let server = application.serve().context("Failed to start server")?;
    println!("starting HTTP server at http://localhost:{}", server.port());

    server.run_until_stopped().await?;
    Ok(())
}
