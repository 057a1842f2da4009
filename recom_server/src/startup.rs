use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::HttpServer;

use crate::api::RECOMMENDATIONS_URL_PREFIX;
use crate::app_config::build_app;
use crate::application::{Application, StartupError};
use crate::configuration::Settings;
use crate::recommendations::recommendations_blueprint;

/// Builds the recom server application: settings checked, recommendations
/// blueprint mounted at `/recommendations`. CORS is applied by [`build_app`].
pub fn create_application(settings: Settings) -> Result<Application, StartupError> {
    if settings.secret_key.is_none() {
        if settings.application.require_secret_key {
            return Err(StartupError::MissingSecretKey);
        }
        tracing::warn!("SECRET_KEY is not set, starting without a secret key");
    }

    let mut application = Application::new(settings);
    application.register_blueprint(recommendations_blueprint(), RECOMMENDATIONS_URL_PREFIX)?;
    Ok(application)
}

pub struct RunningServer {
    port: u16,
    server: Server,
}

impl RunningServer {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

impl Application {
    /// Binds to the configured host and port
    pub fn serve(self) -> Result<RunningServer, StartupError> {
        let address = format!(
            "{}:{}",
            self.settings().application.host,
            self.settings().application.port
        );
        let listener = TcpListener::bind(address)?;
        self.serve_on(listener)
    }

    pub fn serve_on(self, listener: TcpListener) -> Result<RunningServer, StartupError> {
        let port = listener.local_addr()?.port();
        let application = Arc::new(self);
        let server = HttpServer::new(move || build_app(application.clone()))
            .listen(listener)?
            .run();

        tracing::info!("Serving HTTP on port {}", port);
        Ok(RunningServer { port, server })
    }
}
