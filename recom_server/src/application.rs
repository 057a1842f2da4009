use std::sync::Arc;

use actix_web::http::Method;
use paperclip::actix::web;
use secrecy::SecretString;

use crate::api::HEALTH_PATH;
use crate::blueprint::{Blueprint, MountedBlueprint};
use crate::configuration::Settings;
use crate::handlers;
use crate::recommendations_provider::{
    InMemoryRecommendationsProvider, SharedRecommendationsProvider,
};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("SECRET_KEY is not set")]
    MissingSecretKey,

    #[error("Blueprint {0} already registered")]
    DuplicateBlueprint(String),

    #[error("Invalid url prefix {0}, it has to start with '/'")]
    InvalidUrlPrefix(String),

    #[error("Failed to start server {0}")]
    Io(#[from] std::io::Error),
}

/// Configured application instance: settings, mounted route groups and the
/// collaborators handlers depend on. Only mutated before it is served.
pub struct Application {
    settings: Settings,
    blueprints: Vec<MountedBlueprint>,
    recommendations_provider: SharedRecommendationsProvider,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            blueprints: vec![],
            recommendations_provider: Arc::new(InMemoryRecommendationsProvider::default()),
        }
    }

    pub fn with_recommendations_provider(
        mut self,
        recommendations_provider: SharedRecommendationsProvider,
    ) -> Self {
        self.recommendations_provider = recommendations_provider;
        self
    }

    /// Mounts `blueprint` under `url_prefix`, trailing slashes of the prefix are dropped
    pub fn register_blueprint(
        &mut self,
        blueprint: Blueprint,
        url_prefix: &str,
    ) -> Result<(), StartupError> {
        let url_prefix = url_prefix.trim_end_matches('/');
        if !url_prefix.is_empty() && !url_prefix.starts_with('/') {
            return Err(StartupError::InvalidUrlPrefix(url_prefix.to_string()));
        }
        if self
            .blueprints
            .iter()
            .any(|mounted| mounted.blueprint().name() == blueprint.name())
        {
            return Err(StartupError::DuplicateBlueprint(blueprint.name().to_string()));
        }

        tracing::info!(
            "Registering blueprint {} at '{}'",
            blueprint.name(),
            url_prefix
        );
        self.blueprints
            .push(MountedBlueprint::new(url_prefix, blueprint));
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn secret_key(&self) -> Option<&SecretString> {
        self.settings.secret_key.as_ref()
    }

    pub fn blueprints(&self) -> &[MountedBlueprint] {
        &self.blueprints
    }

    pub fn recommendations_provider(&self) -> SharedRecommendationsProvider {
        self.recommendations_provider.clone()
    }

    /// Method and full path of every route contributed by the mounted blueprints
    pub fn route_table(&self) -> Vec<(Method, String)> {
        self.blueprints
            .iter()
            .flat_map(MountedBlueprint::route_table)
            .collect()
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.service(web::resource(HEALTH_PATH).route(web::get().to(handlers::health)));
        for mounted in self.blueprints.iter() {
            mounted.configure(cfg);
        }
    }
}

#[cfg(test)]
mod application_tests {
    use actix_web::http::Method;

    use crate::application::{Application, StartupError};
    use crate::blueprint::Blueprint;
    use crate::configuration::Settings;
    use crate::recommendations::recommendations_blueprint;

    fn settings() -> Settings {
        Settings::load_from(Some(Default::default())).expect("Failed to load settings")
    }

    #[test]
    fn test_new_application_has_no_blueprints() {
        let application = Application::new(settings());

        assert!(application.blueprints().is_empty());
        assert!(application.route_table().is_empty());
        assert!(application.secret_key().is_none());
    }

    #[test]
    fn test_register_blueprint_trims_trailing_slash() {
        let mut application = Application::new(settings());

        application
            .register_blueprint(recommendations_blueprint(), "/recommendations/")
            .expect("Failed to register blueprint");

        assert_eq!(application.blueprints()[0].url_prefix(), "/recommendations");
        assert_eq!(
            application.route_table(),
            vec![(
                Method::GET,
                "/recommendations/get-recommendation".to_string()
            )]
        );
    }

    #[test]
    fn test_register_blueprint_twice_fails() {
        let mut application = Application::new(settings());

        application
            .register_blueprint(recommendations_blueprint(), "/recommendations")
            .expect("Failed to register blueprint");
        let result = application.register_blueprint(recommendations_blueprint(), "/other");

        assert!(matches!(
            result,
            Err(StartupError::DuplicateBlueprint(name)) if name == "recommendations"
        ));
        assert_eq!(application.blueprints().len(), 1);
    }

    #[test]
    fn test_register_blueprint_with_relative_prefix_fails() {
        let mut application = Application::new(settings());

        let result = application.register_blueprint(Blueprint::new("empty"), "relative");

        assert!(matches!(result, Err(StartupError::InvalidUrlPrefix(..))));
        assert!(application.blueprints().is_empty());
    }
}
