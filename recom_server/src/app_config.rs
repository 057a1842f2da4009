use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::App;
use actix_web::web::Data;
use paperclip::actix::OpenApiExt;
use tracing_actix_web::TracingLogger;

use crate::api::API_SPEC_PATH;
use crate::application::Application;
use crate::cors::{cors_fallback_headers, cors_policy};

/// Builds the actix app of one worker out of a configured application instance
pub fn build_app(
    application: Arc<Application>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap_api()
        .app_data(Data::new(application.recommendations_provider()))
        .wrap(cors_policy())
        .wrap(cors_fallback_headers())
        .wrap(TracingLogger::default())
        .configure(|cfg| application.configure(cfg))
        .with_json_spec_at(API_SPEC_PATH)
        .build()
}
