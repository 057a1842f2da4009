use actix_web::web::{Data, Query};
use actix_web::{Error, HttpRequest, HttpResponse};
use paperclip::actix::api_v2_operation;

use crate::api::RecommendationQuery;
use crate::recommendations_provider::{RecommendationsProviderError, SharedRecommendationsProvider};

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
pub async fn get_recommendation(
    recommendations_provider: Data<SharedRecommendationsProvider>,
    request: HttpRequest,
) -> Result<HttpResponse, Error> {
    let query = match Query::<RecommendationQuery>::from_query(request.query_string()) {
        Ok(query) => query.into_inner(),
        Err(err) => {
            tracing::warn!("Invalid recommendation query {}", err);
            return Ok(HttpResponse::BadRequest().finish());
        }
    };

    Ok(
        match recommendations_provider.get_recommendation(&query).await {
            Ok(recommendation) => HttpResponse::Ok().json(recommendation),
            Err(RecommendationsProviderError::InvalidRequest(reason)) => {
                tracing::warn!("Rejected recommendation request {}", reason);
                HttpResponse::BadRequest().finish()
            }
            Err(err) => {
                tracing::error!("Get recommendation failed {}", err);
                HttpResponse::InternalServerError().finish()
            }
        },
    )
}
