use std::collections::BTreeMap;

/// Name under which the recommendations route group is registered
pub const RECOMMENDATIONS_BLUEPRINT_NAME: &str = "recommendations";

/// Prefix the recommendations route group is mounted at
pub const RECOMMENDATIONS_URL_PREFIX: &str = "/recommendations";

/// Path of the recommendation endpoint, relative to [`RECOMMENDATIONS_URL_PREFIX`]
pub const GET_RECOMMENDATION_PATH: &str = "/get-recommendation";

pub const HEALTH_PATH: &str = "/health";

pub const API_SPEC_PATH: &str = "/apispec/v2";

/// Query string parameters of a recommendation request, passed through untouched
/// to the recommendations provider
pub type RecommendationQuery = BTreeMap<String, String>;

/// Full path of the recommendation endpoint once the route group is mounted
pub fn get_recommendation_url_path() -> String {
    format!("{RECOMMENDATIONS_URL_PREFIX}{GET_RECOMMENDATION_PATH}")
}
