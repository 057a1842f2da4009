use actix_web::http::Method;
use paperclip::actix::web;

use crate::api::{GET_RECOMMENDATION_PATH, RECOMMENDATIONS_BLUEPRINT_NAME};
use crate::blueprint::Blueprint;
use crate::handlers;

/// The `recommendations` route group, meant to be mounted at
/// [`RECOMMENDATIONS_URL_PREFIX`](crate::api::RECOMMENDATIONS_URL_PREFIX)
pub fn recommendations_blueprint() -> Blueprint {
    Blueprint::new(RECOMMENDATIONS_BLUEPRINT_NAME).add_url_rule(
        GET_RECOMMENDATION_PATH,
        Method::GET,
        || web::get().to(handlers::get_recommendation),
    )
}

#[cfg(test)]
mod recommendations_blueprint_tests {
    use actix_web::http::Method;

    use crate::recommendations::recommendations_blueprint;

    #[test]
    fn test_blueprint_has_single_get_rule() {
        let blueprint = recommendations_blueprint();

        assert_eq!(blueprint.name(), "recommendations");
        assert_eq!(blueprint.rules().len(), 1);
        assert_eq!(blueprint.rules()[0].method(), &Method::GET);
        assert_eq!(blueprint.rules()[0].path(), "/get-recommendation");
    }
}
