use actix_web::http::Method;
use itertools::Itertools;
use paperclip::actix::web;

/// Builds the actix route (method guard + handler) of a single rule.
/// Plain `fn` so blueprints stay `Clone + Send + Sync` and can be mounted once per worker.
pub type RouteFactory = fn() -> web::Route;

#[derive(Clone)]
pub struct UrlRule {
    method: Method,
    path: String,
    route_factory: RouteFactory,
}

impl UrlRule {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A named, ordered group of url rules, mountable under a prefix
#[derive(Clone)]
pub struct Blueprint {
    name: String,
    rules: Vec<UrlRule>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: vec![],
        }
    }

    /// `method` must be the method `route_factory` guards on, it is what the route table reports
    pub fn add_url_rule(
        mut self,
        path: impl Into<String>,
        method: Method,
        route_factory: RouteFactory,
    ) -> Self {
        self.rules.push(UrlRule {
            method,
            path: path.into(),
            route_factory,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[UrlRule] {
        &self.rules
    }

    /// Registers every rule under `url_prefix`.
    /// Rules sharing a path end up on one resource, so other methods get 405 from actix.
    pub fn configure(&self, url_prefix: &str, cfg: &mut web::ServiceConfig) {
        let scope = self
            .rules
            .iter()
            .map(|rule| rule.path.as_str())
            .unique()
            .fold(web::scope(url_prefix), |scope, path| {
                let resource = self
                    .rules
                    .iter()
                    .filter(|rule| rule.path == path)
                    .fold(web::resource(path), |resource, rule| {
                        resource.route((rule.route_factory)())
                    });
                scope.service(resource)
            });
        cfg.service(scope);
    }
}

/// A blueprint together with the prefix it was registered at
#[derive(Clone)]
pub struct MountedBlueprint {
    url_prefix: String,
    blueprint: Blueprint,
}

impl MountedBlueprint {
    pub fn new(url_prefix: impl Into<String>, blueprint: Blueprint) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            blueprint,
        }
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Method and full path of every rule, in registration order
    pub fn route_table(&self) -> Vec<(Method, String)> {
        self.blueprint
            .rules
            .iter()
            .map(|rule| {
                (
                    rule.method.clone(),
                    format!("{}{}", self.url_prefix, rule.path),
                )
            })
            .collect()
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        self.blueprint.configure(&self.url_prefix, cfg);
    }
}
