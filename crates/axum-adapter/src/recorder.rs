//! Route-Recording Router Wrapper
//!
//! axum does not expose its route table for introspection, so the
//! in-process adapter records routes as they are registered: a thin
//! wrapper around [`axum::Router`] mirrors the verb helpers, notes the
//! method, documentation path and handler identity, and delegates the
//! actual registration to the wrapped router.

use axum::Router;
use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use routedocs_core::route::{HttpMethod, RouteDescription};

/// Path prefixes that are never documented: the docs UI itself and the
/// adapter's own reserved endpoints.
const RESERVED_PREFIXES: [&str; 2] = ["/docs", "/__routedocs"];

fn is_reserved(path: &str) -> bool {
    RESERVED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Rewrites axum's `{id}` capture segments to the `:id` path-parameter
/// convention used by route descriptions (`{*rest}` becomes `:rest`).
fn doc_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => format!(":{}", name.trim_start_matches('*')),
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// An [`axum::Router`] wrapper that records a [`RouteDescription`] for
/// every registered route.
///
/// Routes under a reserved prefix are still routed but never recorded,
/// so the docs UI does not document itself. Handler identity is taken
/// from the handler's type name; the recorded descriptions carry only
/// extraction facts and are enriched at registration time.
pub struct DocumentedRouter<S = ()> {
    inner: Router<S>,
    routes: Vec<RouteDescription>,
}

impl<S> Default for DocumentedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DocumentedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: Router::new(),
            routes: Vec::new(),
        }
    }

    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let name = std::any::type_name::<H>();
        self.add(HttpMethod::Get, path, name, routing::get(handler))
    }

    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let name = std::any::type_name::<H>();
        self.add(HttpMethod::Post, path, name, routing::post(handler))
    }

    pub fn put<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let name = std::any::type_name::<H>();
        self.add(HttpMethod::Put, path, name, routing::put(handler))
    }

    pub fn delete<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let name = std::any::type_name::<H>();
        self.add(HttpMethod::Delete, path, name, routing::delete(handler))
    }

    pub fn patch<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        let name = std::any::type_name::<H>();
        self.add(HttpMethod::Patch, path, name, routing::patch(handler))
    }

    fn add(
        mut self,
        method: HttpMethod,
        path: &str,
        handler_name: &str,
        method_router: MethodRouter<S>,
    ) -> Self {
        if !is_reserved(path) {
            self.routes
                .push(RouteDescription::new(method, &doc_path(path), handler_name));
        }
        self.inner = self.inner.route(path, method_router);
        self
    }

    /// Merges an already-built router without recording anything, for
    /// route groups that should stay undocumented (e.g. the docs proxy).
    pub fn merge_undocumented(mut self, other: Router<S>) -> Self {
        self.inner = self.inner.merge(other);
        self
    }

    /// The route descriptions recorded so far, in registration order.
    pub fn routes(&self) -> &[RouteDescription] {
        &self.routes
    }

    /// Splits into the routable router and the recorded descriptions.
    pub fn into_parts(self) -> (Router<S>, Vec<RouteDescription>) {
        (self.inner, self.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    async fn list_users() -> Json<Vec<String>> {
        Json(vec![])
    }

    async fn create_user() -> &'static str {
        "created"
    }

    async fn get_user() -> &'static str {
        "user"
    }

    #[test]
    fn test_records_method_path_and_handler() {
        let router: DocumentedRouter = DocumentedRouter::new()
            .get("/users", list_users)
            .post("/users", create_user);

        let routes = router.routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].method, HttpMethod::Get);
        assert_eq!(routes[0].path, "/users");
        assert!(routes[0].handler.contains("list_users"));
        assert_eq!(routes[1].method, HttpMethod::Post);
        assert!(routes[1].handler.contains("create_user"));
    }

    #[test]
    fn test_capture_segments_use_param_convention() {
        let router: DocumentedRouter = DocumentedRouter::new()
            .get("/users/{id}/orders/{orderId}", get_user)
            .delete("/files/{*path}", get_user);

        let routes = router.routes();
        assert_eq!(routes[0].path, "/users/:id/orders/:orderId");
        assert_eq!(routes[1].path, "/files/:path");
    }

    #[test]
    fn test_reserved_paths_routed_but_not_recorded() {
        let router: DocumentedRouter = DocumentedRouter::new()
            .get("/docs", get_user)
            .get("/docs/json", get_user)
            .get("/__routedocs_routes", get_user)
            .get("/health", get_user);

        let routes = router.routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/health");
    }

    #[test]
    fn test_into_parts_preserves_order() {
        let router: DocumentedRouter = DocumentedRouter::new()
            .get("/a", get_user)
            .put("/b", get_user)
            .patch("/c", get_user);

        let (_, routes) = router.into_parts();
        let paths: Vec<_> = routes.iter().map(|route| route.path.as_str()).collect();
        assert_eq!(paths, ["/a", "/b", "/c"]);
    }
}
