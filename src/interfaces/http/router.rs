//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{DiscoveryService, InterestService, MatchService, SwipeService};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::EmptyData;
use crate::interfaces::http::dto::{GenderDto, GenderPreferenceDto, InterestDto, ProfileDto};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    discovery, health, interests, matches,
    metrics::{self as metrics_mod, http_metrics_middleware},
    request_id::request_id_middleware,
    swipes,
};

/// Unified state for every route. Handlers keep their own narrow
/// `State<T>` extractor, derived through `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub swipe_service: Arc<SwipeService>,
    pub discovery_service: Arc<DiscoveryService>,
    pub match_service: Arc<MatchService>,
    pub interest_service: Arc<InterestService>,
    pub db: DatabaseConnection,
    pub auth: AuthState,
    pub prometheus: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(
        swipe_service: Arc<SwipeService>,
        discovery_service: Arc<DiscoveryService>,
        match_service: Arc<MatchService>,
        interest_service: Arc<InterestService>,
        db: DatabaseConnection,
        jwt_config: JwtConfig,
        prometheus: PrometheusHandle,
    ) -> Self {
        Self {
            swipe_service,
            discovery_service,
            match_service,
            interest_service,
            db,
            auth: AuthState { jwt_config },
            prometheus,
            started_at: Arc::new(Instant::now()),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for swipes::SwipeHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            swipe_service: Arc::clone(&s.swipe_service),
        }
    }
}

impl FromRef<AppState> for discovery::DiscoveryHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            discovery_service: Arc::clone(&s.discovery_service),
        }
    }
}

impl FromRef<AppState> for matches::MatchHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            match_service: Arc::clone(&s.match_service),
        }
    }
}

impl FromRef<AppState> for interests::InterestHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            interest_service: Arc::clone(&s.interest_service),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for metrics_mod::MetricsState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            handle: s.prometheus.clone(),
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the campus auth service"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        swipes::create_swipe,
        swipes::get_swipe_stats,
        discovery::get_recommendations,
        discovery::get_quick_recommendations,
        discovery::save_filters,
        matches::list_matches,
        matches::get_match,
        matches::unmatch,
        interests::list_interests,
    ),
    components(
        schemas(
            EmptyData,
            GenderDto,
            GenderPreferenceDto,
            InterestDto,
            ProfileDto,
            health::HealthResponse,
            health::ComponentHealth,
            swipes::SwipeActionDto,
            swipes::SwipeRequest,
            swipes::SwipeDto,
            swipes::NewMatchDto,
            swipes::SwipeResponse,
            swipes::SwipeStatsDto,
            discovery::ScoredProfileDto,
            discovery::DiscoveryPageDto,
            discovery::SaveFiltersRequest,
            discovery::PreferencesDto,
            matches::MatchDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Swipes", description = "Swipe recording and statistics"),
        (name = "Discovery", description = "Candidate feed and discovery preferences"),
        (name = "Matches", description = "Mutual likes"),
        (name = "Interests", description = "Interest catalogue"),
    ),
    info(
        title = "Campus Match API",
        version = "0.1.0",
        description = "Swipe, match and discovery service for campus profiles"
    )
)]
pub struct ApiDoc;

/// Build the full HTTP router: public health/metrics/docs plus the
/// bearer-protected `/api/v1` resources.
pub fn create_api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/swipes", post(swipes::create_swipe))
        .route("/swipes/stats", get(swipes::get_swipe_stats))
        .route("/discovery", get(discovery::get_recommendations))
        .route("/discovery/feed", get(discovery::get_quick_recommendations))
        .route("/discovery/filters", post(discovery::save_filters))
        .route("/matches", get(matches::list_matches))
        .route(
            "/matches/{id}",
            get(matches::get_match).delete(matches::unmatch),
        )
        .route("/interests", get(interests::list_interests))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics_mod::prometheus_metrics))
        .nest("/api/v1", protected)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::DiscoverySettings;
    use crate::domain::{Gender, RepositoryProvider, UserProfile};
    use crate::infrastructure::crypto::jwt::create_token;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use sea_orm_migration::MigratorTrait;

    struct TestApp {
        router: Router,
        repos: Arc<dyn RepositoryProvider>,
        jwt: JwtConfig,
    }

    impl TestApp {
        async fn new() -> Self {
            let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
            Migrator::up(&db, None).await.unwrap();
            let repos: Arc<dyn RepositoryProvider> =
                Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
            let jwt = JwtConfig::default();
            let prometheus = metrics_exporter_prometheus::PrometheusBuilder::new()
                .build_recorder()
                .handle();

            let state = AppState::new(
                Arc::new(SwipeService::new(repos.clone())),
                Arc::new(DiscoveryService::new(
                    repos.clone(),
                    DiscoverySettings::default(),
                )),
                Arc::new(MatchService::new(repos.clone())),
                Arc::new(InterestService::new(repos.clone())),
                db,
                jwt.clone(),
                prometheus,
            );

            Self {
                router: create_api_router(state),
                repos,
                jwt,
            }
        }

        async fn user(&self, name: &str, gender: Gender) -> UserProfile {
            let profile = UserProfile::new(name, 22, gender);
            self.repos.users().save(profile.clone()).await.unwrap();
            profile
        }

        async fn call(
            &self,
            method: &str,
            uri: &str,
            as_user: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(user_id) = as_user {
                let token = create_token(user_id, &self.jwt, chrono::Duration::hours(1)).unwrap();
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
            }
            let request = match body {
                Some(json) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&json).unwrap()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap_or(Value::Null)
            };
            (status, value)
        }
    }

    #[tokio::test]
    async fn health_is_public_and_pings_database() {
        let app = TestApp::new().await;
        let (status, body) = app.call("GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn api_requires_bearer_token() {
        let app = TestApp::new().await;
        let (status, body) = app.call("GET", "/api/v1/swipes/stats", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn mutual_like_over_http_reports_match() {
        let app = TestApp::new().await;
        let a = app.user("Ayu", Gender::Female).await;
        let b = app.user("Bima", Gender::Male).await;

        let (status, body) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some(&a.id),
                Some(json!({"swipedUserId": b.id, "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["swipe"]["swiperUserId"], a.id.as_str());
        assert_eq!(body["data"]["swipe"]["swipedUserId"], b.id.as_str());
        assert_eq!(body["data"]["swipe"]["action"], "LIKE");
        assert!(body["data"]["match"].is_null());

        let (status, body) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some(&b.id),
                Some(json!({"swipedUserId": a.id, "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let created = &body["data"]["match"];
        let (low, high) = if a.id < b.id { (&a.id, &b.id) } else { (&b.id, &a.id) };
        assert_eq!(created["userAId"], low.as_str());
        assert_eq!(created["userBId"], high.as_str());
        assert!(created["createdAt"].is_string());
        let match_id = created["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .call("GET", "/api/v1/matches", Some(&a.id), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["id"], match_id.as_str());
        assert_eq!(body["data"]["items"][0]["matchedUser"]["id"], b.id.as_str());

        let (status, body) = app.call("GET", "/api/v1/swipes/stats", Some(&a.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["likesGiven"], 1);
        assert_eq!(body["data"]["matchRate"], 100);
    }

    #[tokio::test]
    async fn swipe_errors_map_to_status_codes() {
        let app = TestApp::new().await;
        let a = app.user("Ayu", Gender::Female).await;
        let b = app.user("Bima", Gender::Male).await;

        let (status, _) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some(&a.id),
                Some(json!({"swipedUserId": a.id, "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some(&a.id),
                Some(json!({"swipedUserId": "nobody", "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some("deleted-account"),
                Some(json!({"swipedUserId": b.id, "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let swipe = json!({"swipedUserId": b.id, "action": "DISLIKE"});
        let (status, _) = app
            .call("POST", "/api/v1/swipes", Some(&a.id), Some(swipe.clone()))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = app
            .call("POST", "/api/v1/swipes", Some(&a.id), Some(swipe))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        let (status, _) = app
            .call(
                "POST",
                "/api/v1/swipes",
                Some(&a.id),
                Some(json!({"swipedUserId": "", "action": "LIKE"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn discovery_feed_and_filters() {
        let app = TestApp::new().await;
        let me = app.user("Me", Gender::Male).await;
        let her = app.user("Her", Gender::Female).await;
        app.user("Him", Gender::Male).await;

        let (status, body) = app
            .call(
                "POST",
                "/api/v1/discovery/filters",
                Some(&me.id),
                Some(json!({"gender": "FEMALE"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["interestedInGender"], "FEMALE");

        let (status, body) = app
            .call("GET", "/api/v1/discovery/feed", Some(&me.id), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let profiles = body["data"]["profiles"].as_array().unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0]["id"], her.id.as_str());
        assert_eq!(profiles[0]["matchScore"], 50);

        let (status, _) = app
            .call("GET", "/api/v1/discovery?limit=51", Some(&me.id), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .call(
                "POST",
                "/api/v1/discovery/filters",
                Some(&me.id),
                Some(json!({"minAge": 40, "maxAge": 30})),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn unknown_match_is_not_found() {
        let app = TestApp::new().await;
        let me = app.user("Me", Gender::Male).await;
        let (status, _) = app
            .call("DELETE", "/api/v1/matches/missing", Some(&me.id), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn interest_catalogue_is_listed() {
        let app = TestApp::new().await;
        let me = app.user("Me", Gender::Male).await;
        let (status, body) = app.call("GET", "/api/v1/interests", Some(&me.id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["data"].as_array().unwrap().is_empty());
    }
}
