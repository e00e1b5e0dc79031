// --- File: backend/src/web_server.rs ---

use axum::{
    extract::{OriginalUri, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use common::HelloMessage;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::{auth, static_files, user};

#[derive(Clone)]
pub struct AppState {
    pub app_config: AppConfig,
}

#[derive(OpenApi)]
#[openapi(
    paths(auth::login, auth::two_step_code, user::info, hello),
    tags(
        (name = "auth", description = "Mock login flow"),
        (name = "user", description = "Current user"),
        (name = "misc", description = "Connectivity checks"),
    )
)]
pub struct ApiDoc;

pub async fn run_server(app_state: AppState) -> Result<(), AppError> {
    let addr = app_state.app_config.socket_addr();
    let app = create_router(app_state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Serving frontend and API at http://{}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

pub fn create_router(app_state: AppState) -> Router {
    // A GET on a POST-only path is a client-side route, not a wrong method.
    let auth_routes = Router::new()
        .route("/auth/login", post(auth::login).get(static_files::serve))
        .route(
            "/auth/2step-code",
            post(auth::two_step_code).get(static_files::serve),
        );

    let user_routes = Router::new().route("/user/info", get(user::info));

    // Literal paths always win over `/{rest}`, whatever the order here. It
    // matches one segment only; deeper unknown paths reach the static fallback.
    let misc_routes = Router::new()
        .route("/hello", get(hello))
        .route("/openapi.json", get(openapi))
        .route("/{rest}", get(api_not_found));

    let cors_origin = app_state.app_config.web.cors_origin.clone();

    let mut router = Router::new()
        .nest("/api", auth_routes.merge(user_routes).merge(misc_routes))
        .route("/", get(static_files::serve_index))
        .fallback(get(static_files::serve))
        .with_state(app_state);

    if let Some(origin) = cors_origin {
        match origin.parse::<HeaderValue>() {
            Ok(value) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(value)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers(Any),
                );
            }
            Err(e) => tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e),
        }
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

// --- API Handlers ---

/// ## Hello
/// Greets with the current server time in seconds since the epoch.
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "misc",
    responses(
        (status = 200, description = "Greeting", body = HelloMessage),
    )
)]
pub async fn hello() -> Json<HelloMessage> {
    let now = Utc::now().timestamp();
    tracing::debug!("Saying hello at {}", now);
    Json(HelloMessage {
        message: format!("hello world when {now}"),
    })
}

// Answers 200 unless `api.strict_not_found` is set; the front-end has always
// seen a 200 here.
async fn api_not_found(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, &'static str) {
    tracing::info!("Unknown API path: {}", uri.path());
    let status = if state.app_config.api.strict_not_found {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, "api not found")
}

async fn openapi() -> Result<impl IntoResponse, AppError> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::Internal(format!("Failed to render OpenAPI document: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, finishing in-flight requests");
}
