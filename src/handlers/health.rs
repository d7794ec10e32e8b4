use crate::models::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Verifies that the books database file is still reachable.
/// Returns 200 OK if it is, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    let store = state.store.read().await;
    match store.health_check() {
        Ok(()) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Health check failed: {:#}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: format!("Cannot reach books database: {:#}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{parse, send, setup_test_app};

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let (_dir, _state, app) = setup_test_app();

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        let response_json: HealthResponse = parse(&body);
        assert_eq!(response_json.status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let (_dir, state, app) = setup_test_app();
        std::fs::remove_file(state.config.db_path.as_path()).unwrap();

        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let response_json: UnhealthyResponse = parse(&body);
        assert_eq!(response_json.status, "unhealthy");
        assert!(response_json.error.contains("Books database missing"));
    }
}
