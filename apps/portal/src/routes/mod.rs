pub mod health;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use tower_http::services::ServeFile;

use crate::contact::handlers as contact;
use crate::jobs::handlers as jobs;
use crate::market::handlers as market;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let resume = ServeFile::new(&state.config.resume_path);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/resume", get_service(resume))
        // Portfolio
        .route("/api/v1/portfolio", get(portfolio::handle_portfolio))
        .route(
            "/api/v1/portfolio/projects",
            get(portfolio::handle_projects),
        )
        .route(
            "/api/v1/portfolio/skills-heatmap",
            get(portfolio::handle_skills_heatmap),
        )
        .route(
            "/api/v1/portfolio/career-path",
            get(portfolio::handle_career_path),
        )
        .route(
            "/api/v1/portfolio/salary-comparison",
            get(portfolio::handle_salary_comparison),
        )
        .route("/api/v1/contact", post(contact::handle_contact))
        // Market views
        .route("/api/v1/dashboard", get(market::handle_dashboard))
        .route(
            "/api/v1/dashboard/refresh",
            post(market::handle_dashboard_refresh),
        )
        .route("/api/v1/analytics", get(market::handle_analytics))
        .route(
            "/api/v1/analytics/refresh",
            post(market::handle_analytics_refresh),
        )
        .route(
            "/api/v1/upstream/health",
            get(health::upstream_health_handler),
        )
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/cards", get(jobs::handle_job_cards))
        .route("/api/v1/jobs/match", post(jobs::handle_skill_match))
        .route("/api/v1/jobs/:id/analyze", post(jobs::handle_analyze_job))
        .route("/api/v1/filters", get(jobs::handle_get_filters))
        .route("/api/v1/filters/toggle", post(jobs::handle_toggle_filter))
        .route("/api/v1/filters/reset", post(jobs::handle_reset_filters))
        .route("/api/v1/filters/search", post(jobs::handle_filter_search))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Json,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::api_client::test_support::{closed_upstream, spawn_upstream};
    use crate::api_client::ApiClient;
    use crate::config::{BuildMode, Config};
    use crate::contact::submission::SimulatedTransport;

    async fn state_for(base_url: String, resume_path: PathBuf) -> AppState {
        let timeout = Duration::from_millis(300);
        AppState {
            config: Config {
                mode: BuildMode::Development,
                api_base_url: base_url.clone(),
                upstream_timeout: timeout,
                resume_path,
                port: 0,
                rust_log: "debug".to_string(),
            },
            api: ApiClient::new(base_url, timeout).unwrap(),
            transport: Arc::new(SimulatedTransport {
                delay: Duration::ZERO,
            }),
            contact_display: Duration::from_secs(5),
        }
    }

    async fn offline_app() -> Router {
        let state = state_for(closed_upstream().await, PathBuf::from("missing.pdf")).await;
        build_router(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(offline_app().await, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["mode"], "development");
    }

    #[tokio::test]
    async fn test_dashboard_offline_shows_demo_data() {
        let (status, body) = send(offline_app().await, get_req("/api/v1/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "demo");
        assert_eq!(body["banner"]["title"], "Demo Mode");
        assert_eq!(body["stat_cards"][0]["value"], "2,847");
    }

    #[tokio::test]
    async fn test_dashboard_refresh_refetches() {
        let router = Router::new().route(
            "/api/jobs/stats",
            get(|| async {
                Json(json!({
                    "total_jobs": 10,
                    "avg_salary": 100000.0,
                    "remote_job_percentage": 50.0,
                    "job_growth_rate": 1.0,
                    "top_skills": ["Rust"],
                    "top_companies": ["Acme"],
                    "avg_salary_by_experience": { "entry": 70000.0 }
                }))
            }),
        );
        let state = state_for(spawn_upstream(router).await, PathBuf::from("missing.pdf")).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/dashboard/refresh")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(build_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "live");
        assert!(body["banner"].is_null());
        assert_eq!(body["stat_cards"][0]["value"], "10");
    }

    #[tokio::test]
    async fn test_analytics_offline_shows_demo_data() {
        let (status, body) = send(offline_app().await, get_req("/api/v1/analytics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "demo");
    }

    #[tokio::test]
    async fn test_jobs_offline_falls_back_to_filtered_catalogue() {
        let (status, body) = send(
            offline_app().await,
            get_req("/api/v1/jobs?remote_type=hybrid&keyword="),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "demo");
        assert_eq!(body["total"], 1);
        assert_eq!(body["jobs"][0]["company"], "Amazon");
    }

    #[tokio::test]
    async fn test_jobs_offline_empty_state() {
        let (_, body) = send(
            offline_app().await,
            get_req("/api/v1/jobs?keyword=cobol"),
        )
        .await;
        assert_eq!(body["total"], 0);
        assert!(body["empty_state"].is_string());
    }

    #[tokio::test]
    async fn test_jobs_reject_non_numeric_salary() {
        let (status, body) = send(
            offline_app().await,
            get_req("/api/v1/jobs?salary_min=abc"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            offline_app().await,
            get_req("/api/v1/jobs/cards?salary_min=lots"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_job_cards_use_visitor_skills() {
        let (status, body) = send(
            offline_app().await,
            get_req("/api/v1/jobs/cards?skills=SQL,dbt,Power%20BI&keyword=microsoft"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cards"][0]["skill_match"]["percent"], 100);
        assert_eq!(body["user_skills"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_returns_match_percent() {
        let router = Router::new().route(
            "/api/jobs/recommendation",
            post(|| async {
                Json(json!({
                    "job_id": "job-1",
                    "match_score": 0.834,
                    "salary_score": 0.7,
                    "growth_potential": 0.6,
                    "recommendation": "Strong fit",
                    "confidence": 0.9
                }))
            }),
        );
        let state = state_for(spawn_upstream(router).await, PathBuf::from("missing.pdf")).await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/jobs/job-1/analyze")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(build_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_percent"], 83);
    }

    #[tokio::test]
    async fn test_analyze_offline_is_bad_gateway() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/jobs/job-1/analyze")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(offline_app().await, request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_skill_match_endpoint() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/jobs/match",
                json!({ "required": ["Python", "SQL", "Spark"], "user": ["python", "sql", "excel"] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 67);
        assert_eq!(body["tier"], "good");
    }

    #[tokio::test]
    async fn test_filters_toggle_and_reset() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/filters/toggle",
                json!({ "filters": { "skills": ["React"] }, "field": "skills", "value": "Docker" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["React", "Docker"]));

        let (_, body) = send(
            offline_app().await,
            post_json("/api/v1/filters/reset", json!({ "keyword": "rust", "salary_min": 5 })),
        )
        .await;
        assert_eq!(body["keyword"], "");
        assert_eq!(body["salary_min"], 0);
        assert_eq!(body["salary_max"], 300000);
    }

    #[tokio::test]
    async fn test_filters_toggle_rejects_empty_value() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/filters/toggle",
                json!({ "field": "remote", "value": "  " }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_filter_options() {
        let (_, body) = send(offline_app().await, get_req("/api/v1/filters")).await;
        assert_eq!(body["filters"]["salary_max"], 300000);
        assert_eq!(body["options"]["timezones"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_filter_search_offline() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/filters/search",
                json!({ "experience": ["Lead"] }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "demo");
        assert_eq!(body["jobs"][0]["company"], "Meta");
    }

    #[tokio::test]
    async fn test_contact_invalid_form() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/contact",
                json!({ "name": "Ada", "email": "nope", "subject": "Hi", "message": "Long enough message" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["details"][0]["field"], "email");
        assert_eq!(body["error"]["details"][0]["message"], "Invalid email address");
    }

    #[tokio::test]
    async fn test_contact_sent() {
        let (status, body) = send(
            offline_app().await,
            post_json(
                "/api/v1/contact",
                json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Hi",
                    "message": "Long enough message"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "sent");
        assert_eq!(body["phase"], "submitted");
        assert_eq!(body["display_for_ms"], 5000);
    }

    #[tokio::test]
    async fn test_portfolio_theme() {
        let (status, body) =
            send(offline_app().await, get_req("/api/v1/portfolio?theme=dark")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "dark");
        assert_eq!(body["hero"]["name"], "Sophia Valhari");
        assert_eq!(body["navbar"]["toggle_to"], "light");

        let (_, body) = send(offline_app().await, get_req("/api/v1/portfolio")).await;
        assert_eq!(body["theme"], "light");
    }

    #[tokio::test]
    async fn test_projects_category_filter() {
        let (_, body) = send(
            offline_app().await,
            get_req("/api/v1/portfolio/projects?category=All"),
        )
        .await;
        assert_eq!(body["projects"].as_array().unwrap().len(), 6);

        let (_, body) = send(
            offline_app().await,
            get_req("/api/v1/portfolio/projects?category=DevOps"),
        )
        .await;
        assert_eq!(body["selected"], "DevOps");
        assert_eq!(body["projects"][0]["title"], "Cost Optimization System");

        let (status, _) = send(
            offline_app().await,
            get_req("/api/v1/portfolio/projects?category=Astrology"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_is_served_from_configured_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4 resume").unwrap();
        let state = state_for(closed_upstream().await, file.path().to_path_buf()).await;

        let response = build_router(state).oneshot(get_req("/resume")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"%PDF-1.4 resume");
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_found() {
        let response = offline_app().await.oneshot(get_req("/resume")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
