use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, fair, enrollment, booth, job, company};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Fairs (public reads)
        .route("/api/fairs", get(fair::list_fairs).post(fair::create_fair))
        .route("/api/fairs/{fair_id}", get(fair::get_fair).put(fair::update_fair))
        .route("/api/fairs/{fair_id}/status", get(fair::get_fair_status))

        // Fair administration
        .route("/api/fairs/{fair_id}/toggle-status", post(fair::toggle_status))
        .route("/api/fairs/{fair_id}/refresh-invite-code", post(fair::refresh_invite_code))

        // Enrollment
        .route("/api/fairs/{fair_id}/enroll", post(enrollment::enroll))
        .route("/api/fairs/{fair_id}/enrollments", get(enrollment::list_enrollments))
        .route("/api/fairs/{fair_id}/enrollments/{company_id}", delete(enrollment::remove_company))
        .route("/api/fairs/{fair_id}/leave", delete(enrollment::leave_fair))

        // Fair content (visibility-gated)
        .route("/api/fairs/{fair_id}/booths", get(booth::list_booths))
        .route("/api/fairs/{fair_id}/jobs", get(job::list_jobs).post(job::create_job))
        .route("/api/jobs/{job_id}/apply", post(job::apply_to_job))

        // Companies
        .route("/api/companies", post(company::create_company))
        .route("/api/companies/{company_id}", get(company::get_company))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                        company_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
