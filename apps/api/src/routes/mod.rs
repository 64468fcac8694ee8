pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::accounts::handlers as accounts;
use crate::payments::handlers as payments;
use crate::reports::handlers as reports;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        // Analysis
        .route("/api/analyze", post(scoring::handle_analyze_offer))
        .route("/api/resume/analyze", post(scoring::handle_analyze_resume))
        .route("/api/resume/upload", post(scoring::handle_upload_resume))
        // Users
        .route("/api/user/:user_id/status", get(accounts::handle_user_status))
        .route("/api/user/:user_id/upgrade", post(accounts::handle_upgrade))
        .route(
            "/api/user/:user_id/payments",
            get(accounts::handle_user_payments),
        )
        // Reports and the curated feed
        .route("/api/report", post(reports::handle_submit_report))
        .route("/api/safe-internships", get(reports::handle_safe_internships))
        .route("/api/admin/stats", get(reports::handle_stats))
        .route("/api/admin/reports", get(reports::handle_list_reports))
        .route(
            "/api/admin/reports/:report_id/status",
            put(reports::handle_update_report_status),
        )
        .route(
            "/api/admin/reports/:report_id",
            delete(reports::handle_delete_report),
        )
        // Payments
        .route("/api/payment/submit", post(payments::handle_submit_payment))
        .route("/api/admin/payments", get(payments::handle_list_payments))
        .route(
            "/api/admin/payment/:payment_id/verify",
            post(payments::handle_verify_payment),
        )
        .route(
            "/api/admin/payment/:payment_id/reject",
            post(payments::handle_reject_payment),
        )
        // Uploaded payment proofs, served read-only
        .nest_service(
            "/api/uploads/payment_proofs",
            ServeDir::new(&state.config.uploads_dir),
        )
        .with_state(state)
}
