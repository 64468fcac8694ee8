use std::sync::Arc;

use crate::accounts::UserStore;
use crate::config::Config;
use crate::payments::PaymentStore;
use crate::reports::ReportStore;
use crate::scoring::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub payments: PaymentStore,
    pub reports: ReportStore,
    /// Pluggable OCR backend for image resume uploads.
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}
