//! Text extraction seam for image resume uploads.
//!
//! Carried in `AppState` as `Arc<dyn TextExtractor>` so an OCR backend can
//! be plugged in without touching the handler. The default backend reports
//! the dependency as unavailable — the deployment decides whether to wire
//! a real engine.

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extracts plain text from an uploaded image.
    async fn extract(&self, image: &[u8]) -> Result<String, AppError>;
}

/// Default backend: no OCR engine is bundled with the service.
pub struct UnavailableExtractor;

#[async_trait]
impl TextExtractor for UnavailableExtractor {
    async fn extract(&self, _image: &[u8]) -> Result<String, AppError> {
        Err(AppError::ExtractionUnavailable(
            "No OCR engine is configured. Paste the resume text directly or contact support."
                .to_string(),
        ))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_backend_reports_unavailable() {
        let err = UnavailableExtractor.extract(b"png bytes").await.unwrap_err();
        assert!(matches!(err, AppError::ExtractionUnavailable(_)));
    }
}
