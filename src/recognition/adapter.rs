use async_trait::async_trait;

use crate::errors::OverlayResult;
use crate::ocr_result::RawRecognitionResult;

/// One image handed to a recognition engine.
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    pub id: i64,
    /// Encoded image (PNG for crops produced by this crate).
    pub image: Vec<u8>,
    pub language_code: String,
}

/// Bridge to an external OCR engine. Implementations return pixel-space
/// boxes relative to the image they were given.
#[async_trait]
pub trait OcrAdapter: Send + Sync {
    fn name(&self) -> &str;

    async fn recognize(&self, request: RecognitionRequest) -> OverlayResult<RawRecognitionResult>;

    async fn supported_languages(&self) -> OverlayResult<Vec<String>> {
        Ok(Vec::new())
    }
}
