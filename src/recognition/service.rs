use std::sync::atomic::{AtomicI64, Ordering};

use futures_util::future::join_all;

use crate::config::OcrConfig;
use crate::errors::{OverlayError, OverlayResult};
use crate::geometry::Resolution;
use crate::ocr_result::{normalize, NormalizedResult, RegionComposer, RegionPlacement};
use crate::recognition::adapter::RecognitionRequest;
use crate::recognition::crop::crop_region;
use crate::recognition::registry::AdapterRegistry;
use crate::template::{ImageSize, OcrTemplate};

/// Runs captures through the active recognition adapter and turns the
/// engine output into normalized results.
pub struct RecognitionService {
    registry: AdapterRegistry,
    config: OcrConfig,
    next_id: AtomicI64,
}

impl RecognitionService {
    pub fn new(registry: AdapterRegistry, config: OcrConfig) -> Self {
        Self {
            registry,
            config,
            next_id: AtomicI64::new(1),
        }
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AdapterRegistry {
        &mut self.registry
    }

    pub fn language_code(&self) -> &str {
        &self.config.language_code
    }

    pub fn set_language_code(&mut self, code: impl Into<String>) {
        self.config.language_code = code.into();
        tracing::info!(language = %self.config.language_code, "active OCR language changed");
    }

    pub async fn supported_languages(&self) -> OverlayResult<Vec<String>> {
        self.registry.get_active()?.supported_languages().await
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Recognize a whole capture. The result holds a single full-frame region.
    pub async fn recognize_entire_screen(&self, image_bytes: Vec<u8>) -> OverlayResult<NormalizedResult> {
        let adapter = self.registry.get_active()?;
        let request = RecognitionRequest {
            id: self.allocate_id(),
            image: image_bytes,
            language_code: self.config.language_code.clone(),
        };

        let raw = adapter.recognize(request).await?;
        tracing::debug!(
            adapter = adapter.name(),
            id = raw.id,
            items = raw.results.len(),
            "full screen recognized"
        );
        Ok(normalize(&raw))
    }

    /// Recognize every target region of `template` in a capture and compose
    /// the sub-results into one result, one region per target region in
    /// template order.
    ///
    /// Regions are recognized concurrently; composition happens afterwards on
    /// this task only. A region whose crop or recognition fails is skipped.
    pub async fn recognize_template(
        &self,
        image_bytes: Vec<u8>,
        template: &OcrTemplate,
    ) -> OverlayResult<NormalizedResult> {
        let adapter = self.registry.get_active()?;
        let targets = template.target_regions.clone();

        // decode + crop + encode are CPU-bound
        let (image_size, crops) = tokio::task::spawn_blocking(move || {
            let image = image::load_from_memory(&image_bytes)?;
            let size = ImageSize::new(image.width(), image.height());
            let crops: Vec<OverlayResult<Vec<u8>>> = targets
                .iter()
                .map(|target| {
                    if target.is_rotated() {
                        tracing::debug!(
                            region = %target.id,
                            angle = target.angle,
                            "rotated target region cropped as its axis-aligned rectangle"
                        );
                    }
                    crop_region(&image, &target.to_pixels(size)).map(|c| c.image_png)
                })
                .collect();
            Ok::<_, OverlayError>((size, crops))
        })
        .await
        .map_err(|e| OverlayError::Capture(format!("join: {e}")))??;

        let aggregate_id = self.allocate_id();
        let recognitions = crops.into_iter().map(|crop| {
            let adapter = adapter.clone();
            let id = self.allocate_id();
            let language_code = self.config.language_code.clone();
            async move {
                let image = crop?;
                let raw = adapter
                    .recognize(RecognitionRequest {
                        id,
                        image,
                        language_code,
                    })
                    .await?;
                Ok::<_, OverlayError>(normalize(&raw))
            }
        });
        let outcomes = join_all(recognitions).await;

        let resolution = Resolution::new(f64::from(image_size.width), f64::from(image_size.height));
        let mut composer =
            RegionComposer::new(aggregate_id, resolution).global_scaling(self.config.global_scaling);

        for (target, outcome) in template.target_regions.iter().zip(outcomes) {
            match outcome {
                Ok(sub_result) => {
                    composer.compose(sub_result, RegionPlacement::new(target.position, target.size));
                }
                Err(e) => {
                    tracing::warn!(
                        template = %template.name,
                        region = %target.id,
                        error = %e,
                        "target region recognition failed, skipping"
                    );
                }
            }
        }

        tracing::info!(
            template = %template.name,
            id = aggregate_id,
            regions = composer.region_count(),
            "template recognized"
        );
        Ok(composer.build())
    }
}
