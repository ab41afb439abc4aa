use serde::{Deserialize, Serialize};

use crate::errors::{OverlayError, OverlayResult};
use crate::geometry::{FractionalPosition, FractionalSize};
use crate::template::target_region::{generate_id, TargetRegionInput, TargetRegionTemplate};

/// A named set of target regions. Recognition against a template captures
/// each region separately and composes the results in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub target_regions: Vec<TargetRegionTemplate>,
}

impl OcrTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            target_regions: Vec::new(),
        }
    }

    /// Add a region owned by this template. Returns the new region's id.
    pub fn add_target_region(
        &mut self,
        position: FractionalPosition,
        size: FractionalSize,
        angle: f64,
    ) -> String {
        let region = TargetRegionTemplate::create(TargetRegionInput {
            id: None,
            ocr_template_id: self.id.clone(),
            position,
            size,
            angle: Some(angle),
        });
        let id = region.id.clone();
        self.target_regions.push(region);
        id
    }

    pub fn remove_target_region(&mut self, region_id: &str) -> OverlayResult<TargetRegionTemplate> {
        let idx = self
            .target_regions
            .iter()
            .position(|r| r.id == region_id)
            .ok_or_else(|| {
                OverlayError::Template(format!(
                    "target region '{region_id}' not found in template '{}'",
                    self.name
                ))
            })?;
        Ok(self.target_regions.remove(idx))
    }

    pub fn target_region(&self, region_id: &str) -> Option<&TargetRegionTemplate> {
        self.target_regions.iter().find(|r| r.id == region_id)
    }

    pub fn from_json(payload: &str) -> OverlayResult<Self> {
        let template: Self = serde_json::from_str(payload)?;
        if let Some(stray) = template
            .target_regions
            .iter()
            .find(|r| r.ocr_template_id != template.id)
        {
            return Err(OverlayError::Template(format!(
                "target region '{}' belongs to template '{}', not '{}'",
                stray.id, stray.ocr_template_id, template.id
            )));
        }
        Ok(template)
    }
}
