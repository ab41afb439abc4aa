/// Region crop: cut the pixels of a projected target region out of a capture
/// and encode them for the recognition engine.
use image::DynamicImage;

use crate::errors::{OverlayError, OverlayResult};
use crate::template::PixelRegion;

pub struct RegionCrop {
    /// PNG bytes of the cropped region.
    pub image_png: Vec<u8>,
    /// Top-left corner of the crop in the source image.
    pub origin_x: u32,
    pub origin_y: u32,
    pub crop_w: u32,
    pub crop_h: u32,
}

/// Crop `region` from `image`, clamped to the image bounds.
///
/// The rectangle is taken axis-aligned; `region.angle` is not applied.
pub fn crop_region(image: &DynamicImage, region: &PixelRegion) -> OverlayResult<RegionCrop> {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));

    let x1 = region.position.left.clamp(0, w);
    let y1 = region.position.top.clamp(0, h);
    let x2 = region
        .position
        .left
        .saturating_add(region.size.width)
        .clamp(0, w);
    let y2 = region
        .position
        .top
        .saturating_add(region.size.height)
        .clamp(0, h);

    if x2 <= x1 || y2 <= y1 {
        return Err(OverlayError::Capture(format!(
            "zero-size crop for target region '{}'",
            region.id
        )));
    }

    // clamped to the u32 image dimensions above
    let (cx, cy) = (x1 as u32, y1 as u32);
    let (cw, ch) = ((x2 - x1) as u32, (y2 - y1) as u32);

    let cropped = image.crop_imm(cx, cy, cw, ch);

    let mut png_bytes = Vec::new();
    cropped.write_to(
        &mut std::io::Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )?;

    Ok(RegionCrop {
        image_png: png_bytes,
        origin_x: cx,
        origin_y: cy,
        crop_w: cw,
        crop_h: ch,
    })
}
