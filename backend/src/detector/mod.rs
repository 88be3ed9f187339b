use image::DynamicImage;
use shared::DetectionResult;

use crate::error::DetectError;

#[derive(Debug, Clone, Default)]
pub struct Detector;

impl Detector {
    pub fn new() -> Self {
        Self
    }

    // TODO: replace with real model inference once a weights format and label set exist.
    pub async fn detect(&self, _image: &DynamicImage) -> Vec<DetectionResult> {
        vec![
            DetectionResult::new("Mackerel fish", 0.95),
            DetectionResult::new("Shiitake mushroom", 0.87),
            DetectionResult::new("Cabbage", 0.92),
        ]
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, DetectError> {
    Ok(image::load_from_memory(bytes)?)
}
