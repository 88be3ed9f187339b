use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectionResult {
    pub name: String,
    pub confidence: f32,
}

impl DetectionResult {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetectionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_ingredients: Option<Vec<DetectionResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResponse {
    pub fn success(detected_ingredients: Vec<DetectionResult>) -> Self {
        Self {
            success: true,
            detected_ingredients: Some(detected_ingredients),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            detected_ingredients: None,
            error: Some(error.into()),
        }
    }
}
