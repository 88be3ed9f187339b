use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;
use log::{debug, warn};
use shared::{DetectionResponse, DetectionResult};

use crate::detector::{decode_image, Detector};
use crate::error::DetectError;

const FILE_FIELD: &str = "file";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/detect").route(web::post().to(detect_ingredients)));
}

// Credentials are allowed, so actix-cors echoes the caller's Origin instead of `*`.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

async fn detect_ingredients(detector: web::Data<Detector>, payload: Multipart) -> HttpResponse {
    let response = match run_detection(&detector, payload).await {
        Ok(ingredients) => {
            debug!("Detected {} ingredients", ingredients.len());
            DetectionResponse::success(ingredients)
        }
        Err(e) => {
            warn!("Ingredient detection failed: {}", e);
            DetectionResponse::failure(e.to_string())
        }
    };

    HttpResponse::Ok().json(response)
}

async fn run_detection(
    detector: &Detector,
    payload: Multipart,
) -> Result<Vec<DetectionResult>, DetectError> {
    let contents = read_upload(payload).await?;
    let image = decode_image(&contents)?;
    Ok(detector.detect(&image).await)
}

async fn read_upload(mut payload: Multipart) -> Result<Vec<u8>, DetectError> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        let wanted = upload.is_none() && field.name() == Some(FILE_FIELD);
        let mut data = Vec::new();
        // Other fields still have to be drained before the next one is readable.
        while let Some(chunk) = field.try_next().await? {
            if wanted {
                data.extend_from_slice(&chunk);
            }
        }
        if wanted {
            upload = Some(data);
        }
    }

    upload.ok_or(DetectError::MissingFile(FILE_FIELD))
}
