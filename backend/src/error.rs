use actix_multipart::MultipartError;
use image::ImageError;

/// Anything that can go wrong between receiving an upload and producing
/// detections. Clients only ever see the rendered message.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("Failed to read upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("No file field named '{0}' in upload")]
    MissingFile(&'static str),
    #[error("{0}")]
    Decode(#[from] ImageError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
