use std::path::PathBuf;

use latchhook_core::{LatchHookError, ParseColorError, RasterError};
use thiserror::Error;

/// Failures at the image file boundary.
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Decoded image is unusable: {0}")]
    Raster(#[from] RasterError),

    #[error("Too many colors for an indexed PNG: {count} (max 256)")]
    TooManyColors { count: usize },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading or interpreting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("Invalid color for {key}: {source}")]
    InvalidColor {
        key: &'static str,
        #[source]
        source: ParseColorError,
    },
}

/// Anything that can abort a diagram run.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image error: {0}")]
    Image(#[from] ImageIoError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] LatchHookError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_colors() {
        let error = ImageIoError::TooManyColors { count: 300 };
        assert_eq!(
            error.to_string(),
            "Too many colors for an indexed PNG: 300 (max 256)"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let error = ImageIoError::Io {
            path: PathBuf::from("missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "IO error on missing.png: not found");
    }

    #[test]
    fn test_invalid_value() {
        let error = ConfigError::InvalidValue {
            key: "strategy",
            message: "unknown strategy 'fast'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for strategy: unknown strategy 'fast'"
        );
    }

    #[test]
    fn test_service_error_from_pipeline() {
        let error: ServiceError = LatchHookError::ZeroPaletteSize.into();
        match error {
            ServiceError::Pipeline(_) => {}
            _ => panic!("Expected Pipeline variant"),
        }
    }

    #[test]
    fn test_service_error_from_image() {
        let error: ServiceError = ImageIoError::TooManyColors { count: 257 }.into();
        assert_eq!(
            error.to_string(),
            "Image error: Too many colors for an indexed PNG: 257 (max 256)"
        );
    }
}
