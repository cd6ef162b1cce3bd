//! Error types for the palette_scan library

use thiserror::Error;

/// Result type alias for palette extraction operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for the color extraction pipeline
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input bytes are not a decodable image
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Normalized image yields zero pixels
    #[error("Image contains no pixels after normalization")]
    EmptyImage,

    /// Requested color count is outside the accepted range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Numerical failure during clustering (non-finite centroid)
    ///
    /// Should be unreachable given input validation, but kept as a
    /// distinct reportable kind rather than a panic.
    #[error("Clustering failed: {reason}")]
    Clustering { reason: String },
}

impl ExtractionError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ExtractionError::Decode { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            ExtractionError::EmptyImage => "The image contains no visible pixels.".to_string(),
            ExtractionError::InvalidParameter { parameter, value } => {
                format!("Invalid value for {}: {}", parameter, value)
            }
            ExtractionError::Clustering { .. } => {
                "Color analysis failed. Please try with a different image.".to_string()
            }
        }
    }
}
