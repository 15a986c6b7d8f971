use thiserror::Error;

/// Caller-visible outcome of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotAuthorized,
    NotFound,
    InternalFailure,
}

/// Failure categories reported by the model provider. Only the Bedrock
/// adapter constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    BadRequest,
    Authentication,
    PermissionDenied,
    NotFound,
    UnprocessableEntity,
    RateLimited,
    Other,
}

impl UpstreamFailure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UpstreamFailure::BadRequest | UpstreamFailure::UnprocessableEntity => {
                ErrorKind::BadRequest
            }
            UpstreamFailure::Authentication | UpstreamFailure::PermissionDenied => {
                ErrorKind::NotAuthorized
            }
            UpstreamFailure::NotFound => ErrorKind::NotFound,
            // Throttling is reported as a server fault, not a retry hint.
            UpstreamFailure::RateLimited | UpstreamFailure::Other => ErrorKind::InternalFailure,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            UpstreamFailure::BadRequest => "Bad request",
            UpstreamFailure::Authentication => "Unauthorized",
            UpstreamFailure::PermissionDenied => "Forbidden",
            UpstreamFailure::NotFound => "Not Found",
            UpstreamFailure::UnprocessableEntity => "Unprocessable content",
            UpstreamFailure::RateLimited => "Bedrock rate limit exceeded",
            UpstreamFailure::Other => "Internal server error",
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Image {key} {reason}")]
    InvalidImage { key: String, reason: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Model invocation failed ({failure:?}): {detail}")]
    UpstreamError {
        failure: UpstreamFailure,
        detail: String,
    },

    #[error("Model output error: {0}")]
    ModelOutputError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ProductError {
    pub fn upstream(failure: UpstreamFailure, detail: impl Into<String>) -> Self {
        ProductError::UpstreamError {
            failure,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProductError::InvalidRequest(_) | ProductError::InvalidImage { .. } => {
                ErrorKind::BadRequest
            }
            ProductError::UpstreamError { failure, .. } => failure.kind(),
            ProductError::StorageError(_)
            | ProductError::ModelOutputError(_)
            | ProductError::ConfigError(_)
            | ProductError::SerializationError(_) => ErrorKind::InternalFailure,
        }
    }

    /// Short message safe to hand back to the caller. Details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ProductError::InvalidRequest(msg) => msg.clone(),
            ProductError::InvalidImage { .. } => self.to_string(),
            ProductError::StorageError(_) => "Failed to get images".to_string(),
            ProductError::UpstreamError { failure, .. } => failure.message().to_string(),
            ProductError::ModelOutputError(_) => "Model output error".to_string(),
            ProductError::ConfigError(_) => "Internal server error".to_string(),
            ProductError::SerializationError(_) => "Failed to generate product data".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProductError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_mapping() {
        let cases = [
            (UpstreamFailure::BadRequest, ErrorKind::BadRequest, "Bad request"),
            (UpstreamFailure::Authentication, ErrorKind::NotAuthorized, "Unauthorized"),
            (UpstreamFailure::PermissionDenied, ErrorKind::NotAuthorized, "Forbidden"),
            (UpstreamFailure::NotFound, ErrorKind::NotFound, "Not Found"),
            (
                UpstreamFailure::UnprocessableEntity,
                ErrorKind::BadRequest,
                "Unprocessable content",
            ),
            (
                UpstreamFailure::RateLimited,
                ErrorKind::InternalFailure,
                "Bedrock rate limit exceeded",
            ),
            (UpstreamFailure::Other, ErrorKind::InternalFailure, "Internal server error"),
        ];

        for (failure, kind, message) in cases {
            let err = ProductError::upstream(failure, "ThrottlingException: slow down");
            assert_eq!(err.kind(), kind);
            assert_eq!(err.public_message(), message);
        }
    }

    #[test]
    fn test_public_message_hides_details() {
        let err = ProductError::ConfigError("IMAGE_BUCKET not set".into());
        assert_eq!(err.kind(), ErrorKind::InternalFailure);
        assert_eq!(err.public_message(), "Internal server error");

        let err = ProductError::ModelOutputError("<product>oops".into());
        assert_eq!(err.public_message(), "Model output error");
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_invalid_image_names_key() {
        let err = ProductError::InvalidImage {
            key: "uploads/shoe.bmp".into(),
            reason: "has an invalid content type!".into(),
        };
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(
            err.public_message(),
            "Image uploads/shoe.bmp has an invalid content type!"
        );
    }
}
