use crate::{
    config::{ServiceConfig, DEFAULT_TEMPERATURE},
    error::{ProductError, Result},
    models::{GenerationRequest, ProductData},
};

pub const MAX_IMAGES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionLength {
    Short,
    Medium,
    Long,
}

impl DescriptionLength {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "short" => Ok(DescriptionLength::Short),
            "medium" => Ok(DescriptionLength::Medium),
            "long" => Ok(DescriptionLength::Long),
            other => Err(ProductError::InvalidRequest(format!(
                "Invalid description length: {}",
                other
            ))),
        }
    }

    pub fn paragraph_count(&self) -> &'static str {
        match self {
            DescriptionLength::Short => "one paragraph",
            DescriptionLength::Medium => "three paragraphs",
            DescriptionLength::Long => "five paragraphs",
        }
    }
}

/// A request with every default applied and every field checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub bucket: String,
    pub model_id: String,
    pub temperature: f32,
    pub image_keys: Vec<String>,
    pub language: Option<String>,
    pub description_length: Option<DescriptionLength>,
    pub metadata: Option<String>,
    pub examples: Option<Vec<ProductData>>,
}

pub fn validate(request: GenerationRequest, config: &ServiceConfig) -> Result<ValidatedRequest> {
    let bucket = config.image_bucket.clone().ok_or_else(|| {
        log::error!("IMAGE_BUCKET environment variable not set!");
        ProductError::ConfigError("IMAGE_BUCKET not set".into())
    })?;

    let model_id = request
        .model
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| config.default_model.clone());
    if model_id.trim().is_empty() {
        log::error!("No model id configured");
        return Err(ProductError::ConfigError("default model not set".into()));
    }

    let temperature = request
        .temperature
        .unwrap_or(f64::from(DEFAULT_TEMPERATURE));
    if !temperature.is_finite() || !(0.0..=1.0).contains(&temperature) {
        return Err(ProductError::InvalidRequest(
            "Temperature must be between 0 and 1".into(),
        ));
    }

    let description_length = request
        .description_length
        .as_deref()
        .map(DescriptionLength::parse)
        .transpose()?;

    if request.product_images.is_empty() || request.product_images.len() > MAX_IMAGES {
        return Err(ProductError::InvalidRequest(format!(
            "Between 1 and {} product images are required",
            MAX_IMAGES
        )));
    }

    Ok(ValidatedRequest {
        bucket,
        model_id,
        // Checked in full precision, narrowed for the model request.
        temperature: temperature as f32,
        image_keys: request.product_images,
        language: request.language.filter(|l| !l.is_empty()),
        description_length,
        metadata: request.metadata,
        examples: request.examples.filter(|e| !e.is_empty()),
    })
}
