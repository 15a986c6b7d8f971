use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub title: String,
    pub description: String,
}

/// Body of a generation request as sent by the website.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub product_images: Vec<String>,
    pub language: Option<String>,
    pub metadata: Option<String>,
    /// Kept as text so unknown values are reported by validation.
    pub description_length: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub examples: Option<Vec<ProductData>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub product_data: ProductData,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub title: String,
    pub description: String,
    pub usage: Usage,
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            title: result.product_data.title,
            description: result.product_data.description,
            usage: result.usage,
        }
    }
}
