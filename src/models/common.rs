use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub max_tokens: usize,
    pub description: String,
}

impl ModelInfo {
    fn anthropic(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: "Anthropic".to_string(),
            max_tokens: 4096,
            description: description.to_string(),
        }
    }
}

/// Models the service is deployed with access to.
pub fn supported_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo::anthropic(
            "anthropic.claude-3-haiku-20240307-v1:0",
            "Anthropic Claude 3 Haiku",
            "Fastest and most compact Claude 3 model, the default",
        ),
        ModelInfo::anthropic(
            "anthropic.claude-3-sonnet-20240229-v1:0",
            "Anthropic Claude 3 Sonnet",
            "Balanced speed and quality",
        ),
        ModelInfo::anthropic(
            "anthropic.claude-3-opus-20240229-v1:0",
            "Anthropic Claude 3 Opus",
            "Highest quality, slowest and most expensive",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MODEL_ID;

    #[test]
    fn test_default_model_is_supported() {
        let models = supported_models();
        assert_eq!(models.len(), 3);
        assert_eq!(models[0].id, DEFAULT_MODEL_ID);
        assert!(models.iter().all(|m| m.provider == "Anthropic"));
    }
}
