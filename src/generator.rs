use crate::{
    bedrock::{generate_product, AwsClients, BedrockTextModel, TextModel},
    config::ServiceConfig,
    error::Result,
    models::{GenerationRequest, GenerationResult},
    prompt::{build_prompt, PromptInput},
    storage::{load_images, ImageStore, S3ImageStore},
    validation::validate,
};
use std::sync::Arc;

/// Validate, load images, build the prompt and call the model, in that order.
#[derive(Clone)]
pub struct ProductGenerator {
    config: Arc<ServiceConfig>,
    store: Arc<dyn ImageStore>,
    model: Arc<dyn TextModel>,
}

impl ProductGenerator {
    pub fn new(
        config: ServiceConfig,
        store: Arc<dyn ImageStore>,
        model: Arc<dyn TextModel>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            model,
        }
    }

    /// Generator backed by S3 and Bedrock.
    pub fn from_clients(config: ServiceConfig, clients: &AwsClients) -> Self {
        Self::new(
            config,
            Arc::new(S3ImageStore::new(clients.s3.clone())),
            Arc::new(BedrockTextModel::new(clients.bedrock.clone())),
        )
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        log::info!("Start GenerateProduct operation");

        let request = validate(request, &self.config)?;
        log::debug!(
            "Validated request: model={} temperature={} images={}",
            request.model_id,
            request.temperature,
            request.image_keys.len()
        );

        let images = load_images(self.store.as_ref(), &request.bucket, &request.image_keys)
            .await
            .map_err(|e| {
                log::error!("Failed to get images. {}", e);
                e
            })?;

        let prompt = build_prompt(&PromptInput {
            images: &images,
            language: request.language.as_deref(),
            description_length: request.description_length,
            metadata: request.metadata.as_deref(),
            examples: request.examples.as_deref(),
        });

        let result = generate_product(
            self.model.as_ref(),
            &request.model_id,
            request.temperature,
            prompt,
        )
        .await
        .map_err(|e| {
            log::error!("Failed to generate product data. {}", e);
            e
        })?;

        log::info!(
            "✅ Generated product data ({} input / {} output tokens)",
            result.usage.input_tokens,
            result.usage.output_tokens
        );
        Ok(result)
    }
}
