pub mod invoker;
pub mod text_client;

use crate::{config::AwsSettings, error::Result, models::ContentPart, models::Usage};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_bedrockruntime::config::{Credentials, Region};

pub use invoker::generate_product;
pub use text_client::BedrockTextModel;

/// One chat turn for the model: a system prompt, the user content and an
/// optional assistant prefix the reply continues from.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model_id: String,
    pub system: String,
    pub user: Vec<ContentPart>,
    pub assistant_prefill: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub stop_sequences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: Usage,
    pub stop_reason: Option<String>,
}

#[async_trait]
pub trait TextModel: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion>;
}

/// SDK clients sharing one loaded AWS configuration.
#[derive(Clone)]
pub struct AwsClients {
    pub bedrock: aws_sdk_bedrockruntime::Client,
    pub s3: aws_sdk_s3::Client,
}

impl AwsClients {
    pub async fn new(settings: &AwsSettings) -> Self {
        let aws_config = load_sdk_config(settings).await;

        Self {
            bedrock: aws_sdk_bedrockruntime::Client::new(&aws_config),
            s3: aws_sdk_s3::Client::new(&aws_config),
        }
    }
}

async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    if let (Some(access_key), Some(secret_key)) = (&settings.access_key, &settings.secret_key) {
        log::info!("Using static AWS credentials from the environment");
        aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "product-describer",
            ))
            .region(Region::new(
                settings
                    .region
                    .clone()
                    .unwrap_or_else(|| "us-east-1".to_string()),
            ))
            .load()
            .await
    } else {
        log::info!("Using the default AWS credential chain");
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        loader.load().await
    }
}
