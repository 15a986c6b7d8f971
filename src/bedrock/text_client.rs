use crate::{
    bedrock::{Completion, CompletionRequest, TextModel},
    error::{ProductError, Result, UpstreamFailure},
    models::{
        anthropic::{
            ContentBlock, Message, MessageContent, MessagesRequest, MessagesResponse,
            ANTHROPIC_VERSION,
        },
        Usage,
    },
};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{error::ProvideErrorMetadata, primitives::Blob, Client};

#[derive(Clone)]
pub struct BedrockTextModel {
    client: Client,
}

impl BedrockTextModel {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn build_request_payload(request: &CompletionRequest) -> Result<String> {
        let mut messages = vec![Message {
            role: "user",
            content: MessageContent::Blocks(request.user.iter().map(ContentBlock::from).collect()),
        }];
        if let Some(prefill) = &request.assistant_prefill {
            messages.push(Message {
                role: "assistant",
                content: MessageContent::Text(prefill),
            });
        }

        let payload = MessagesRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages,
            stop_sequences: &request.stop_sequences,
        };

        serde_json::to_string(&payload).map_err(|e| ProductError::SerializationError(e.to_string()))
    }

    fn parse_response(bytes: &[u8]) -> Result<Completion> {
        let response: MessagesResponse = serde_json::from_slice(bytes).map_err(|e| {
            log::debug!("Unexpected model response: {}", String::from_utf8_lossy(bytes));
            ProductError::ModelOutputError(format!("Unexpected response body: {}", e))
        })?;

        let text: String = response
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text.as_deref())
            .collect();
        if response.content.is_empty() {
            return Err(ProductError::ModelOutputError(
                "Response contains no content".into(),
            ));
        }

        Ok(Completion {
            text,
            usage: Usage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            },
            stop_reason: response.stop_reason,
        })
    }
}

#[async_trait]
impl TextModel for BedrockTextModel {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        let request_json = Self::build_request_payload(&request)?;

        log::info!("Invoking model: {}", request.model_id);

        let response = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(request_json.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                log::error!("AWS SDK InvokeModel error details: {:?}", e);
                let status = e.raw_response().map(|r| r.status().as_u16());
                let failure = classify_failure(e.code(), status);
                log::error!(
                    "Service error code: {:?}, status: {:?}, mapped to {:?}",
                    e.code(),
                    status,
                    failure
                );
                ProductError::upstream(
                    failure,
                    format!(
                        "{} - {}",
                        e.code().unwrap_or("unknown"),
                        e.message().unwrap_or("no message")
                    ),
                )
            })?;

        let completion = Self::parse_response(response.body.as_ref())?;
        log::debug!(
            "Model stopped with {:?} after {} output tokens",
            completion.stop_reason,
            completion.usage.output_tokens
        );
        Ok(completion)
    }
}

/// Map a Bedrock error code, or failing that the HTTP status, to a category.
pub fn classify_failure(code: Option<&str>, status: Option<u16>) -> UpstreamFailure {
    let by_code = code.and_then(|code| match code {
        "ValidationException" | "BadRequestException" => Some(UpstreamFailure::BadRequest),
        "UnrecognizedClientException"
        | "InvalidSignatureException"
        | "IncompleteSignature"
        | "MissingAuthenticationToken"
        | "ExpiredTokenException" => Some(UpstreamFailure::Authentication),
        "AccessDeniedException" => Some(UpstreamFailure::PermissionDenied),
        "ResourceNotFoundException" => Some(UpstreamFailure::NotFound),
        "ThrottlingException" | "TooManyRequestsException" | "ServiceQuotaExceededException" => {
            Some(UpstreamFailure::RateLimited)
        }
        _ => None,
    });

    by_code.unwrap_or_else(|| match status {
        Some(400) => UpstreamFailure::BadRequest,
        Some(401) => UpstreamFailure::Authentication,
        Some(403) => UpstreamFailure::PermissionDenied,
        Some(404) => UpstreamFailure::NotFound,
        Some(422) => UpstreamFailure::UnprocessableEntity,
        Some(429) => UpstreamFailure::RateLimited,
        _ => UpstreamFailure::Other,
    })
}
