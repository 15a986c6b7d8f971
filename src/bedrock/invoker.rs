use crate::{
    bedrock::{CompletionRequest, TextModel},
    error::Result,
    logger,
    models::{GenerationResult, Prompt},
    parser::parse_product_xml,
};

pub const MAX_OUTPUT_TOKENS: u32 = 1024;
pub const OPEN_TAG: &str = "<product>";
pub const CLOSE_TAG: &str = "</product>";

/// Ask the model for a title and description and parse its reply.
///
/// The reply is primed with `<product>` and stopped at `</product>`, so
/// neither delimiter comes back and both are restored before parsing.
pub async fn generate_product(
    model: &dyn TextModel,
    model_id: &str,
    temperature: f32,
    prompt: Prompt,
) -> Result<GenerationResult> {
    let request = CompletionRequest {
        model_id: model_id.to_string(),
        system: prompt.system_prompt,
        user: prompt.user_message,
        assistant_prefill: Some(OPEN_TAG.to_string()),
        max_tokens: MAX_OUTPUT_TOKENS,
        temperature,
        stop_sequences: vec![CLOSE_TAG.to_string()],
    };

    let completion = {
        let _timer = logger::timer("model invocation");
        model.complete(request).await?
    };
    log::debug!("Response: {}", completion.text);

    let product_xml = format!("{}{}{}", OPEN_TAG, completion.text, CLOSE_TAG);
    let product_data = parse_product_xml(&product_xml)?;

    Ok(GenerationResult {
        product_data,
        usage: completion.usage,
    })
}
