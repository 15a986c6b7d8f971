//! Wire types for Anthropic messages on Bedrock `InvokeModel`.

use serde::{Deserialize, Serialize};

use super::prompt::ContentPart;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub anthropic_version: &'static str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub system: &'a str,
    pub messages: Vec<Message<'a>>,
    pub stop_sequences: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'static str,
    pub content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent<'a> {
    Text(&'a str),
    Blocks(Vec<ContentBlock<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock<'a> {
    Image { source: ImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
pub struct ImageSource<'a> {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub media_type: &'static str,
    pub data: &'a str,
}

impl<'a> From<&'a ContentPart> for ContentBlock<'a> {
    fn from(part: &'a ContentPart) -> Self {
        match part {
            ContentPart::Image(image) => ContentBlock::Image {
                source: ImageSource {
                    source_type: "base64",
                    media_type: image.content_type.as_str(),
                    data: image.data.as_str(),
                },
            },
            ContentPart::Text(text) => ContentBlock::Text { text: text.as_str() },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ResponseBlock>,
    pub usage: ResponseUsage,
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Base64Image, ImageContentType};
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let parts = vec![
            ContentPart::Image(Base64Image {
                data: "aGVsbG8=".into(),
                content_type: ImageContentType::Png,
            }),
            ContentPart::Text("Describe it".into()),
        ];
        let stops = vec!["</product>".to_string()];
        let request = MessagesRequest {
            anthropic_version: ANTHROPIC_VERSION,
            max_tokens: 1024,
            temperature: 0.5,
            system: "be brief",
            messages: vec![
                Message {
                    role: "user",
                    content: MessageContent::Blocks(parts.iter().map(ContentBlock::from).collect()),
                },
                Message {
                    role: "assistant",
                    content: MessageContent::Text("<product>"),
                },
            ],
            stop_sequences: &stops,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 1024,
                "temperature": 0.5,
                "system": "be brief",
                "messages": [
                    {"role": "user", "content": [
                        {"type": "image", "source": {"type": "base64", "media_type": "image/png", "data": "aGVsbG8="}},
                        {"type": "text", "text": "Describe it"}
                    ]},
                    {"role": "assistant", "content": "<product>"}
                ],
                "stop_sequences": ["</product>"]
            })
        );
    }

    #[test]
    fn test_response_body() {
        let response: MessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [{"type": "text", "text": "<title>Mug</title>"}],
            "stop_reason": "stop_sequence",
            "stop_sequence": "</product>",
            "usage": {"input_tokens": 1510, "output_tokens": 42}
        }))
        .unwrap();

        assert_eq!(response.content[0].text.as_deref(), Some("<title>Mug</title>"));
        assert_eq!(response.usage.input_tokens, 1510);
        assert_eq!(response.stop_reason.as_deref(), Some("stop_sequence"));
    }
}
