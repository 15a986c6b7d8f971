use super::image::Base64Image;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    Image(Base64Image),
    Text(String),
}

/// System instruction plus the user turn, rendered fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_prompt: String,
    pub user_message: Vec<ContentPart>,
}

impl Prompt {
    /// The instruction text part of the user message.
    pub fn user_text(&self) -> Option<&str> {
        self.user_message.iter().find_map(|part| match part {
            ContentPart::Text(text) => Some(text.as_str()),
            ContentPart::Image(_) => None,
        })
    }
}
