//! Renders the system prompt and user message for a validated request.
//!
//! Rendering is pure: the same inputs always produce the same prompt.

use crate::{
    models::{Base64Image, ContentPart, ProductData, Prompt},
    validation::DescriptionLength,
};

#[derive(Debug, Clone, Default)]
pub struct PromptInput<'a> {
    pub images: &'a [Base64Image],
    pub language: Option<&'a str>,
    pub description_length: Option<DescriptionLength>,
    pub metadata: Option<&'a str>,
    pub examples: Option<&'a [ProductData]>,
}

pub fn build_prompt(input: &PromptInput<'_>) -> Prompt {
    let user_text = user_instruction(input);
    log::debug!("Prompt: {}", user_text);

    let system_prompt = system_prompt(input);
    log::debug!("System Prompt: {}", system_prompt);

    let mut user_message: Vec<ContentPart> = input
        .images
        .iter()
        .cloned()
        .map(ContentPart::Image)
        .collect();
    user_message.push(ContentPart::Text(user_text));

    Prompt {
        system_prompt,
        user_message,
    }
}

fn user_instruction(input: &PromptInput<'_>) -> String {
    let length_clause = input
        .description_length
        .map(|length| format!("with {} ", length.paragraph_count()))
        .unwrap_or_default();
    let examples_clause = if input.examples.is_some() {
        "following the language, style, and tone provided in <examples> "
    } else {
        ""
    };
    let language_clause = input
        .language
        .map(|language| format!("in {} ", language))
        .unwrap_or_default();
    let subject = if input.images.len() > 1 {
        "images"
    } else {
        "image"
    };
    let metadata_clause = if input.metadata.is_some() {
        " and metadata in <metadata>"
    } else {
        ""
    };

    let mut text = format!(
        "Please create a title and a description {}{}{} for the product shown in the {}{}.",
        length_clause, examples_clause, language_clause, subject, metadata_clause
    );
    if let Some(metadata) = input.metadata.filter(|m| !m.is_empty()) {
        text.push_str(&format!("\n\n<metadata>{}</metadata>", metadata));
    }
    text
}

fn format_examples(examples: &[ProductData]) -> String {
    examples
        .iter()
        .map(|example| {
            format!(
                "<product>\n<title>{}</title>\n<description>{}</description>\n</product>",
                example.title, example.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn system_prompt(input: &PromptInput<'_>) -> String {
    let paragraph_count = input
        .description_length
        .map(|length| length.paragraph_count())
        .unwrap_or("");

    let mut prompt = String::new();
    if let Some(examples) = input.examples {
        prompt.push_str(&format!(
            "<examples>\n{}</examples>\n\n",
            format_examples(examples)
        ));
    }

    prompt.push_str(
        "You are responsible for creating enticing and informative titles and descriptions for products on an e-commerce site. \
The products are targeted towards a general consumer audience and cover a wide range of categories, such as electronics, home goods, and apparel.\n\
\n  Output Format:\
\n  Please respond in the following XML format:\
\n  \
\n  <product>\
\n      <title>Concise, engaging title (up to 60 characters)</title>\n",
    );
    prompt.push_str(&format!(
        "      <description>Informative description {} highlighting key features, benefits, and use cases. \
Multiple paragraphs are separated by newline characters.</description>\n",
        paragraph_count
    ));
    prompt.push_str(
        "  </product>\
\n  \
\n  Guidelines:\
\n  - Title: Keep it short, clear, and attention-grabbing\
\n  - Description: Emphasize the most important details about the product",
    );

    if input.examples.is_some() {
        prompt.push_str("\n  - Use the language, style, and tone demonstrated in <examples>");
    } else {
        prompt.push_str("\n  - Tone: Friendly and conversational, tailored to the target audience");
    }
    if input.description_length.is_some() {
        prompt.push_str(&format!("\n  - Description length: {}", paragraph_count));
    }

    prompt.push_str(
        "\n  - Any additional metadata or constraints will be provided in <metadata> tags\
\n  - Respond in the above XML format with exactly one <product> that contains exactly one <title> and exactly one <description>. \
<title> and <description> contain only strings and no other tags.\n",
    );
    prompt
}
