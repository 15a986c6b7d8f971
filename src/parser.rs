use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;

use crate::{
    error::{ProductError, Result},
    models::ProductData,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
}

/// Parse `<product><title>..</title><description>..</description></product>`.
///
/// Anything else, including plain text or a product missing either field, is
/// a model output error.
pub fn parse_product_xml(xml: &str) -> Result<ProductData> {
    parse(xml).map_err(|reason| {
        log::debug!("Error parsing product XML ({}): {}", reason, xml);
        ProductError::ModelOutputError(reason)
    })
}

fn parse(xml: &str) -> std::result::Result<ProductData, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut in_product = false;
    let mut seen_product = false;
    let mut field: Option<Field> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(tag) => {
                depth += 1;
                match (depth, tag.name().as_ref()) {
                    (1, b"product") if !seen_product => {
                        in_product = true;
                        seen_product = true;
                    }
                    (2, b"title") if in_product => {
                        field = Some(Field::Title);
                        title.get_or_insert_with(String::new);
                    }
                    (2, b"description") if in_product => {
                        field = Some(Field::Description);
                        description.get_or_insert_with(String::new);
                    }
                    _ => field = None,
                }
            }
            Event::Empty(tag) if depth == 1 && in_product => match tag.name().as_ref() {
                b"title" => {
                    title.get_or_insert_with(String::new);
                }
                b"description" => {
                    description.get_or_insert_with(String::new);
                }
                _ => {}
            },
            Event::End(_) => {
                if depth == 1 {
                    in_product = false;
                }
                depth = depth.saturating_sub(1);
                field = None;
            }
            Event::Text(text) => {
                // Models emit bare `&` in titles; keep the raw text when it is not a valid reference.
                let value = text
                    .unescape()
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                append(field, &value, &mut title, &mut description);
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append(field, &value, &mut title, &mut description);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_product {
        return Err("no <product> element".into());
    }
    match (title, description) {
        (Some(title), Some(description)) => Ok(ProductData { title, description }),
        (None, _) => Err("<product> has no <title>".into()),
        (_, None) => Err("<product> has no <description>".into()),
    }
}

fn append(
    field: Option<Field>,
    value: &str,
    title: &mut Option<String>,
    description: &mut Option<String>,
) {
    let target = match field {
        Some(Field::Title) => title,
        Some(Field::Description) => description,
        None => return,
    };
    if let Some(existing) = target {
        existing.push_str(value);
    }
}
