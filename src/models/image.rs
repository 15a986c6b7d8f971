use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageContentType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageContentType {
    /// Exact, case-sensitive match against the accepted media types.
    pub fn parse(content_type: &str) -> Option<Self> {
        match content_type {
            "image/jpeg" => Some(ImageContentType::Jpeg),
            "image/png" => Some(ImageContentType::Png),
            "image/gif" => Some(ImageContentType::Gif),
            "image/webp" => Some(ImageContentType::Webp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageContentType::Jpeg => "image/jpeg",
            ImageContentType::Png => "image/png",
            ImageContentType::Gif => "image/gif",
            ImageContentType::Webp => "image/webp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Image {
    pub data: String,
    pub content_type: ImageContentType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_type() {
        assert_eq!(ImageContentType::parse("image/webp"), Some(ImageContentType::Webp));
        assert_eq!(ImageContentType::parse("image/JPEG"), None);
        assert_eq!(ImageContentType::parse("image/bmp"), None);
        assert_eq!(ImageContentType::Gif.as_str(), "image/gif");
    }
}
