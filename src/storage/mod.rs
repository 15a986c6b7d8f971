pub mod s3;
pub mod traits;

use crate::{
    error::{ProductError, Result},
    models::{Base64Image, ImageContentType},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::join_all;

pub use s3::S3ImageStore;
pub use traits::{ImageStore, StoredObject};

/// Fetch every key concurrently and encode the bodies for the prompt.
///
/// Output order follows `keys`. When several reads fail, the error of the
/// earliest key is returned.
pub async fn load_images(
    store: &dyn ImageStore,
    bucket: &str,
    keys: &[String],
) -> Result<Vec<Base64Image>> {
    let reads = keys.iter().map(|key| async move {
        let object = store.get_object(bucket, key).await?;
        to_base64_image(key, object)
    });

    join_all(reads).await.into_iter().collect()
}

fn to_base64_image(key: &str, object: StoredObject) -> Result<Base64Image> {
    let invalid = |reason: &str| ProductError::InvalidImage {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let body = object
        .body
        .filter(|body| !body.is_empty())
        .ok_or_else(|| invalid("has no body!"))?;
    let content_type = object
        .content_type
        .ok_or_else(|| invalid("has no content type!"))?;
    let content_type = ImageContentType::parse(&content_type)
        .ok_or_else(|| invalid("has an invalid content type!"))?;

    Ok(Base64Image {
        data: STANDARD.encode(body),
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MemoryImageStore;
    use std::time::Duration;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_loads_in_input_order() {
        let store = MemoryImageStore::new()
            .with_image("front.jpg", "image/jpeg", b"front")
            .with_image("side.webp", "image/webp", b"side")
            .with_delay("front.jpg", Duration::from_millis(30));

        let images = load_images(&store, "bucket", &keys(&["front.jpg", "side.webp"]))
            .await
            .unwrap();

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].data, STANDARD.encode(b"front"));
        assert_eq!(images[0].content_type, ImageContentType::Jpeg);
        assert_eq!(images[1].content_type, ImageContentType::Webp);
        assert_eq!(store.requested_buckets(), vec!["bucket", "bucket"]);
    }

    #[tokio::test]
    async fn test_invalid_content_type_names_key() {
        let store = MemoryImageStore::new()
            .with_image("a.jpg", "image/jpeg", b"a")
            .with_image("b.bmp", "image/bmp", b"b")
            .with_image("c.png", "image/png", b"c");

        let err = load_images(&store, "bucket", &keys(&["a.jpg", "b.bmp", "c.png"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert_eq!(err.public_message(), "Image b.bmp has an invalid content type!");
    }

    #[tokio::test]
    async fn test_earliest_failure_wins() {
        let store = MemoryImageStore::new()
            .with_object("slow.jpg", None, Some(b"x".to_vec()))
            .with_object("fast.jpg", Some("image/jpeg"), None)
            .with_delay("slow.jpg", Duration::from_millis(30));

        let err = load_images(&store, "bucket", &keys(&["slow.jpg", "fast.jpg"]))
            .await
            .unwrap_err();

        assert_eq!(err.public_message(), "Image slow.jpg has no content type!");
    }

    #[tokio::test]
    async fn test_empty_body_rejected() {
        let store = MemoryImageStore::new().with_object("empty.png", Some("image/png"), Some(vec![]));

        let err = load_images(&store, "bucket", &keys(&["empty.png"]))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Image empty.png has no body!");
    }

    #[tokio::test]
    async fn test_missing_object_is_storage_error() {
        let store = MemoryImageStore::new();

        let err = load_images(&store, "bucket", &keys(&["gone.jpg"]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalFailure);
        assert_eq!(err.public_message(), "Failed to get images");
    }
}
