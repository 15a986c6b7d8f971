use crate::error::Result;
use async_trait::async_trait;

/// Raw object as read from the image bucket.
#[derive(Debug, Clone, Default)]
pub struct StoredObject {
    pub body: Option<Vec<u8>>,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject>;
}
