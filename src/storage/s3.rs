use crate::{
    error::{ProductError, Result},
    storage::traits::{ImageStore, StoredObject},
};
use async_trait::async_trait;
use aws_sdk_s3::{error::ProvideErrorMetadata, Client};

#[derive(Clone)]
pub struct S3ImageStore {
    client: Client,
}

impl S3ImageStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                log::error!("S3 GetObject error for {}: {:?}", key, e);
                ProductError::StorageError(format!(
                    "GetObject {} failed: {} - {}",
                    key,
                    e.code().unwrap_or("unknown"),
                    e.message().unwrap_or("no message")
                ))
            })?;

        log::debug!(
            "Got {} with type {:?} and size {:?}",
            key,
            output.content_type(),
            output.content_length()
        );

        let content_type = output.content_type().map(String::from);
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| ProductError::StorageError(format!("Reading {} failed: {}", key, e)))?
            .into_bytes();

        Ok(StoredObject {
            body: (!bytes.is_empty()).then(|| bytes.to_vec()),
            content_type,
        })
    }
}
