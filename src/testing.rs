//! In-memory collaborators for unit tests.

use crate::{
    bedrock::{Completion, CompletionRequest, TextModel},
    error::{ProductError, Result},
    models::Usage,
    storage::{ImageStore, StoredObject},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct MemoryImageStore {
    objects: HashMap<String, StoredObject>,
    delays: HashMap<String, Duration>,
    buckets: Mutex<Vec<String>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(self, key: &str, content_type: &str, body: &[u8]) -> Self {
        self.with_object(key, Some(content_type), Some(body.to_vec()))
    }

    pub fn with_object(
        mut self,
        key: &str,
        content_type: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Self {
        self.objects.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.map(String::from),
            },
        );
        self
    }

    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn requested_buckets(&self) -> Vec<String> {
        self.buckets.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject> {
        self.buckets.lock().unwrap().push(bucket.to_string());
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        self.objects
            .get(key)
            .cloned()
            .ok_or_else(|| ProductError::StorageError(format!("NoSuchKey: {}", key)))
    }
}

/// Replies with a fixed completion, or a fixed error, and records requests.
pub struct ScriptedModel {
    reply: std::result::Result<String, fn() -> ProductError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> ProductError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                usage: Usage {
                    input_tokens: 1500,
                    output_tokens: 120,
                },
                stop_reason: Some("stop_sequence".to_string()),
            }),
            Err(error) => Err(error()),
        }
    }
}
