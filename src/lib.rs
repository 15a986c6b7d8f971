pub mod bedrock;
pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod server;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod testing;

pub use bedrock::{AwsClients, BedrockTextModel, Completion, CompletionRequest, TextModel};
pub use config::{AwsSettings, ServiceConfig};
pub use error::{ErrorKind, ProductError, Result, UpstreamFailure};
pub use generator::ProductGenerator;
pub use models::*;
pub use storage::{ImageStore, S3ImageStore, StoredObject};
