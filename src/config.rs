use std::env;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl AwsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok();
        let access_key = env::var("AWS_ACCESS_KEY_ID").ok();
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY").ok();

        AwsSettings {
            region,
            access_key,
            secret_key,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn has_static_credentials(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: Option<u16>,
    /// Bucket holding the uploaded product images. Checked per request.
    pub image_bucket: Option<String>,
    pub default_model: String,
    pub aws: AwsSettings,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            port: None,
            image_bucket: None,
            default_model: DEFAULT_MODEL_ID.to_string(),
            aws: AwsSettings::default(),
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let image_bucket = env::var("IMAGE_BUCKET").ok().filter(|b| !b.is_empty());
        let default_model = env::var("DEFAULT_MODEL_ID")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        ServiceConfig {
            port,
            image_bucket,
            default_model,
            aws: AwsSettings::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_image_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.image_bucket = Some(bucket.into());
        self
    }

    pub fn with_default_model(mut self, model_id: impl Into<String>) -> Self {
        self.default_model = model_id.into();
        self
    }

    pub fn with_aws(mut self, aws: AwsSettings) -> Self {
        self.aws = aws;
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}
