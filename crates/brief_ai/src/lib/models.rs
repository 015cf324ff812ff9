//! Process-wide model handles.
//!
//! The inference client is built once, on first use, and lives until the process exits.

use std::sync::OnceLock;

use crate::huggingface::{HuggingFaceClient, ModelIds};

static INFERENCE_CLIENT: OnceLock<HuggingFaceClient> = OnceLock::new();

/// Where and with which models inference runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub models: ModelIds,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: HuggingFaceClient::BASE_URL.into(),
            api_token: None,
            models: ModelIds::default(),
        }
    }
}

impl InferenceConfig {
    pub fn build_client(&self) -> HuggingFaceClient {
        HuggingFaceClient::new(self.api_token.clone())
            .with_base_url(&self.base_url)
            .with_models(self.models.clone())
    }
}

/// Returns the shared inference client, building it from `config` on the first call.
/// Later calls return the same client and ignore their `config`.
pub fn inference_client(config: &InferenceConfig) -> &'static HuggingFaceClient {
    INFERENCE_CLIENT.get_or_init(|| {
        tracing::info!(
            base_url = %config.base_url,
            summarizer = %config.models.summarizer,
            sentiment = %config.models.sentiment,
            punctuation = %config.models.punctuation,
            "Initialising inference client"
        );
        config.build_client()
    })
}
