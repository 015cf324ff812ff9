use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    llm::punctuator::{insert_marks, strip_sentence_punctuation, word_end_marks},
    types::UnknownLabel,
    GenerationParams, PunctuationRestorer, SentimentClassifier, SentimentResult, Summarizer,
    SummaryResponse,
};

/// Client for the Hugging Face inference API, one model per capability
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    models: ModelIds,
}

/// Model repository ids used for each capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelIds {
    pub summarizer: String,
    pub sentiment: String,
    pub punctuation: String,
}

impl Default for ModelIds {
    fn default() -> Self {
        Self {
            summarizer: HuggingFaceClient::SUMMARIZER_MODEL.into(),
            sentiment: HuggingFaceClient::SENTIMENT_MODEL.into(),
            punctuation: HuggingFaceClient::PUNCTUATION_MODEL.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Empty response from {0}")]
    EmptyResponse(String),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),
}

impl HuggingFaceClient {
    pub const BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";
    pub const SUMMARIZER_MODEL: &str = "facebook/bart-large-cnn";
    pub const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
    pub const PUNCTUATION_MODEL: &str = "oliverguhr/fullstop-punctuation-multilang-large";

    pub fn new(api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.filter(|t| !t.is_empty()),
            base_url: Self::BASE_URL.into(),
            models: ModelIds::default(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, models: ModelIds) -> Self {
        self.models = models;
        self
    }

    pub fn models(&self) -> &ModelIds {
        &self.models
    }

    /// Posts `body` to the inference endpoint of `model` and decodes the JSON answer
    pub async fn send_inference_request<R: DeserializeOwned>(
        &self,
        model: &str,
        body: serde_json::Value,
    ) -> Result<R, InferenceError> {
        let mut request = self
            .client
            .post(format!("{}/{}", self.base_url, model))
            .json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api { status, message });
        }

        Ok(resp.json::<R>().await?)
    }
}

impl Summarizer for HuggingFaceClient {
    type Error = InferenceError;

    #[tracing::instrument(skip_all, fields(model = %self.models.summarizer, chars = text.chars().count()))]
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<SummaryResponse, Self::Error> {
        let truncation = if params.truncation {
            "only_first"
        } else {
            "do_not_truncate"
        };
        let body = serde_json::json!({
            "inputs": text,
            "parameters": {
                "max_length": params.max_length,
                "min_length": params.min_length,
                "do_sample": params.do_sample,
                "truncation": truncation
            }
        });

        let response: Vec<SummaryResponse> = self
            .send_inference_request(&self.models.summarizer, body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        response
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::EmptyResponse(self.models.summarizer.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f32,
}

/// Text classification answers come nested per input or flat, depending on the backend
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn top(self) -> Option<LabelScore> {
        let scores = match self {
            ClassificationResponse::Nested(outer) => outer.into_iter().next()?,
            ClassificationResponse::Flat(scores) => scores,
        };
        scores.into_iter().max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

impl SentimentClassifier for HuggingFaceClient {
    type Error = InferenceError;

    #[tracing::instrument(skip_all, fields(model = %self.models.sentiment))]
    async fn classify(&self, text: &str) -> Result<SentimentResult, Self::Error> {
        let response: ClassificationResponse = self
            .send_inference_request(
                &self.models.sentiment,
                serde_json::json!({ "inputs": text }),
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to classify sentiment"))?;

        let top = response
            .top()
            .ok_or_else(|| InferenceError::EmptyResponse(self.models.sentiment.clone()))?;

        Ok(SentimentResult::new(top.label.parse()?, top.score))
    }
}

/// One labelled token; `end` is the character offset just past it
#[derive(Debug, Deserialize)]
struct TokenPrediction {
    #[serde(alias = "entity_group")]
    entity: String,
    end: Option<usize>,
}

impl PunctuationRestorer for HuggingFaceClient {
    type Error = InferenceError;

    #[tracing::instrument(skip_all, fields(model = %self.models.punctuation))]
    async fn restore_punctuation(&self, text: &str) -> Result<String, Self::Error> {
        let bare = strip_sentence_punctuation(text);
        let body = serde_json::json!({
            "inputs": bare,
            "parameters": { "aggregation_strategy": "none" }
        });

        let predictions: Vec<TokenPrediction> = self
            .send_inference_request(&self.models.punctuation, body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to restore punctuation"))?;

        let marks = word_end_marks(
            &bare,
            predictions
                .iter()
                .filter_map(|p| p.end.map(|end| (end, p.entity.as_str()))),
        );

        Ok(insert_marks(&bare, marks))
    }
}
