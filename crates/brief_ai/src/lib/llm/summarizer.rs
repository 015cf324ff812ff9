use std::{fmt::Display, future::Future};

use serde::{Deserialize, Serialize};

pub trait Summarizer {
    type Error: Display;

    fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

impl<T: Summarizer> Summarizer for &T {
    type Error = T::Error;

    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<SummaryResponse, Self::Error> {
        (**self).summarize(text, params).await
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary_text: String,
}

/// Decoding bounds passed with every summarization call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
    pub truncation: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
            truncation: true,
        }
    }
}
