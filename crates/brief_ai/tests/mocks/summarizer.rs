use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use brief_ai::{GenerationParams, Summarizer, SummaryResponse};

/// Answers call `n` with `"summary n"`, unless `n` is listed in `fail_on`
#[derive(Clone)]
pub struct MockSummarizer {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub params: Arc<Mutex<Vec<GenerationParams>>>,
    pub fail_on: HashSet<usize>,
    pub summary_len: Option<usize>,
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            params: Arc::new(Mutex::new(Vec::new())),
            fail_on: HashSet::new(),
            summary_len: None,
        }
    }
}

impl MockSummarizer {
    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            fail_on: calls.iter().copied().collect(),
            ..Default::default()
        }
    }

    /// Every partial summary is exactly `len` characters long
    pub fn verbose(len: usize) -> Self {
        Self {
            summary_len: Some(len),
            ..Default::default()
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<SummaryResponse, Self::Error> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(text.to_string());
            calls.len() - 1
        };
        self.params.lock().unwrap().push(params.clone());

        if self.fail_on.contains(&call) {
            return Err(anyhow::anyhow!("model rejected chunk {}", call));
        }

        let summary_text = match self.summary_len {
            Some(len) => "s".repeat(len),
            None => format!("summary {call}"),
        };
        Ok(SummaryResponse { summary_text })
    }
}
