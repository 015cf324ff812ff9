use std::sync::{Arc, Mutex};

use brief_ai::{SentimentClassifier, SentimentLabel, SentimentResult};

#[derive(Clone)]
pub struct MockClassifier {
    pub result: SentimentResult,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockClassifier {
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Self {
            result: SentimentResult::new(label, score),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(SentimentLabel::Positive, 0.0)
        }
    }
}

impl SentimentClassifier for MockClassifier {
    type Error = anyhow::Error;

    async fn classify(&self, text: &str) -> Result<SentimentResult, Self::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.result)
    }
}
