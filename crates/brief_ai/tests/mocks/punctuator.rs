use std::sync::{Arc, Mutex};

use brief_ai::PunctuationRestorer;

/// Upper-cases whatever it is asked to restore
#[derive(Clone)]
pub struct MockPunctuator {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockPunctuator {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockPunctuator {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl PunctuationRestorer for MockPunctuator {
    type Error = anyhow::Error;

    async fn restore_punctuation(&self, text: &str) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(text.to_uppercase())
    }
}
