use std::sync::{Arc, Mutex};

use text_source::{
    SourceError, TranscriptList, TranscriptSnippet, TranscriptSource, TranscriptTrack, VideoId,
};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub text: String,
    pub tracks: Vec<TranscriptTrack>,
    pub listed: Arc<Mutex<Vec<String>>>,
    pub fetched: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tracks: vec![TranscriptTrack {
                language_code: "en".into(),
                language: "English".into(),
                is_generated: false,
                base_url: "https://youtube.com/mock/timedtext".into(),
            }],
            listed: Arc::new(Mutex::new(Vec::new())),
            fetched: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("")
        }
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn list_transcripts(&self, video_id: &VideoId) -> Result<TranscriptList, SourceError> {
        self.listed.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(SourceError::VideoUnavailable {
                video_id: video_id.to_string(),
                reason: msg.clone(),
            });
        }
        Ok(TranscriptList::new(video_id.as_str(), self.tracks.clone()))
    }

    async fn fetch_track(
        &self,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptSnippet>, SourceError> {
        self.fetched.lock().unwrap().push(track.language_code.clone());
        Ok(vec![TranscriptSnippet::new(self.text.clone(), 0.0, 1.0)])
    }
}
