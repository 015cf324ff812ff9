use reqwest::Client;
use serde_json::Value;

use crate::{
    youtube::{
        parser::{
            extract_consent_value, extract_innertube_api_key, is_consent_page,
            parse_player_response, parse_transcript_xml,
        },
        TranscriptList, TranscriptSnippet, TranscriptSource, TranscriptTrack, VideoId,
    },
    SourceError,
};

/// Transcript source backed by the public YouTube web endpoints
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: Client,
    base_url: String,
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YouTubeClient {
    pub const BASE_URL: &str = "https://www.youtube.com";
    const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
    const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: Self::BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        self.get_text_with_cookie(url, None).await
    }

    async fn get_text_with_cookie(
        &self,
        url: &str,
        cookie: Option<&str>,
    ) -> Result<String, SourceError> {
        let mut request = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9");
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }

    /// Loads the watch page of `video_id`, accepting the EU cookie consent form once
    /// if YouTube shows it first
    #[tracing::instrument(skip(self))]
    async fn fetch_watch_html(&self, video_id: &VideoId) -> Result<String, SourceError> {
        let url = format!("{}/watch?v={}", self.base_url, video_id);
        let html = self.get_text(&url).await?;
        if !is_consent_page(&html) {
            return Ok(html);
        }

        tracing::debug!("Accepting YouTube consent form");
        let cookie = format!("CONSENT=YES+{}", extract_consent_value(&html)?);
        let html = self.get_text_with_cookie(&url, Some(&cookie)).await?;
        if is_consent_page(&html) {
            return Err(SourceError::ParseError(
                "YouTube kept asking for cookie consent after it was given",
            ));
        }
        Ok(html)
    }

    /// Asks the innertube `player` endpoint for the video's metadata, captions included
    #[tracing::instrument(skip(self, api_key))]
    async fn fetch_player_response(
        &self,
        video_id: &VideoId,
        api_key: &str,
    ) -> Result<Value, SourceError> {
        let url = format!("{}/youtubei/v1/player?key={}", self.base_url, api_key);
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": Self::INNERTUBE_CLIENT_NAME,
                    "clientVersion": Self::INNERTUBE_CLIENT_VERSION
                }
            },
            "videoId": video_id.as_str()
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }

        Ok(resp.json::<Value>().await?)
    }
}

impl TranscriptSource for YouTubeClient {
    async fn list_transcripts(&self, video_id: &VideoId) -> Result<TranscriptList, SourceError> {
        let html = self.fetch_watch_html(video_id).await?;
        let api_key = extract_innertube_api_key(&html)?;
        let player = self.fetch_player_response(video_id, &api_key).await?;

        let list = parse_player_response(video_id, &player)?;
        tracing::debug!(video_id = %video_id, tracks = list.len(), "Listed transcripts");
        Ok(list)
    }

    #[tracing::instrument(skip(self), fields(language = %track.language_code))]
    async fn fetch_track(
        &self,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptSnippet>, SourceError> {
        let xml = self.get_text(&track.base_url).await?;
        Ok(parse_transcript_xml(&xml))
    }
}
