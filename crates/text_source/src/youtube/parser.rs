//! # YouTube response parsing
//!
//! Pulls the innertube API key out of a watch page, turns the innertube `player`
//! response into a [`TranscriptList`] and decodes timedtext XML into snippets.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    youtube::{TranscriptList, TranscriptSnippet, TranscriptTrack},
    SourceError,
};

static INNERTUBE_API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).expect("valid regex")
});

static CONSENT_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="v" value="([^"]*)""#).expect("valid regex"));

static TIMEDTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text\b([^>/]*)>(.*?)</text>").expect("valid regex"));

static START_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bstart="([0-9.]+)""#).expect("valid regex"));

static DUR_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bdur="([0-9.]+)""#).expect("valid regex"));

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Extracts the innertube API key embedded in a watch page
pub fn extract_innertube_api_key(html: &str) -> Result<String, SourceError> {
    if html.contains(r#"class="g-recaptcha""#) {
        return Err(SourceError::ParseError(
            "YouTube answered with a captcha page, requests are being blocked",
        ));
    }

    INNERTUBE_API_KEY_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(SourceError::ParseError(
            "Failed to extract INNERTUBE_API_KEY from the watch page",
        ))
}

/// Whether YouTube answered with its cookie consent form instead of the watch page
pub fn is_consent_page(html: &str) -> bool {
    html.contains(r#"action="https://consent.youtube.com/s""#)
}

/// Extracts the value the consent form submits, used to build the `CONSENT` cookie
pub fn extract_consent_value(html: &str) -> Result<String, SourceError> {
    CONSENT_VALUE_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(SourceError::ParseError(
            "Failed to read the value of the YouTube consent form",
        ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    #[serde(default)]
    name: Option<TrackName>,
    #[serde(default)]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    text: String,
}

impl TrackName {
    fn into_text(self) -> Option<String> {
        self.simple_text
            .or_else(|| self.runs.into_iter().next().map(|r| r.text))
    }
}

/// Builds the transcript list from an innertube `player` response.
///
/// # Returns
/// * `Err(SourceError::VideoUnavailable)` when the playability status is not `OK`.
/// * `Err(SourceError::TranscriptsDisabled)` when the response carries no caption tracks.
#[tracing::instrument(skip(json))]
pub fn parse_player_response(video_id: &str, json: &Value) -> Result<TranscriptList, SourceError> {
    let playability = serde_json::from_value::<PlayabilityStatus>(
        json.get("playabilityStatus")
            .cloned()
            .ok_or(SourceError::ParseError(
                "Failed to get ['playabilityStatus'] from player response",
            ))?,
    )?;

    if playability.status != "OK" {
        return Err(SourceError::VideoUnavailable {
            video_id: video_id.to_string(),
            reason: playability.reason.unwrap_or(playability.status),
        });
    }

    let Some(tracks) = json["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"]
        .as_array()
    else {
        return Err(SourceError::TranscriptsDisabled {
            video_id: video_id.to_string(),
        });
    };

    let tracks = tracks
        .iter()
        .cloned()
        .map(serde_json::from_value::<CaptionTrack>)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|track| TranscriptTrack {
            language: track
                .name
                .and_then(TrackName::into_text)
                .unwrap_or_else(|| track.language_code.clone()),
            is_generated: track.kind.as_deref() == Some("asr"),
            // srv3 is a different XML dialect; the default format is plain timedtext
            base_url: track.base_url.replace("&fmt=srv3", ""),
            language_code: track.language_code,
        })
        .collect();

    Ok(TranscriptList::new(video_id, tracks))
}

/// Decodes a timedtext XML document into snippets.
///
/// Text is entity decoded twice (the XML layer and the HTML escaping inside it) and
/// stripped of inline formatting tags. Lines left empty are dropped.
pub fn parse_transcript_xml(xml: &str) -> Vec<TranscriptSnippet> {
    TIMEDTEXT_RE
        .captures_iter(xml)
        .filter_map(|cap| {
            let attrs = cap.get(1).map_or("", |m| m.as_str());
            let raw = cap.get(2).map_or("", |m| m.as_str());

            let once = html_escape::decode_html_entities(raw);
            let twice = html_escape::decode_html_entities(&once);
            let text = HTML_TAG_RE.replace_all(&twice, "");
            if text.trim().is_empty() {
                return None;
            }

            Some(TranscriptSnippet::new(
                text.into_owned(),
                parse_float_attr(&START_ATTR_RE, attrs),
                parse_float_attr(&DUR_ATTR_RE, attrs),
            ))
        })
        .collect()
}

fn parse_float_attr(re: &Regex, attrs: &str) -> f64 {
    re.captures(attrs)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}
