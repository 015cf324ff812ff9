use std::{fmt, ops::Deref};

use crate::SourceError;

/// A YouTube video identifier, e.g. `dQw4w9WgXcQ`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a video identifier out of a YouTube link.
///
/// Two forms are accepted, checked in this order:
/// * query-parameter form: `https://www.youtube.com/watch?v=<id>&...`
/// * short-link form: `https://youtu.be/<id>`
///
/// Anything else, or a link whose identifier is empty, yields [`SourceError::InvalidUrl`].
pub fn parse_video_id(url: &str) -> Result<VideoId, SourceError> {
    let url = url.trim();

    let id = if let Some((_, rest)) = url.split_once("v=") {
        rest.split('&').next().unwrap_or_default()
    } else if url.contains("youtu.be") {
        let last_segment = url.rsplit('/').next().unwrap_or_default();
        // `?t=30` style suffixes are not part of the id
        last_segment
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
    } else {
        return Err(SourceError::InvalidUrl);
    };

    let id = id.split('#').next().unwrap_or_default();
    if id.is_empty() {
        return Err(SourceError::InvalidUrl);
    }

    Ok(VideoId(id.to_string()))
}
