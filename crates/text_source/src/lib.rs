//! # Text Source Module
//!
//! This module turns a content reference into raw, unstructured text. Two kinds of
//! sources are supported: YouTube videos, whose transcripts are listed and fetched over
//! HTTP, and PDF documents, whose pages are read from memory.
//!
//! Transcript access sits behind the [`TranscriptSource`] trait so callers can swap the
//! HTTP client for a test double.

mod error;
pub mod pdf;
pub mod youtube;

pub use error::SourceError;
pub use pdf::{extract_pdf_pages, extract_pdf_text};
pub use youtube::{
    fetch_transcript_text, parse_video_id, TranscriptList, TranscriptSnippet, TranscriptSource,
    TranscriptTrack, VideoId, YouTubeClient,
};
