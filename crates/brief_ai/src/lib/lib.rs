pub mod chunker;
mod error;
mod llm;
pub mod models;
pub mod normalizer;
mod processor;
pub mod sentiment;
pub mod summary;
pub mod tracing;
pub mod types;

pub use error::Error;
pub use llm::huggingface;
pub use llm::{
    punctuator::PunctuationRestorer,
    sentiment::SentimentClassifier,
    summarizer::{GenerationParams, Summarizer, SummaryResponse},
};
pub use processor::{builder::BriefingProcessorBuilder, BriefingProcessor};
pub use types::{Briefing, ContentReference, Document, SentimentLabel, SentimentResult};
