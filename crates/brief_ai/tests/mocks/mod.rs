pub mod classifier;
pub mod punctuator;
pub mod summarizer;
pub mod transcript_source;
