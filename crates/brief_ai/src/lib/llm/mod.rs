pub mod huggingface;
pub mod punctuator;
pub mod sentiment;
pub mod summarizer;
