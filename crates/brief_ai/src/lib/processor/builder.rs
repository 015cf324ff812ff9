use text_source::TranscriptSource;

use crate::{
    BriefingProcessor, GenerationParams, PunctuationRestorer, SentimentClassifier, Summarizer,
};

pub struct BriefingProcessorBuilder<T = (), P = (), S = (), C = ()> {
    transcripts: T,
    punctuator: P,
    summarizer: S,
    classifier: C,
    generation: GenerationParams,
}

impl Default for BriefingProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BriefingProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcripts: (),
            punctuator: (),
            summarizer: (),
            classifier: (),
            generation: GenerationParams::default(),
        }
    }
}

impl<T, P, S, C> BriefingProcessorBuilder<T, P, S, C> {
    pub fn transcript_source<T2: TranscriptSource>(
        self,
        transcripts: T2,
    ) -> BriefingProcessorBuilder<T2, P, S, C> {
        BriefingProcessorBuilder {
            transcripts,
            punctuator: self.punctuator,
            summarizer: self.summarizer,
            classifier: self.classifier,
            generation: self.generation,
        }
    }

    pub fn punctuator<P2: PunctuationRestorer>(
        self,
        punctuator: P2,
    ) -> BriefingProcessorBuilder<T, P2, S, C> {
        BriefingProcessorBuilder {
            transcripts: self.transcripts,
            punctuator,
            summarizer: self.summarizer,
            classifier: self.classifier,
            generation: self.generation,
        }
    }

    pub fn summarizer<S2: Summarizer>(self, summarizer: S2) -> BriefingProcessorBuilder<T, P, S2, C> {
        BriefingProcessorBuilder {
            transcripts: self.transcripts,
            punctuator: self.punctuator,
            summarizer,
            classifier: self.classifier,
            generation: self.generation,
        }
    }

    pub fn classifier<C2: SentimentClassifier>(
        self,
        classifier: C2,
    ) -> BriefingProcessorBuilder<T, P, S, C2> {
        BriefingProcessorBuilder {
            transcripts: self.transcripts,
            punctuator: self.punctuator,
            summarizer: self.summarizer,
            classifier,
            generation: self.generation,
        }
    }

    pub fn generation_params(mut self, generation: GenerationParams) -> Self {
        self.generation = generation;
        self
    }
}

impl<T, P, S, C> BriefingProcessorBuilder<T, P, S, C>
where
    T: TranscriptSource,
    P: PunctuationRestorer,
    S: Summarizer,
    C: SentimentClassifier,
{
    pub fn build(self) -> BriefingProcessor<T, P, S, C> {
        BriefingProcessor {
            transcripts: self.transcripts,
            punctuator: self.punctuator,
            summarizer: self.summarizer,
            classifier: self.classifier,
            generation: self.generation,
        }
    }
}
