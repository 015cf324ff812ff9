use std::{fmt::Display, future::Future};

use crate::SentimentResult;

pub trait SentimentClassifier {
    type Error: Display;

    fn classify(&self, text: &str) -> impl Future<Output = Result<SentimentResult, Self::Error>>;
}

impl<T: SentimentClassifier> SentimentClassifier for &T {
    type Error = T::Error;

    async fn classify(&self, text: &str) -> Result<SentimentResult, Self::Error> {
        (**self).classify(text).await
    }
}
