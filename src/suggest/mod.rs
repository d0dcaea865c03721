pub mod freq;
pub mod model;

pub use self::freq::FrequencyModel;
pub use self::model::{TrainedModel, WordPredictor};

use tracing::warn;

use crate::config::SuggestParams;

/// Hybrid suggestion front-end: a learned predictor when one loaded, the
/// frequency corpus otherwise. Predictor availability is decided once at
/// construction; a missing artifact means a frequency-only session, no
/// retry.
pub struct Suggester {
    freq: FrequencyModel,
    predictor: Option<Box<dyn WordPredictor>>,
    params: SuggestParams,
}

impl Suggester {
    pub fn new(
        freq: FrequencyModel,
        predictor: Option<Box<dyn WordPredictor>>,
        params: SuggestParams,
    ) -> Self {
        Self {
            freq,
            predictor,
            params,
        }
    }

    pub fn frequency_only(freq: FrequencyModel, params: SuggestParams) -> Self {
        Self::new(freq, None, params)
    }

    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Ranked completions for the buffer's last token, capped at
    /// `max_suggestions`. Empty or whitespace-only buffers yield nothing.
    pub fn suggestions(&self, buffer: &str) -> Vec<String> {
        let Some(prefix) = last_token(buffer) else {
            return Vec::new();
        };

        if let Some(predictor) = &self.predictor {
            match predictor.suggest(&prefix) {
                Ok(mut words) => {
                    words.truncate(self.params.max_suggestions);
                    return words;
                }
                // Transient inference failure: frequency path for this
                // call only; the predictor stays enabled.
                Err(e) => {
                    warn!(error = %e, "predictor failed, using frequency fallback");
                }
            }
        }

        self.freq.complete(&prefix, self.params.max_suggestions)
    }
}

fn last_token(buffer: &str) -> Option<String> {
    buffer
        .split_whitespace()
        .last()
        .map(|token| token.to_lowercase())
}
