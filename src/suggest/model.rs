use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AtResult;

/// Opaque learned predictor. Given a lowercased prefix it returns ranked
/// completions; ranking and truncation are the implementation's job,
/// though callers cap defensively. Errors are per-call and transient.
pub trait WordPredictor {
    fn suggest(&self, prefix: &str) -> AtResult<Vec<String>>;
}

/// Prediction table exported from an offline-trained language model.
/// The artifact is a JSON map from prefix to ranked completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    predictions: HashMap<String, Vec<String>>,
}

impl TrainedModel {
    pub fn new(predictions: HashMap<String, Vec<String>>) -> Self {
        Self { predictions }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AtResult<Self> {
        let content = fs::read_to_string(path)?;
        let model = serde_json::from_str(&content)?;
        Ok(model)
    }
}

impl WordPredictor for TrainedModel {
    /// The longest recorded prefix wins; backs off one character at a
    /// time so unseen extensions still get candidates, which are then
    /// re-filtered against the full query prefix.
    fn suggest(&self, prefix: &str) -> AtResult<Vec<String>> {
        let mut key = prefix;
        while !key.is_empty() {
            if let Some(words) = self.predictions.get(key) {
                return Ok(words
                    .iter()
                    .filter(|w| w.starts_with(prefix))
                    .cloned()
                    .collect());
            }
            let cut = key.char_indices().last().map_or(0, |(i, _)| i);
            key = &key[..cut];
        }
        Ok(Vec::new())
    }
}
