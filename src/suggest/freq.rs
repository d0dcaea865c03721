use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::config::SuggestParams;
use crate::error::AtResult;

/// Word → occurrence count, built once at startup and immutable after.
#[derive(Debug, Default, Clone)]
pub struct FrequencyModel {
    counts: HashMap<String, u32>,
}

impl FrequencyModel {
    /// Counts a raw token stream, keeping only alphabetic words within
    /// the configured length bounds (case-folded).
    pub fn from_words<I, S>(words: I, params: &SuggestParams) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if accepts(&word, params) {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Loads a `word<TAB>count` TSV corpus. Rows that fail to parse or
    /// fall outside the word filter are skipped, never fatal.
    pub fn load_from_tsv<P: AsRef<Path>>(path: P, params: &SuggestParams) -> AtResult<Self> {
        let file = File::open(path)?;

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(file);

        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let Ok(rec) = result else {
                skipped += 1;
                continue;
            };
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }

            let word = rec[0].trim().to_lowercase();
            let count: u32 = match rec[1].trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            if !accepts(&word, params) {
                continue;
            }
            *counts.entry(word).or_insert(0) += count;
        }

        if skipped > 0 {
            debug!(skipped, "skipped unparseable corpus rows");
        }

        Ok(Self { counts })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Words starting with `prefix`, ranked by descending count and then
    /// lexicographically so the order is deterministic.
    pub fn complete(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut hits: Vec<(&String, u32)> = self
            .counts
            .iter()
            .filter(|(word, _)| word.starts_with(prefix))
            .map(|(word, count)| (word, *count))
            .collect();

        hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        hits.into_iter()
            .take(limit)
            .map(|(word, _)| word.clone())
            .collect()
    }
}

fn accepts(word: &str, params: &SuggestParams) -> bool {
    let len = word.chars().count();
    len >= params.min_word_len
        && len <= params.max_word_len
        && !word.is_empty()
        && word.chars().all(char::is_alphabetic)
}
