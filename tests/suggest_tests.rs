// ===== airtype/tests/suggest_tests.rs =====
use airtype::config::SuggestParams;
use airtype::error::{AirTypeError, AtResult};
use airtype::suggest::{FrequencyModel, Suggester, TrainedModel, WordPredictor};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn params() -> SuggestParams {
    SuggestParams::default()
}

fn sample_model() -> FrequencyModel {
    let mut words = Vec::new();
    words.extend(std::iter::repeat("python").take(5));
    words.extend(std::iter::repeat("pytorch").take(2));
    words.extend(std::iter::repeat("java").take(9));
    FrequencyModel::from_words(words, &params())
}

// --- FREQUENCY MODEL ---

#[test]
fn test_complete_returns_prefix_matches_only() {
    let model = sample_model();
    let hits = model.complete("pyt", 3);
    assert_eq!(hits, vec!["python", "pytorch"]);
}

#[test]
fn test_complete_ranks_by_descending_count() {
    let model = FrequencyModel::from_words(
        ["casa", "casa", "caso", "caso", "caso", "cable"],
        &params(),
    );
    assert_eq!(model.complete("ca", 3), vec!["caso", "casa", "cable"]);
}

#[test]
fn test_complete_breaks_count_ties_lexicographically() {
    let model = FrequencyModel::from_words(["beta", "bar", "baz", "bed"], &params());
    assert_eq!(model.complete("b", 10), vec!["bar", "baz", "bed", "beta"]);
}

#[test]
fn test_complete_caps_at_limit() {
    let model = FrequencyModel::from_words(["aaa", "aab", "aac", "aad", "aae"], &params());
    assert_eq!(model.complete("aa", 3).len(), 3);
}

#[test]
fn test_word_filter_drops_short_long_and_non_alphabetic() {
    let model = FrequencyModel::from_words(
        ["ab", "abc", "abcdefghij", "abcdefghijk", "abc123", "he's"],
        &params(),
    );
    assert_eq!(model.len(), 2);
    assert_eq!(model.count("abc"), 1);
    assert_eq!(model.count("abcdefghij"), 1);
}

#[test]
fn test_from_words_case_folds() {
    let model = FrequencyModel::from_words(["Casa", "CASA", "casa"], &params());
    assert_eq!(model.count("casa"), 3);
}

// --- TSV LOADER ---

#[test]
fn test_tsv_loader_parses_counts() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "python\t5").unwrap();
    writeln!(file, "pytorch\t2").unwrap();
    writeln!(file, "java\t9").unwrap();

    let model = FrequencyModel::load_from_tsv(file.path(), &params()).unwrap();
    assert_eq!(model.len(), 3);
    assert_eq!(model.count("java"), 9);
    assert_eq!(model.complete("pyt", 3), vec!["python", "pytorch"]);
}

#[test]
fn test_tsv_loader_skips_bad_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "python\t5").unwrap();
    writeln!(file, "garbage").unwrap(); // too few fields
    writeln!(file, "word\tNaN-ish").unwrap(); // bad count
    writeln!(file, "ab\t7").unwrap(); // too short
    writeln!(file, "has space\t7").unwrap(); // non-alphabetic

    let model = FrequencyModel::load_from_tsv(file.path(), &params()).unwrap();
    assert_eq!(model.len(), 1);
}

#[test]
fn test_tsv_loader_case_folds_and_merges() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Casa\t2").unwrap();
    writeln!(file, "casa\t3").unwrap();

    let model = FrequencyModel::load_from_tsv(file.path(), &params()).unwrap();
    assert_eq!(model.count("casa"), 5);
}

#[test]
fn test_tsv_loader_missing_file_is_an_error() {
    let result = FrequencyModel::load_from_tsv("no/such/corpus.tsv", &params());
    assert!(result.is_err());
}

// --- TRAINED MODEL ---

fn trained() -> TrainedModel {
    let mut predictions = HashMap::new();
    predictions.insert(
        "pyt".to_string(),
        vec!["python".to_string(), "pytest".to_string()],
    );
    TrainedModel::new(predictions)
}

#[test]
fn test_trained_model_exact_prefix() {
    let model = trained();
    assert_eq!(model.suggest("pyt").unwrap(), vec!["python", "pytest"]);
}

#[test]
fn test_trained_model_backs_off_and_refilters() {
    let model = trained();
    // "pyth" is not recorded; back off to "pyt" and keep only words
    // still matching the full query.
    assert_eq!(model.suggest("pyth").unwrap(), vec!["python"]);
}

#[test]
fn test_trained_model_unknown_prefix_is_empty() {
    let model = trained();
    assert!(model.suggest("zzz").unwrap().is_empty());
}

#[test]
fn test_trained_model_loads_json_artifact() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "{{\"predictions\": {{\"ho\": [\"hola\", \"hoy\"]}}}}"
    )
    .unwrap();

    let model = TrainedModel::load_from_file(file.path()).unwrap();
    assert_eq!(model.suggest("ho").unwrap(), vec!["hola", "hoy"]);
}

#[test]
fn test_trained_model_corrupt_artifact_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(TrainedModel::load_from_file(file.path()).is_err());
}

// --- SUGGESTER ---

struct FailingPredictor;

impl WordPredictor for FailingPredictor {
    fn suggest(&self, _prefix: &str) -> AtResult<Vec<String>> {
        Err(AirTypeError::Prediction("inference blew up".to_string()))
    }
}

struct FloodingPredictor;

impl WordPredictor for FloodingPredictor {
    fn suggest(&self, prefix: &str) -> AtResult<Vec<String>> {
        Ok((0..10).map(|i| format!("{}{}", prefix, i)).collect())
    }
}

#[test]
fn test_empty_buffer_yields_no_suggestions() {
    let suggester = Suggester::frequency_only(sample_model(), params());
    assert!(suggester.suggestions("").is_empty());
    assert!(suggester.suggestions("   ").is_empty());
}

#[test]
fn test_frequency_path_uses_last_token() {
    let suggester = Suggester::frequency_only(sample_model(), params());
    assert_eq!(suggester.suggestions("i like pyt"), vec!["python", "pytorch"]);
}

#[test]
fn test_prefix_is_case_folded() {
    let suggester = Suggester::frequency_only(sample_model(), params());
    assert_eq!(suggester.suggestions("PYT"), vec!["python", "pytorch"]);
}

#[test]
fn test_predictor_takes_priority_over_frequency() {
    let suggester = Suggester::new(sample_model(), Some(Box::new(trained())), params());
    assert_eq!(suggester.suggestions("pyt"), vec!["python", "pytest"]);
}

#[test]
fn test_predictor_output_is_capped_defensively() {
    let suggester = Suggester::new(sample_model(), Some(Box::new(FloodingPredictor)), params());
    assert_eq!(suggester.suggestions("x").len(), 3);
}

#[test]
fn test_transient_predictor_failure_falls_back_per_call() {
    let suggester = Suggester::new(sample_model(), Some(Box::new(FailingPredictor)), params());

    // The call degrades to the frequency path...
    assert_eq!(suggester.suggestions("pyt"), vec!["python", "pytorch"]);
    // ...but the predictor stays enabled for the session.
    assert!(suggester.has_predictor());
}

#[test]
fn test_missing_predictor_means_frequency_session() {
    let suggester = Suggester::frequency_only(sample_model(), params());
    assert!(!suggester.has_predictor());
    assert_eq!(suggester.suggestions("ja"), vec!["java"]);
}

#[test]
fn test_empty_frequency_model_yields_nothing() {
    let suggester = Suggester::frequency_only(FrequencyModel::default(), params());
    assert!(suggester.suggestions("pyt").is_empty());
}
