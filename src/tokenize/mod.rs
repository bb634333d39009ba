use std::fmt;

use rust_stemmers::Algorithm;

use crate::config::{IndexConfig, Stemmer};

/// Lazy stream of normalized tokens.
pub type Tokens<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Text normalization shared by indexing and querying.
///
/// The repository runs document text and query text through the same
/// pipeline; swapping the pipeline means building a new repository.
pub trait TokenPipeline {
    fn tokenize<'a>(&'a self, fragments: &[&'a str]) -> Tokens<'a>;
}

/// Split on non-alphanumerics, lowercase, then stem.
pub struct StemmingPipeline {
    language: Stemmer,
    stemmer: Option<rust_stemmers::Stemmer>,
    min_token_chars: usize,
}

impl StemmingPipeline {
    pub fn new(language: Stemmer, min_token_chars: usize) -> Self {
        let stemmer = algorithm(language).map(rust_stemmers::Stemmer::create);
        Self {
            language,
            stemmer,
            min_token_chars: min_token_chars.max(1),
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(config.stemmer, config.min_token_chars)
    }

    fn normalize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&lower).into_owned(),
            None => lower,
        }
    }
}

impl Default for StemmingPipeline {
    fn default() -> Self {
        Self::from_config(&IndexConfig::v0())
    }
}

impl fmt::Debug for StemmingPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingPipeline")
            .field("language", &self.language)
            .field("min_token_chars", &self.min_token_chars)
            .finish()
    }
}

impl TokenPipeline for StemmingPipeline {
    fn tokenize<'a>(&'a self, fragments: &[&'a str]) -> Tokens<'a> {
        let fragments = fragments.to_vec();
        Box::new(
            fragments
                .into_iter()
                .flat_map(|fragment| fragment.split(|c: char| !c.is_alphanumeric()))
                .filter(move |word| word.chars().count() >= self.min_token_chars)
                .map(move |word| self.normalize(word)),
        )
    }
}

fn algorithm(language: Stemmer) -> Option<Algorithm> {
    match language {
        Stemmer::None => None,
        Stemmer::English => Some(Algorithm::English),
        Stemmer::French => Some(Algorithm::French),
        Stemmer::German => Some(Algorithm::German),
        Stemmer::Spanish => Some(Algorithm::Spanish),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(pipeline: &StemmingPipeline, fragments: &[&str]) -> Vec<String> {
        pipeline.tokenize(fragments).collect()
    }

    #[test]
    fn splits_lowercases_and_stems() {
        let pipeline = StemmingPipeline::default();
        assert_eq!(
            collect(&pipeline, &["Posts, POSTING & posted!"]),
            vec!["post", "post", "post"]
        );
    }

    #[test]
    fn fragments_are_concatenated_in_order() {
        let pipeline = StemmingPipeline::new(Stemmer::None, 1);
        assert_eq!(collect(&pipeline, &["one two", "three"]), vec!["one", "two", "three"]);
    }

    #[test]
    fn short_tokens_are_dropped() {
        let pipeline = StemmingPipeline::new(Stemmer::None, 3);
        assert_eq!(collect(&pipeline, &["a an the cat"]), vec!["the", "cat"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let pipeline = StemmingPipeline::default();
        assert!(collect(&pipeline, &["", "  -- "]).is_empty());
        assert!(collect(&pipeline, &[]).is_empty());
    }
}
