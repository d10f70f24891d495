//! Bag-of-words vectorization of genre labels.
//!
//! A corpus of labels is tokenized into word-character runs, every distinct
//! token becomes one vocabulary column (first-seen order), and each label
//! becomes a row of term-frequency counts over that vocabulary.

use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorizeError {
    /// Every label in a non-empty corpus tokenized to nothing
    #[error("empty vocabulary; genre labels contain no tokens")]
    EmptyVocabulary,
}

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub lowercase: bool,
    /// Tokens shorter than this many characters are dropped
    pub min_token_len: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_len: 1,
        }
    }
}

impl TokenizerOptions {
    /// Case-sensitive, otherwise like the default
    pub fn verbatim() -> Self {
        Self {
            lowercase: false,
            min_token_len: 1,
        }
    }
}

/// Splits a label into word-character runs (alphanumerics and `_`)
pub fn tokenize(label: &str, options: TokenizerOptions) -> Vec<String> {
    label
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= options.min_token_len.max(1))
        .map(|token| {
            if options.lowercase {
                token.to_lowercase()
            } else {
                token.to_string()
            }
        })
        .collect()
}

/// Ordered token vocabulary shared by every row of a matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Returns the column of `token`, adding it if unseen
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(&column) = self.index.get(token) {
            return column;
        }
        let column = self.tokens.len();
        self.tokens.push(token.to_string());
        self.index.insert(token.to_string(), column);
        column
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Term-frequency matrix, one row per corpus label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMatrix {
    vocabulary: Vocabulary,
    rows: Vec<Vec<u32>>,
}

impl TermMatrix {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[u32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits rows into `[0, at)` and `[at, len)`
    pub fn split_rows(&self, at: usize) -> (&[Vec<u32>], &[Vec<u32>]) {
        self.rows.split_at(at.min(self.rows.len()))
    }
}

/// Vectorizes `corpus` with the default tokenizer
pub fn vectorize(corpus: &[String]) -> Result<TermMatrix, VectorizeError> {
    vectorize_with(corpus, TokenizerOptions::default())
}

/// Vectorizes `corpus` over a vocabulary built from the corpus itself
pub fn vectorize_with(
    corpus: &[String],
    options: TokenizerOptions,
) -> Result<TermMatrix, VectorizeError> {
    if corpus.is_empty() {
        return Ok(TermMatrix::default());
    }

    let mut vocabulary = Vocabulary::default();
    let tokenized: Vec<Vec<usize>> = corpus
        .iter()
        .map(|label| {
            tokenize(label, options)
                .iter()
                .map(|token| vocabulary.insert(token))
                .collect()
        })
        .collect();

    if vocabulary.is_empty() {
        return Err(VectorizeError::EmptyVocabulary);
    }

    let rows = tokenized
        .into_iter()
        .map(|columns| {
            let mut row = vec![0u32; vocabulary.len()];
            for column in columns {
                row[column] += 1;
            }
            row
        })
        .collect();

    Ok(TermMatrix { vocabulary, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_splits_on_non_word_characters() {
        let tokens = tokenize("Sci-Fi / Fantasy_Epic", TokenizerOptions::default());
        assert_eq!(tokens, vec!["sci", "fi", "fantasy_epic"]);
    }

    #[test]
    fn test_tokenize_keeps_single_characters_by_default() {
        let tokens = tokenize("A Film Noir", TokenizerOptions::default());
        assert_eq!(tokens, vec!["a", "film", "noir"]);
    }

    #[test]
    fn test_tokenize_drops_tokens_below_min_len() {
        let options = TokenizerOptions {
            lowercase: true,
            min_token_len: 2,
        };
        assert_eq!(tokenize("A Film Noir", options), vec!["film", "noir"]);
    }

    #[test]
    fn test_tokenize_verbatim_keeps_case_and_single_chars() {
        let tokens = tokenize("A Film", TokenizerOptions::verbatim());
        assert_eq!(tokens, vec!["A", "Film"]);
    }

    #[test]
    fn test_vocabulary_is_first_seen_order() {
        let matrix = vectorize(&labels(&["Science Fiction", "Fiction", "Action"])).unwrap();
        assert_eq!(
            matrix.vocabulary().tokens(),
            &["science", "fiction", "action"]
        );
    }

    #[test]
    fn test_rows_count_term_frequency() {
        let matrix = vectorize(&labels(&["Drama Drama", "Romantic Drama"])).unwrap();
        assert_eq!(matrix.rows(), &[vec![2u32, 0], vec![1u32, 1]]);
    }

    #[test]
    fn test_case_is_folded_into_one_column() {
        let matrix = vectorize(&labels(&["Action", "ACTION", "action"])).unwrap();
        assert_eq!(matrix.vocabulary().len(), 1);
        assert_eq!(matrix.rows(), &[vec![1u32], vec![1u32], vec![1u32]]);
    }

    #[test]
    fn test_case_sensitive_when_not_lowercasing() {
        let matrix =
            vectorize_with(&labels(&["Action", "action"]), TokenizerOptions::verbatim()).unwrap();
        assert_eq!(matrix.vocabulary().len(), 2);
    }

    #[test]
    fn test_empty_corpus_is_empty_matrix() {
        let matrix = vectorize(&[]).unwrap();
        assert!(matrix.is_empty());
        assert!(matrix.vocabulary().is_empty());
    }

    #[test]
    fn test_label_without_tokens_is_zero_row() {
        let matrix = vectorize(&labels(&["Horror", "--"])).unwrap();
        assert_eq!(matrix.row(1), Some(&[0u32][..]));
    }

    #[test]
    fn test_corpus_without_tokens_is_an_error() {
        let result = vectorize(&labels(&["!", "", "--"]));
        assert_eq!(result, Err(VectorizeError::EmptyVocabulary));
    }

    #[test]
    fn test_single_character_label_has_a_column() {
        let matrix = vectorize(&labels(&["X", "x"])).unwrap();
        assert_eq!(matrix.vocabulary().tokens(), &["x"]);
        assert_eq!(matrix.rows(), &[vec![1u32], vec![1u32]]);
    }

    #[test]
    fn test_split_rows() {
        let matrix = vectorize(&labels(&["Action", "Drama", "Comedy"])).unwrap();
        let (head, tail) = matrix.split_rows(1);
        assert_eq!(head.len(), 1);
        assert_eq!(tail.len(), 2);
    }
}
