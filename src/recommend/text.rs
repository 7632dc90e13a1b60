use anyhow::{bail, Context, Result};
use nalgebra::DMatrix;
use ndarray::Array2;
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

use crate::domain::BandId;

/// TF-IDF + truncated SVD + cosine similarity over one candidate set's text
/// field, reused identically for genre labels and lyrical themes.
///
/// The vocabulary is rebuilt for every candidate set, so scores for the same
/// pair of bands are NOT comparable across different query targets. Output
/// cosines are raw and unclamped; min-max normalization downstream absorbs
/// any negative values.
pub struct TextSimilarityEngine {
    token_regex: Regex,
    max_components: usize,
}

impl TextSimilarityEngine {
    pub fn new(max_components: usize) -> Result<Self> {
        // Word tokens of length >= 2, matching the reference vectorizer
        let token_regex =
            Regex::new(r"\b\w\w+\b").context("Failed to compile token regex")?;

        Ok(Self {
            token_regex,
            max_components,
        })
    }

    /// Cosine similarity of every document against the target's document in
    /// the reduced TF-IDF space.
    ///
    /// Fails when `documents` is empty or does not contain the target; the
    /// pipeline guards both before calling.
    pub fn similarity(
        &self,
        documents: &[(BandId, String)],
        target_id: BandId,
    ) -> Result<HashMap<BandId, f64>> {
        if documents.is_empty() {
            bail!("Empty candidate set for text similarity");
        }
        let Some(target_idx) = documents.iter().position(|(id, _)| *id == target_id) else {
            bail!("Target band {} missing from candidate set", target_id);
        };

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|(_, text)| self.tokenize(text))
            .collect();

        let vocabulary = build_vocabulary(&tokenized);
        if vocabulary.is_empty() {
            // Nothing tokenizable anywhere; every vector is zero and every
            // cosine is zero by the zero-norm convention
            return Ok(documents.iter().map(|(id, _)| (*id, 0.0)).collect());
        }

        let tfidf = build_tfidf(&tokenized, &vocabulary);
        let reduced = reduce_dimensionality(&tfidf, self.max_components)?;

        let scores = documents
            .iter()
            .enumerate()
            .map(|(idx, (id, _))| {
                (*id, cosine(reduced.row(idx), reduced.row(target_idx)))
            })
            .collect();

        Ok(scores)
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_regex
            .find_iter(&lowered)
            .map(|token| token.as_str().to_string())
            .collect()
    }
}

/// Sorted term -> column index mapping over the candidate set only
fn build_vocabulary(tokenized: &[Vec<String>]) -> HashMap<String, usize> {
    let terms: BTreeSet<&str> = tokenized
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    terms
        .into_iter()
        .enumerate()
        .map(|(idx, term)| (term.to_string(), idx))
        .collect()
}

/// Term-frequency matrix weighted by smoothed IDF, rows L2-normalized.
/// IDF is `ln((1 + n) / (1 + df)) + 1`; all-zero rows stay zero.
fn build_tfidf(tokenized: &[Vec<String>], vocabulary: &HashMap<String, usize>) -> Array2<f64> {
    let n_docs = tokenized.len();
    let n_terms = vocabulary.len();

    let mut matrix = Array2::<f64>::zeros((n_docs, n_terms));
    for (doc_idx, tokens) in tokenized.iter().enumerate() {
        for token in tokens {
            if let Some(&term_idx) = vocabulary.get(token) {
                matrix[[doc_idx, term_idx]] += 1.0;
            }
        }
    }

    let mut document_frequency = vec![0.0_f64; n_terms];
    for doc_idx in 0..n_docs {
        for term_idx in 0..n_terms {
            if matrix[[doc_idx, term_idx]] > 0.0 {
                document_frequency[term_idx] += 1.0;
            }
        }
    }

    for term_idx in 0..n_terms {
        let idf = ((1.0 + n_docs as f64) / (1.0 + document_frequency[term_idx])).ln() + 1.0;
        for doc_idx in 0..n_docs {
            matrix[[doc_idx, term_idx]] *= idf;
        }
    }

    for mut row in matrix.rows_mut() {
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row.mapv_inplace(|value| value / norm);
        }
    }

    matrix
}

/// Thin SVD keeping the top `min(max_components, rank bound)` singular
/// triplets; the reduced representation is U * Sigma, which preserves the
/// cosine geometry of the original rows.
fn reduce_dimensionality(tfidf: &Array2<f64>, max_components: usize) -> Result<Array2<f64>> {
    let (n_docs, n_terms) = tfidf.dim();
    let matrix = DMatrix::from_fn(n_docs, n_terms, |row, col| tfidf[[row, col]]);

    let svd = matrix.svd(true, false);
    let u = svd.u.context("SVD did not produce left singular vectors")?;

    let n_components = max_components
        .min(n_terms)
        .min(svd.singular_values.len());

    let mut reduced = Array2::<f64>::zeros((n_docs, n_components));
    for doc_idx in 0..n_docs {
        for component in 0..n_components {
            reduced[[doc_idx, component]] =
                u[(doc_idx, component)] * svd.singular_values[component];
        }
    }

    Ok(reduced)
}

fn cosine(a: ndarray::ArrayView1<f64>, b: ndarray::ArrayView1<f64>) -> f64 {
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    a.dot(&b) / (norm_a * norm_b)
}
