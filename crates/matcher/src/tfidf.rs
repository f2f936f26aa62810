//! TF-IDF weighted cosine similarity over token-frequency vectors.
//!
//! For every token in the union of both names:
//!
//! ```text
//! tf    = ln(1 + count)
//! idf   = ln(total_docs / (1 + table.get(token).unwrap_or(default_idf)))
//! w     = tf · idf
//! score = Σ w_a·w_b / (‖w_a‖ · ‖w_b‖)
//! ```
//!
//! Vectors are ordered maps, so the accumulation order over the union is the
//! same whichever name comes first and the score is exactly symmetric.

use std::collections::{BTreeMap, BTreeSet};

use crate::idf::IdfTable;
use crate::types::TfIdfParams;

/// Occurrence count per token for one clean name. Every stored count is >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequencyVector {
    counts: BTreeMap<String, u32>,
}

impl TokenFrequencyVector {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = BTreeMap::new();
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0u32) += 1;
        }
        Self { counts }
    }

    /// Count of `token`, 0 when absent.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// IDF weight of `token` under `params`.
pub fn idf_weight(token: &str, table: &IdfTable, params: &TfIdfParams) -> f64 {
    let raw = table.get(token).unwrap_or(params.default_idf);
    (params.total_docs / (1.0 + raw)).ln()
}

/// Cosine similarity of the TF-IDF weighted vectors, in `[0, 1]`.
///
/// Returns `0.0` when either weighted vector has zero norm (an empty vector,
/// or only tokens whose IDF weight is zero).
pub fn tfidf_cosine(
    a: &TokenFrequencyVector,
    b: &TokenFrequencyVector,
    table: &IdfTable,
    params: &TfIdfParams,
) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let union: BTreeSet<&str> = a
        .counts
        .keys()
        .chain(b.counts.keys())
        .map(String::as_str)
        .collect();

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for token in union {
        let tf_a = (1.0 + f64::from(a.count(token))).ln();
        let tf_b = (1.0 + f64::from(b.count(token))).ln();
        let idf = idf_weight(token, table, params);

        let w_a = tf_a * idf;
        let w_b = tf_b * idf;

        dot += w_a * w_b;
        norm_a += w_a * w_a;
        norm_b += w_b * w_b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Convenience wrapper: build both vectors from token slices and score them.
pub fn token_score<S: AsRef<str>>(
    a_tokens: &[S],
    b_tokens: &[S],
    table: &IdfTable,
    params: &TfIdfParams,
) -> f64 {
    let a = TokenFrequencyVector::from_tokens(a_tokens);
    let b = TokenFrequencyVector::from_tokens(b_tokens);
    tfidf_cosine(&a, &b, table, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn frequency_vector_counts_and_skips_empty() {
        let v = TokenFrequencyVector::from_tokens(["西湖", "", "西湖", "断桥"]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.count("西湖"), 2);
        assert_eq!(v.count("断桥"), 1);
        assert_eq!(v.count("雷峰塔"), 0);
        assert!(v.iter().all(|(_, c)| c >= 1));
    }

    #[test]
    fn identical_token_bags_score_one() {
        let table = IdfTable::empty();
        let params = TfIdfParams::default();
        let score = token_score(&["北京", "朝阳"], &["朝阳", "北京"], &table, &params);
        assert!(approx(score, 1.0));
    }

    #[test]
    fn disjoint_token_bags_score_zero() {
        let score = token_score(
            &["西湖"],
            &["黄山"],
            &IdfTable::empty(),
            &TfIdfParams::default(),
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        let empty: [&str; 0] = [];
        let score = token_score(&empty, &["西湖"], &IdfTable::empty(), &TfIdfParams::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn unseen_tokens_use_default_idf() {
        let params = TfIdfParams::default();
        let expected = (10_000.0f64 / 2.0).ln();
        assert!(approx(idf_weight("unseen", &IdfTable::empty(), &params), expected));

        let table: IdfTable = [("seen", 99.0)].into_iter().collect();
        assert!(approx(idf_weight("seen", &table, &params), (100.0f64).ln()));
    }

    #[test]
    fn weighted_cosine_matches_hand_computation() {
        // a = {x:1, y:1}, b = {x:1, z:2}
        let table: IdfTable = [("x", 9.0), ("y", 0.0), ("z", 4.0)].into_iter().collect();
        let params = TfIdfParams {
            total_docs: 100.0,
            default_idf: 1.0,
        };
        let idf_x = (100.0f64 / 10.0).ln();
        let idf_y = (100.0f64 / 1.0).ln();
        let idf_z = (100.0f64 / 5.0).ln();
        let ln2 = 2.0f64.ln();
        let ln3 = 3.0f64.ln();

        let wa = [ln2 * idf_x, ln2 * idf_y, 0.0];
        let wb = [ln2 * idf_x, 0.0, ln3 * idf_z];
        let dot: f64 = wa.iter().zip(wb.iter()).map(|(p, q)| p * q).sum();
        let na: f64 = wa.iter().map(|p| p * p).sum::<f64>().sqrt();
        let nb: f64 = wb.iter().map(|q| q * q).sum::<f64>().sqrt();
        let expected = dot / (na * nb);

        let score = token_score(&["x", "y"], &["x", "z", "z"], &table, &params);
        assert!((score - expected).abs() < 1e-9);
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn zero_idf_tokens_carry_no_weight() {
        // total_docs / (1 + 9) = 1 → ln(1) = 0
        let table: IdfTable = [("common", 9.0)].into_iter().collect();
        let params = TfIdfParams {
            total_docs: 10.0,
            default_idf: 1.0,
        };
        let score = token_score(&["common"], &["common"], &table, &params);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn exactly_symmetric() {
        let table: IdfTable = [("北京", 50.0), ("朝阳", 3.0)].into_iter().collect();
        let params = TfIdfParams::default();
        let a = ["北京", "朝阳", "公园", "公园"];
        let b = ["朝阳", "公园", "东门"];
        assert_eq!(
            token_score(&a, &b, &table, &params),
            token_score(&b, &a, &table, &params)
        );
    }

    #[test]
    fn rare_shared_token_outweighs_common_one() {
        // Sharing the distinctive token scores higher than sharing the common one.
        let table: IdfTable = [("rare", 0.0), ("common", 500.0)].into_iter().collect();
        let params = TfIdfParams::default();
        let shared_rare = token_score(&["rare", "a"], &["rare", "b"], &table, &params);
        let shared_common = token_score(&["common", "a"], &["common", "b"], &table, &params);
        assert!(shared_rare > shared_common);
    }
}
