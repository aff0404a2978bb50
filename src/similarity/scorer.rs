use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numeric tokens carried by a bullet. Percentages first so "40%" is
/// consumed whole, then comma-grouped numbers, then plain multi-digit runs.
static METRIC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%|\d{1,3}(?:,\d{3})+|\d{2,}").unwrap());

/// Achievement and domain terms that signal two bullets describe the same
/// kind of work. Common CV verbs plus the nouns that dominate engineering
/// bullets. Lowercase; matched against lowercased word tokens.
const KEYWORD_VOCABULARY: &[&str] = &[
    "architected",
    "automated",
    "availability",
    "built",
    "cost",
    "costs",
    "customers",
    "decreased",
    "deliver",
    "delivered",
    "delivery",
    "deployment",
    "designed",
    "developed",
    "engineers",
    "growth",
    "implemented",
    "improved",
    "increased",
    "infrastructure",
    "latency",
    "launched",
    "led",
    "managed",
    "mentored",
    "migrated",
    "migration",
    "optimized",
    "owned",
    "performance",
    "pipeline",
    "platform",
    "reduced",
    "reliability",
    "revenue",
    "scaled",
    "security",
    "shipped",
    "stakeholders",
    "team",
    "throughput",
    "uptime",
    "users",
];

/// A scored comparison of two bullet texts.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityScore {
    /// Duplication likelihood in `[0.0, 1.0]`.
    pub value: f32,
    /// Which signal dominated the verdict.
    pub reason: String,
}

/// Strategy seam for duplicate scoring. The composite heuristic below is
/// the v0 implementation; an embedding-based scorer can slot in without
/// touching detection or budgeting.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> SimilarityScore;
}

/// Relative weight of each similarity signal. Tuned constants, so they are
/// configuration rather than algorithm internals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub lexical: f32,
    pub keyword: f32,
    pub metric: f32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        SimilarityWeights {
            lexical: 0.5,
            keyword: 0.3,
            metric: 0.2,
        }
    }
}

impl SimilarityWeights {
    /// Weights must be non-negative with a positive sum.
    pub fn is_valid(&self) -> bool {
        let all_finite_non_negative = [self.lexical, self.keyword, self.metric]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);
        all_finite_non_negative && self.lexical + self.keyword + self.metric > 0.0
    }
}

/// v0: three case-insensitive signals.
///
/// 1. Lexical: longest-matching-blocks ratio over the full lowercased
///    strings.
/// 2. Keyword: Jaccard similarity of each text's intersection with the
///    fixed achievement vocabulary.
/// 3. Metric: Jaccard similarity of extracted numeric tokens.
///
/// A signal whose token sets are empty on either side carries no evidence
/// in either direction; it is left out of the combination and the remaining
/// weights are renormalized instead of dragging the score toward zero.
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: SimilarityWeights,
}

impl CompositeScorer {
    pub fn new(weights: SimilarityWeights) -> Self {
        CompositeScorer { weights }
    }
}

impl SimilarityScorer for CompositeScorer {
    fn score(&self, a: &str, b: &str) -> SimilarityScore {
        let a = a.to_lowercase();
        let b = b.to_lowercase();

        let lexical = matching_blocks_ratio(&a, &b);

        let keywords_a = vocabulary_hits(&a);
        let keywords_b = vocabulary_hits(&b);
        let keyword_jaccard = if keywords_a.is_empty() || keywords_b.is_empty() {
            None
        } else {
            Some(jaccard(&keywords_a, &keywords_b))
        };

        let metrics_a = metric_tokens(&a);
        let metrics_b = metric_tokens(&b);
        let metric_jaccard = if metrics_a.is_empty() || metrics_b.is_empty() {
            None
        } else {
            Some(jaccard(&metrics_a, &metrics_b))
        };

        let mut numerator = self.weights.lexical * lexical;
        let mut denominator = self.weights.lexical;
        if let Some(kj) = keyword_jaccard {
            numerator += self.weights.keyword * kj;
            denominator += self.weights.keyword;
        }
        if let Some(mj) = metric_jaccard {
            numerator += self.weights.metric * mj;
            denominator += self.weights.metric;
        }

        let value = if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        };
        debug_assert!(
            (0.0..=1.0).contains(&value),
            "similarity {value} out of range [0.0, 1.0]"
        );

        let reason = if metric_jaccard.unwrap_or(0.0) > 0.5 {
            "same metrics"
        } else if keyword_jaccard.unwrap_or(0.0) > 0.6 {
            "similar keywords"
        } else if lexical > 0.7 {
            "high text similarity"
        } else {
            "general similarity"
        };

        SimilarityScore {
            value,
            reason: reason.to_string(),
        }
    }
}

/// Ratio of characters covered by matching blocks: `2*M / (len(a)+len(b))`
/// where M sums the block sizes found by recursively locating the longest
/// common block, earliest occurrence winning ties.
fn matching_blocks_ratio(a: &str, b: &str) -> f32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b_positions.entry(*ch).or_default().push(j);
    }

    let mut matched = 0usize;
    let mut regions = vec![(0usize, a.len(), 0usize, b.len())];
    while let Some((a_lo, a_hi, b_lo, b_hi)) = regions.pop() {
        let (i, j, size) = longest_match(&a, &b_positions, a_lo, a_hi, b_lo, b_hi);
        if size > 0 {
            matched += size;
            regions.push((a_lo, i, b_lo, j));
            regions.push((i + size, a_hi, j + size, b_hi));
        }
    }

    2.0 * matched as f32 / (a.len() + b.len()) as f32
}

/// Longest block of `a[a_lo..a_hi]` also present in `b[b_lo..b_hi]`.
/// Dynamic run lengths keyed by end position in `b`, one row at a time.
fn longest_match(
    a: &[char],
    b_positions: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let mut best = (a_lo, b_lo, 0usize);
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in a_lo..a_hi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let length = if j == 0 {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_runs.insert(j, length);
                if length > best.2 {
                    best = (i + 1 - length, j + 1 - length, length);
                }
            }
        }
        run_lengths = next_runs;
    }
    best
}

/// Word tokens of `text` that belong to the achievement vocabulary.
fn vocabulary_hits(text: &str) -> BTreeSet<&'static str> {
    let vocabulary: &[&str] = KEYWORD_VOCABULARY;
    let mut hits = BTreeSet::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if let Ok(index) = vocabulary.binary_search(&word) {
            hits.insert(KEYWORD_VOCABULARY[index]);
        }
    }
    hits
}

fn metric_tokens(text: &str) -> BTreeSet<&str> {
    METRIC_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f32 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_sorted_for_binary_search() {
        assert!(KEYWORD_VOCABULARY.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn matching_blocks_ratio_identical_and_disjoint() {
        assert_eq!(matching_blocks_ratio("abc", "abc"), 1.0);
        assert_eq!(matching_blocks_ratio("abc", "xyz"), 0.0);
        assert_eq!(matching_blocks_ratio("", ""), 1.0);
        assert_eq!(matching_blocks_ratio("abc", ""), 0.0);
    }

    #[test]
    fn metric_tokens_extract_percents_and_grouped_numbers() {
        let tokens = metric_tokens("cut latency 40% and served 100,000 users in 2023");
        let expected: BTreeSet<&str> = ["40%", "100,000", "2023"].into_iter().collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn single_digit_numbers_are_not_metrics() {
        assert!(metric_tokens("team of 8 engineers").is_empty());
    }
}
