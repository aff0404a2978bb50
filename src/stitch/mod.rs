pub mod budgeting;
pub mod keywords;
pub mod skills;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dedup::{remove_duplicates, DuplicateDetector};
use crate::similarity::{CompositeScorer, SimilarityScorer, SimilarityWeights};
use crate::types::{DeduplicationResult, RoleBullets, StitchedCV, StitchedRole};

pub use budgeting::{apply_word_budget, BudgetOutcome};
pub use keywords::keyword_coverage;
pub use skills::merge_skills;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("similarity threshold {0} outside [0.0, 1.0]")]
    ThresholdOutOfRange(f32),
    #[error("similarity weights must be non-negative with a positive sum")]
    DegenerateWeights,
}

/// Construction-time options. The tuned constants — the duplicate threshold
/// and the signal weights — live here rather than inside the algorithms so
/// callers can adjust them per corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitcherConfig {
    /// Target maximum total word count across retained bullets.
    /// `None` means unlimited.
    pub word_budget: Option<usize>,
    pub similarity_threshold: f32,
    pub min_bullets_per_role: usize,
    pub max_skills: usize,
    pub weights: SimilarityWeights,
}

impl Default for StitcherConfig {
    fn default() -> Self {
        StitcherConfig {
            word_budget: None,
            similarity_threshold: 0.75,
            min_bullets_per_role: 2,
            max_skills: 8,
            weights: SimilarityWeights::default(),
        }
    }
}

impl StitcherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.similarity_threshold));
        }
        if !self.weights.is_valid() {
            return Err(ConfigError::DegenerateWeights);
        }
        Ok(())
    }
}

/// Composes duplicate detection, removal, budget trimming, skill merging,
/// and keyword coverage into one pure `stitch` call.
///
/// Holds only immutable configuration and no shared mutable state: one
/// instance is safe to reuse across calls and to invoke concurrently from
/// multiple threads.
#[derive(Debug)]
pub struct Stitcher<S = CompositeScorer> {
    config: StitcherConfig,
    detector: DuplicateDetector<S>,
}

impl Default for Stitcher<CompositeScorer> {
    fn default() -> Self {
        let config = StitcherConfig::default();
        let detector = DuplicateDetector::new(CompositeScorer::new(config.weights));
        Stitcher { config, detector }
    }
}

impl Stitcher<CompositeScorer> {
    /// Validates the configuration and wires the composite scorer.
    /// Out-of-range thresholds and degenerate weights are caller bugs;
    /// they are rejected here, at the boundary, not at stitch time.
    pub fn new(config: StitcherConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let detector = DuplicateDetector::new(CompositeScorer::new(config.weights));
        Ok(Stitcher { config, detector })
    }
}

impl<S: SimilarityScorer> Stitcher<S> {
    /// Swaps in an alternative similarity strategy.
    pub fn with_scorer(config: StitcherConfig, scorer: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Stitcher {
            config,
            detector: DuplicateDetector::new(scorer),
        })
    }

    pub fn config(&self) -> &StitcherConfig {
        &self.config
    }

    /// Merges per-role bullets into one coherent CV body.
    ///
    /// Pure and deterministic; never panics on well-typed input. Empty or
    /// zero-bullet inputs degrade to empty and zero results.
    pub fn stitch(&self, roles: &[RoleBullets], target_keywords: &[String]) -> StitchedCV {
        // 1. Record the original bullet total before anything is dropped.
        let original_bullet_count: usize = roles.iter().map(|role| role.bullets.len()).sum();

        // 2. Cross-role duplicate scan.
        let duplicate_pairs = self.detector.find(roles, self.config.similarity_threshold);

        // 3. Drop the flagged (older) bullets.
        let deduplicated = remove_duplicates(roles, &duplicate_pairs);

        // 4. Word-budget trimming; role 0 stays intact.
        let BudgetOutcome {
            lists,
            compression_applied,
        } = apply_word_budget(
            deduplicated,
            self.config.word_budget,
            self.config.min_bullets_per_role,
        );

        // 5. Assemble roles, merging each one's skills.
        let target_lower: BTreeSet<String> = target_keywords
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect();
        let stitched_roles: Vec<StitchedRole> = roles
            .iter()
            .zip(&lists)
            .map(|(role, bullets)| StitchedRole {
                role_id: role.role_id.clone(),
                company: role.company.clone(),
                title: role.title.clone(),
                location: role.location.clone(),
                period: role.period.clone(),
                bullets: bullets.clone(),
                skills: merge_skills(
                    &role.hard_skills,
                    &role.soft_skills,
                    &target_lower,
                    self.config.max_skills,
                ),
            })
            .collect();

        // 6. Which target keywords survive into the final text.
        let keywords_coverage = keyword_coverage(&lists, target_keywords);

        // 7. Deduplication accounting; budget trims count as removed too.
        let final_bullet_count: usize = lists.iter().map(Vec::len).sum();
        let deduplication_result = DeduplicationResult {
            original_bullet_count,
            final_bullet_count,
            removed_count: original_bullet_count - final_bullet_count,
            duplicate_pairs,
            compression_applied,
        };

        debug!(
            roles = stitched_roles.len(),
            original_bullets = original_bullet_count,
            final_bullets = final_bullet_count,
            compression_applied,
            "stitch complete"
        );

        // 8. The caller owns the result outright.
        StitchedCV {
            roles: stitched_roles,
            keywords_coverage,
            deduplication_result,
        }
    }
}
