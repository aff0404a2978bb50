use tracing::debug;

use crate::similarity::{CompositeScorer, SimilarityScorer};
use crate::types::{DuplicatePair, RoleBullets};

/// Finds cross-role duplicate bullets.
///
/// Every (i, j) role pair with i < j is compared — not just adjacent roles —
/// and within each role pair every cross-role bullet combination is scored.
/// Bullets are never compared within a single role. The more recent role
/// always keeps its bullet; the older role's is flagged for removal, so
/// `kept_role_index < removed_role_index` holds for every recorded pair.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector<S = CompositeScorer> {
    scorer: S,
}

impl<S: SimilarityScorer> DuplicateDetector<S> {
    pub fn new(scorer: S) -> Self {
        DuplicateDetector { scorer }
    }

    /// O(R²·B²) over roles and bullets; fine at CV scale (≤ ~12 each).
    pub fn find(&self, roles: &[RoleBullets], threshold: f32) -> Vec<DuplicatePair> {
        let mut pairs = Vec::new();
        for i in 0..roles.len() {
            for j in (i + 1)..roles.len() {
                for kept in &roles[i].bullets {
                    for candidate in &roles[j].bullets {
                        let scored = self.scorer.score(&kept.text, &candidate.text);
                        if scored.value >= threshold {
                            pairs.push(DuplicatePair {
                                removed_text: candidate.text.clone(),
                                removed_role_index: j,
                                kept_text: kept.text.clone(),
                                kept_role_index: i,
                                similarity_score: scored.value,
                                reason: scored.reason,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            roles = roles.len(),
            duplicate_pairs = pairs.len(),
            "duplicate scan complete"
        );
        pairs
    }
}
