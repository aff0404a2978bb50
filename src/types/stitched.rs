use serde::{Deserialize, Serialize};

/// One resolved cross-role duplicate: the older role's bullet is removed
/// in favor of the more recent role's.
///
/// Invariant: `kept_role_index < removed_role_index` — the more recent
/// role always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub removed_text: String,
    pub removed_role_index: usize,
    pub kept_text: String,
    pub kept_role_index: usize,
    pub similarity_score: f32,
    pub reason: String,
}

/// Accounting for everything the pipeline dropped, duplicates and budget
/// trims alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeduplicationResult {
    pub original_bullet_count: usize,
    pub final_bullet_count: usize,
    pub removed_count: usize,
    pub duplicate_pairs: Vec<DuplicatePair>,
    pub compression_applied: bool,
}

impl DeduplicationResult {
    /// Fraction of original bullets removed; 0.0 when nothing came in.
    pub fn dedup_ratio(&self) -> f32 {
        if self.original_bullet_count == 0 {
            0.0
        } else {
            self.removed_count as f32 / self.original_bullet_count as f32
        }
    }
}

/// One assembled role in the final CV body. Surviving bullets keep their
/// original within-role order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchedRole {
    pub role_id: String,
    pub company: String,
    pub title: String,
    pub location: Option<String>,
    pub period: String,
    pub bullets: Vec<String>,
    pub skills: Vec<String>,
}

impl StitchedRole {
    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    /// Whitespace-token count over the role's retained bullets.
    pub fn word_count(&self) -> usize {
        self.bullets
            .iter()
            .map(|bullet| bullet.split_whitespace().count())
            .sum()
    }
}

/// The final result of a stitch operation. Owned entirely by the caller;
/// nothing persists inside the engine between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchedCV {
    pub roles: Vec<StitchedRole>,
    pub keywords_coverage: Vec<String>,
    pub deduplication_result: DeduplicationResult,
}

impl StitchedCV {
    pub fn total_bullet_count(&self) -> usize {
        self.roles.iter().map(StitchedRole::bullet_count).sum()
    }

    pub fn total_word_count(&self) -> usize {
        self.roles.iter().map(StitchedRole::word_count).sum()
    }
}
