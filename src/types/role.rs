use serde::{Deserialize, Serialize};

/// One achievement statement authored upstream by the bullet generator.
///
/// Opaque to the stitcher: the text is never rewritten, only kept or
/// dropped. `source_text` optionally carries the raw text the generator
/// worked from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBullet {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl GeneratedBullet {
    pub fn new(text: impl Into<String>) -> Self {
        GeneratedBullet {
            text: text.into(),
            source_text: None,
        }
    }
}

/// One work-history role and its candidate bullets.
///
/// Roles arrive recency-descending: index 0 is the current role and higher
/// indices reach further into the past. The stitcher trusts that order and
/// never re-derives it. Role ids are unique within one input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBullets {
    pub role_id: String,
    pub company: String,
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Ordered most-important-first by the generator.
    pub bullets: Vec<GeneratedBullet>,
    /// Skill lists arrive already normalized to plain strings upstream.
    /// Order is preserved so the first occurrence's casing wins at merge.
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}
