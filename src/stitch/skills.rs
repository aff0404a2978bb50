use std::collections::BTreeSet;

/// Merges a role's hard and soft skills into one ordered list.
///
/// Hard skills come first, then soft; within that concatenation, skills
/// matching a target keyword float to the front. Relative order inside each
/// partition is preserved, duplicates collapse case-insensitively with the
/// first occurrence's casing winning, and the result truncates at
/// `max_skills`.
pub fn merge_skills(
    hard_skills: &[String],
    soft_skills: &[String],
    target_keywords_lower: &BTreeSet<String>,
    max_skills: usize,
) -> Vec<String> {
    let mut matched = Vec::new();
    let mut others = Vec::new();
    let mut seen = BTreeSet::new();

    for skill in hard_skills.iter().chain(soft_skills) {
        let lower = skill.to_lowercase();
        if !seen.insert(lower.clone()) {
            continue;
        }
        if target_keywords_lower.contains(&lower) {
            matched.push(skill.clone());
        } else {
            others.push(skill.clone());
        }
    }

    matched.extend(others);
    matched.truncate(max_skills);
    matched
}
