/// Reports which target keywords survive into the final bullet text.
///
/// A keyword counts as covered when its lowercase form appears as a
/// substring of the lowercased concatenation of all retained bullets.
/// Covered keywords keep their original casing and input order.
pub fn keyword_coverage(lists: &[Vec<String>], target_keywords: &[String]) -> Vec<String> {
    if target_keywords.is_empty() {
        return Vec::new();
    }

    let corpus = lists
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    target_keywords
        .iter()
        .filter(|keyword| corpus.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}
