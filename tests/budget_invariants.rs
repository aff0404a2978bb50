use stitch_core::stitch::apply_word_budget;

fn lists(role_bullets: &[&[&str]]) -> Vec<Vec<String>> {
    role_bullets
        .iter()
        .map(|bullets| bullets.iter().map(|b| b.to_string()).collect())
        .collect()
}

fn total_words(lists: &[Vec<String>]) -> usize {
    lists
        .iter()
        .flatten()
        .map(|b| b.split_whitespace().count())
        .sum()
}

#[test]
fn no_budget_is_a_noop() {
    let input = lists(&[&["a b c", "d e f"], &["g h i"]]);
    let outcome = apply_word_budget(input.clone(), None, 2);

    assert_eq!(outcome.lists, input);
    assert!(!outcome.compression_applied);
}

#[test]
fn under_budget_is_a_noop() {
    let input = lists(&[&["a b c", "d e f"], &["g h i"]]);
    // Exactly at budget counts as within it.
    let outcome = apply_word_budget(input.clone(), Some(9), 2);

    assert_eq!(outcome.lists, input);
    assert!(!outcome.compression_applied);
}

#[test]
fn oldest_role_is_trimmed_from_the_end_down_to_its_floor() {
    // Role 0: 2 bullets / 12 words, role 1: 2 bullets / 10 words.
    let input = lists(&[
        &["alpha beta gamma delta epsilon zeta", "one two three four five six"],
        &["red orange yellow green blue", "cyan teal navy plum gray"],
    ]);
    let outcome = apply_word_budget(input.clone(), Some(10), 1);

    assert!(outcome.compression_applied);
    assert_eq!(outcome.lists[0], input[0], "current role untouched");
    assert_eq!(
        outcome.lists[1],
        vec!["red orange yellow green blue".to_string()],
        "last bullet dropped first, trim stops at the floor"
    );
    // Budget remains unmet once every eligible role hits its floor.
    assert!(total_words(&outcome.lists) > 10);
}

#[test]
fn role_zero_is_never_trimmed() {
    let input = lists(&[&[
        "alpha beta gamma delta epsilon zeta",
        "one two three four five six",
    ]]);
    let outcome = apply_word_budget(input.clone(), Some(1), 1);

    assert_eq!(outcome.lists, input);
    assert!(outcome.compression_applied);
}

#[test]
fn trimming_starts_at_the_oldest_role() {
    let input = lists(&[
        &["a b"],
        &["c d", "e f"],
        &["g h", "i j", "k l"],
    ]);
    // 12 words total; trimming role 2 alone reaches the budget.
    let outcome = apply_word_budget(input, Some(8), 1);

    assert!(outcome.compression_applied);
    assert_eq!(outcome.lists[1].len(), 2, "more recent role untouched");
    assert_eq!(outcome.lists[2], vec!["g h".to_string()]);
    assert_eq!(total_words(&outcome.lists), 8);
}

#[test]
fn per_role_floor_is_respected() {
    let input = lists(&[
        &["a b"],
        &["c d", "e f", "g h", "i j"],
    ]);
    let outcome = apply_word_budget(input, Some(1), 2);

    assert!(outcome.compression_applied);
    assert_eq!(outcome.lists[1].len(), 2, "never trimmed below the floor");
}

#[test]
fn roles_already_below_the_floor_lose_nothing() {
    let input = lists(&[&["a b"], &["c d"]]);
    let outcome = apply_word_budget(input.clone(), Some(1), 2);

    assert_eq!(outcome.lists, input);
    assert!(outcome.compression_applied);
}

#[test]
fn empty_input_stays_empty() {
    let outcome = apply_word_budget(Vec::new(), Some(5), 2);

    assert!(outcome.lists.is_empty());
    assert!(!outcome.compression_applied);
}
