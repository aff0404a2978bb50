use std::collections::BTreeSet;

use crate::types::{DuplicatePair, RoleBullets};

/// Applies detector output: every flagged `(role_index, text)` bullet is
/// dropped exactly once, however many pairs flagged it. Survivors keep
/// their original within-role order; unflagged roles pass through intact.
pub fn remove_duplicates(roles: &[RoleBullets], pairs: &[DuplicatePair]) -> Vec<Vec<String>> {
    let to_remove: BTreeSet<(usize, &str)> = pairs
        .iter()
        .map(|pair| (pair.removed_role_index, pair.removed_text.as_str()))
        .collect();

    roles
        .iter()
        .enumerate()
        .map(|(index, role)| {
            role.bullets
                .iter()
                .filter(|bullet| !to_remove.contains(&(index, bullet.text.as_str())))
                .map(|bullet| bullet.text.clone())
                .collect()
        })
        .collect()
}
