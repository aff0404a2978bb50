use tracing::debug;

pub struct BudgetOutcome {
    pub lists: Vec<Vec<String>>,
    pub compression_applied: bool,
}

/// Trims bullet lists toward a total word budget.
///
/// Trimming starts at the oldest role (highest index) and walks toward the
/// present, dropping each role's last bullet while the role stays above its
/// floor and the total stays above budget. Role 0 — the current role — is
/// never trimmed under any budget.
///
/// Dropping from the end assumes the generator ordered each role's bullets
/// most-important-first. That is an upstream convention, not something
/// verified here.
///
/// Exhausting every eligible role while still over budget is a recorded
/// outcome, not an error: `compression_applied` stays true and the caller
/// sees the real word count.
pub fn apply_word_budget(
    lists: Vec<Vec<String>>,
    word_budget: Option<usize>,
    min_bullets_per_role: usize,
) -> BudgetOutcome {
    let budget = match word_budget {
        Some(budget) => budget,
        None => {
            return BudgetOutcome {
                lists,
                compression_applied: false,
            }
        }
    };

    let mut total = total_word_count(&lists);
    if total <= budget {
        return BudgetOutcome {
            lists,
            compression_applied: false,
        };
    }

    let mut lists = lists;
    for index in (1..lists.len()).rev() {
        while lists[index].len() > min_bullets_per_role && total > budget {
            if let Some(dropped) = lists[index].pop() {
                total -= word_count(&dropped);
            }
        }
        if total <= budget {
            break;
        }
    }

    debug!(total_words = total, budget, "word budget enforced");
    BudgetOutcome {
        lists,
        compression_applied: true,
    }
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub(crate) fn total_word_count(lists: &[Vec<String>]) -> usize {
    lists.iter().flatten().map(|bullet| word_count(bullet)).sum()
}
