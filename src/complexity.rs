//! Task complexity assessment.
//!
//! A small heuristic that decides whether a task warrants multi-agent
//! delegation: count how many indicator keywords appear in the task text
//! and normalize. Pure and deterministic — the dispatcher calls this once
//! per `auto`-mode execution.

/// Keywords that suggest multi-step work.
pub const COMPLEXITY_INDICATORS: [&str; 14] = [
    "research",
    "analyze",
    "investigate",
    "compare",
    "evaluate",
    "generate",
    "create",
    "synthesize",
    "design",
    "develop",
    "multi-step",
    "complex",
    "in-depth",
    "comprehensive",
];

/// Number of distinct indicators that saturate the score at 1.0.
const SATURATION_COUNT: f64 = 5.0;

/// Scores a task's complexity in `[0.0, 1.0]`.
///
/// Each indicator present in the task (case-insensitive substring match)
/// counts once; the count is divided by five and clamped to 1.0.
///
/// # Example
///
/// ```rust
/// use cadre_ai::complexity::score;
///
/// assert_eq!(score("what time is it"), 0.0);
/// assert!(score("research and analyze the market") > 0.0);
/// ```
#[must_use]
pub fn score(task: &str) -> f64 {
    let lowered = task.to_lowercase();
    let count = COMPLEXITY_INDICATORS
        .iter()
        .filter(|indicator| lowered.contains(*indicator))
        .count();

    (count as f64 / SATURATION_COUNT).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_indicators_scores_zero() {
        assert_eq!(score("what is the capital of France"), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn five_distinct_indicators_saturate() {
        let task = "research, analyze, compare, evaluate and synthesize the findings";
        assert_eq!(score(task), 1.0);
    }

    #[test]
    fn more_than_five_indicators_stay_clamped() {
        let task = "research analyze investigate compare evaluate generate create";
        assert_eq!(score(task), 1.0);
    }

    #[test]
    fn each_indicator_counts_once() {
        // Repetition of one keyword does not raise the score.
        assert_eq!(score("analyze analyze analyze analyze analyze analyze"), 0.2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score("ANALYZE the data"), 0.2);
        assert_eq!(score("Research And Design"), score("research and design"));
    }

    #[test]
    fn partial_scores_between_bounds() {
        let s = score("compare and evaluate the two options");
        assert!(s > 0.0 && s < 1.0);
        assert_eq!(s, 0.4);
    }

    #[test]
    fn score_is_deterministic() {
        let task = "design a comprehensive multi-step plan";
        assert_eq!(score(task), score(task));
    }
}
