use crate::content::outcome_for;
use crate::models::{Outcome, OutcomeKind};

struct Rule {
    kind: OutcomeKind,
    keywords: &'static [&'static str],
}

/// Checked top to bottom; the first rule with a matching tag wins.
const RULES: &[Rule] = &[
    Rule {
        kind: OutcomeKind::StressRelief,
        keywords: &["stressed", "overwhelmed", "seeking-calm"],
    },
    Rule {
        kind: OutcomeKind::EnergyBoost,
        keywords: &["tired", "seeking-energy", "poor-sleep"],
    },
    Rule {
        kind: OutcomeKind::EmotionalBalance,
        keywords: &["sad", "seeking-balance", "irregular-sleep"],
    },
];

pub fn select_outcome_kind<S: AsRef<str>>(tags: &[S]) -> OutcomeKind {
    RULES
        .iter()
        .find(|rule| {
            tags.iter()
                .any(|tag| rule.keywords.contains(&tag.as_ref()))
        })
        .map(|rule| rule.kind)
        .unwrap_or(OutcomeKind::General)
}

pub fn select_outcome<S: AsRef<str>>(tags: &[S]) -> &'static Outcome {
    outcome_for(select_outcome_kind(tags))
}
