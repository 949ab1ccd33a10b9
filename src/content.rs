use crate::models::{AnswerOption, Icon, Outcome, OutcomeKind, Question, QuizDefinition};

pub const DEFAULT_QUIZ_ID: &str = "onboarding";

pub fn default_quiz() -> QuizDefinition {
    QuizDefinition {
        id: DEFAULT_QUIZ_ID.to_string(),
        title: "Descoperă-ți echilibrul".to_string(),
        questions: vec![
            Question {
                ordinal: 1,
                prompt: "Cum te simți în ultima vreme?".to_string(),
                options: vec![
                    AnswerOption::new("Stresat(ă) și tensionat(ă)", "stressed", Icon::Storm),
                    AnswerOption::new("Obosit(ă), fără energie", "tired", Icon::Battery),
                    AnswerOption::new("Trist(ă) sau melancolic(ă)", "sad", Icon::Sad),
                    AnswerOption::new("Calm(ă) și liniștit(ă)", "calm", Icon::Leaf),
                ],
            },
            Question {
                ordinal: 2,
                prompt: "Ce îți dorești cel mai mult acum?".to_string(),
                options: vec![
                    AnswerOption::new("Liniște interioară", "seeking-calm", Icon::Peace),
                    AnswerOption::new("Mai multă energie", "seeking-energy", Icon::Bolt),
                    AnswerOption::new("Echilibru emoțional", "seeking-balance", Icon::Scale),
                    AnswerOption::new("Să mă cunosc mai bine", "self-discovery", Icon::Compass),
                ],
            },
            Question {
                ordinal: 3,
                prompt: "Cât de des te simți copleșit(ă)?".to_string(),
                options: vec![
                    AnswerOption::new("Aproape zilnic", "overwhelmed", Icon::Wave),
                    AnswerOption::new("Uneori", "sometimes", Icon::Cloud),
                    AnswerOption::new("Rar", "rarely", Icon::Sun),
                ],
            },
            Question {
                ordinal: 4,
                prompt: "Cum dormi de obicei?".to_string(),
                options: vec![
                    AnswerOption::new("Prost, mă trezesc des", "poor-sleep", Icon::Moon),
                    AnswerOption::new("Variabil", "irregular-sleep", Icon::Cloud),
                    AnswerOption::new("Bine, mă odihnesc", "good-sleep", Icon::Star),
                ],
            },
        ],
    }
}

pub static STRESS_RELIEF: Outcome = Outcome {
    kind: OutcomeKind::StressRelief,
    icon: Icon::Peace,
    title: "Găsește-ți liniștea",
    subtitle: "Te ajutăm să reduci stresul și să respiri din nou ușor.",
    benefits: &[
        "Exerciții de respirație ghidată",
        "Meditații scurte pentru momentele tensionate",
        "Jurnal pentru descărcarea gândurilor",
    ],
};

pub static ENERGY_BOOST: Outcome = Outcome {
    kind: OutcomeKind::EnergyBoost,
    icon: Icon::Bolt,
    title: "Reîncarcă-ți energia",
    subtitle: "Descoperă ce îți consumă energia și cum o poți recupera.",
    benefits: &[
        "Ritualuri de dimineață pentru vitalitate",
        "Urmărirea nivelului zilnic de energie",
        "Sfaturi pentru un somn odihnitor",
    ],
};

pub static EMOTIONAL_BALANCE: Outcome = Outcome {
    kind: OutcomeKind::EmotionalBalance,
    icon: Icon::Scale,
    title: "Regăsește-ți echilibrul",
    subtitle: "Învață să-ți înțelegi emoțiile și să le accepți cu blândețe.",
    benefits: &[
        "Jurnal emoțional zilnic",
        "Afirmații pozitive personalizate",
        "Exerciții de recunoștință",
    ],
};

pub static GENERAL_WELLBEING: Outcome = Outcome {
    kind: OutcomeKind::General,
    icon: Icon::Heart,
    title: "Continuă să crești",
    subtitle: "Ești pe drumul cel bun. Hai să menținem starea ta de bine.",
    benefits: &[
        "Monitorizarea stării de spirit",
        "Provocări zilnice de bunăstare",
        "Statistici despre progresul tău",
    ],
};

pub fn outcome_for(kind: OutcomeKind) -> &'static Outcome {
    match kind {
        OutcomeKind::StressRelief => &STRESS_RELIEF,
        OutcomeKind::EnergyBoost => &ENERGY_BOOST,
        OutcomeKind::EmotionalBalance => &EMOTIONAL_BALANCE,
        OutcomeKind::General => &GENERAL_WELLBEING,
    }
}

pub const AFFIRMATIONS: &[&str] = &[
    "Sunt suficient(ă) exact așa cum sunt.",
    "Fiecare respirație mă aduce mai aproape de liniște.",
    "Îmi permit să mă odihnesc fără vinovăție.",
    "Emoțiile mele sunt valide și trecătoare.",
    "Astăzi aleg să fiu blând(ă) cu mine.",
    "Energia mea crește când am grijă de mine.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quiz_is_well_formed() {
        let quiz = default_quiz();
        assert_eq!(quiz.len(), 4);
        assert!(quiz.validate().is_ok());
        for (i, q) in quiz.questions.iter().enumerate() {
            assert_eq!(q.ordinal, i + 1);
            assert!((3..=4).contains(&q.options.len()));
        }
    }

    #[test]
    fn test_outcome_for_matches_kind() {
        for kind in [
            OutcomeKind::StressRelief,
            OutcomeKind::EnergyBoost,
            OutcomeKind::EmotionalBalance,
            OutcomeKind::General,
        ] {
            let outcome = outcome_for(kind);
            assert_eq!(outcome.kind, kind);
            assert!(!outcome.benefits.is_empty());
        }
    }
}
