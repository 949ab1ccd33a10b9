use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyphs shown next to answer options, moods and outcome benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Storm,
    Battery,
    Rain,
    Leaf,
    Peace,
    Bolt,
    Scale,
    Compass,
    Wave,
    Cloud,
    Sun,
    Moon,
    Star,
    Heart,
    Sparkle,
    Sad,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Storm => "⛈",
            Icon::Battery => "🔋",
            Icon::Rain => "🌧",
            Icon::Leaf => "🍃",
            Icon::Peace => "🕊",
            Icon::Bolt => "⚡",
            Icon::Scale => "⚖",
            Icon::Compass => "🧭",
            Icon::Wave => "🌊",
            Icon::Cloud => "☁",
            Icon::Sun => "☀",
            Icon::Moon => "🌙",
            Icon::Star => "⭐",
            Icon::Heart => "❤",
            Icon::Sparkle => "✨",
            Icon::Sad => "😔",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub tag: String,
    pub icon: Icon,
}

impl AnswerOption {
    pub fn new(text: &str, tag: &str, icon: Icon) -> Self {
        Self {
            text: text.to_string(),
            tag: tag.to_string(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based position inside the quiz.
    pub ordinal: usize,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn accepts(&self, tag: &str) -> bool {
        self.options.iter().any(|o| o.tag == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDefinition {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizDefinitionError {
    #[error("Chestionarul nu are nicio întrebare.")]
    NoQuestions,
    #[error("Întrebarea {ordinal} are mai puțin de două variante de răspuns.")]
    TooFewOptions { ordinal: usize },
    #[error("Întrebarea {ordinal} repetă eticheta „{tag}”.")]
    DuplicateTag { ordinal: usize, tag: String },
}

impl QuizDefinition {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn validate(&self) -> Result<(), QuizDefinitionError> {
        if self.questions.is_empty() {
            return Err(QuizDefinitionError::NoQuestions);
        }
        for question in &self.questions {
            if question.options.len() < 2 {
                return Err(QuizDefinitionError::TooFewOptions {
                    ordinal: question.ordinal,
                });
            }
            for (i, option) in question.options.iter().enumerate() {
                if question.options[..i].iter().any(|o| o.tag == option.tag) {
                    return Err(QuizDefinitionError::DuplicateTag {
                        ordinal: question.ordinal,
                        tag: option.tag.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    StressRelief,
    EnergyBoost,
    EmotionalBalance,
    General,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::StressRelief => "stress_relief",
            OutcomeKind::EnergyBoost => "energy_boost",
            OutcomeKind::EmotionalBalance => "emotional_balance",
            OutcomeKind::General => "general",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stress_relief" => Some(OutcomeKind::StressRelief),
            "energy_boost" => Some(OutcomeKind::EnergyBoost),
            "emotional_balance" => Some(OutcomeKind::EmotionalBalance),
            "general" => Some(OutcomeKind::General),
            _ => None,
        }
    }
}

/// Canned message shown when the quiz completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Bad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Great, Mood::Good, Mood::Okay, Mood::Low, Mood::Bad];

    pub fn score(self) -> u8 {
        match self {
            Mood::Great => 5,
            Mood::Good => 4,
            Mood::Okay => 3,
            Mood::Low => 2,
            Mood::Bad => 1,
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Mood::ALL.into_iter().find(|m| m.score() == score)
    }

    pub fn icon(self) -> Icon {
        match self {
            Mood::Great => Icon::Sun,
            Mood::Good => Icon::Sparkle,
            Mood::Okay => Icon::Cloud,
            Mood::Low => Icon::Rain,
            Mood::Bad => Icon::Storm,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Great => "Minunat",
            Mood::Good => "Bine",
            Mood::Okay => "Așa și așa",
            Mood::Low => "Slăbit",
            Mood::Bad => "Rău",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Low => "low",
            Mood::Bad => "bad",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Mood::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: Option<u64>,
    pub date: NaiveDate,
    pub mood: Mood,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub newsletter: bool,
    pub quiz_completed: bool,
    pub created_at: u64,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    ProfileSetup,
    Dashboard,
    Quiz,
    QuizQuitConfirm,
    Outcome,
    Journal,
}
