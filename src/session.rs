use crate::logger;
use crate::models::{AppState, Question, QuizDefinition};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

/// How long a tapped option stays highlighted before the answer is committed.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering(usize),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    AlreadyCompleted,
    UnknownTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Advanced(usize),
    Completed,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub tag: String,
    pub since: Instant,
}

/// One pass through a quiz. Nothing here is persisted; dropping it abandons
/// the attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: QuizDefinition,
    current_index: usize,
    collected: Vec<String>,
    completed: bool,
    highlighted: Option<Highlight>,
    /// Option under the keyboard cursor on the current question.
    pub cursor: usize,
    /// Distinguishes this attempt from earlier ones when results come back
    /// from the completion worker.
    pub generation: u64,
}

impl QuizSession {
    pub fn new(quiz: QuizDefinition, generation: u64) -> Self {
        Self {
            quiz,
            current_index: 0,
            collected: Vec::new(),
            completed: false,
            highlighted: None,
            cursor: 0,
            generation,
        }
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else {
            QuizPhase::Answering(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.quiz.questions.get(self.current_index)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn collected_tags(&self) -> &[String] {
        &self.collected
    }

    pub fn highlighted(&self) -> Option<&Highlight> {
        self.highlighted.as_ref()
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.collected.len(), self.quiz.len())
    }

    pub fn progress_percent(&self) -> u16 {
        let (answered, total) = self.progress();
        if total == 0 {
            return 0;
        }
        ((answered * 100) / total) as u16
    }

    pub fn select_answer(&mut self, tag: &str) -> Selection {
        if self.completed {
            logger::warn(&format!("Ignoring answer '{}' on a completed quiz", tag));
            return Selection::Rejected(RejectReason::AlreadyCompleted);
        }
        // An empty quiz has no question that could accept the tag.
        let Some(question) = self.quiz.questions.get(self.current_index) else {
            logger::warn(&format!("Rejecting tag '{}': quiz has no questions", tag));
            return Selection::Rejected(RejectReason::UnknownTag);
        };
        if !question.accepts(tag) {
            logger::warn(&format!(
                "Rejecting tag '{}' for question {}",
                tag, question.ordinal
            ));
            return Selection::Rejected(RejectReason::UnknownTag);
        }

        self.collected.push(tag.to_string());
        self.highlighted = None;
        self.cursor = 0;

        if self.current_index + 1 >= self.quiz.len() {
            self.completed = true;
            logger::info(&format!(
                "Quiz '{}' completed with tags {:?}",
                self.quiz.id, self.collected
            ));
            Selection::Completed
        } else {
            self.current_index += 1;
            Selection::Advanced(self.current_index)
        }
    }

    /// Marks an option as chosen without committing it yet. A later highlight
    /// replaces an earlier one.
    pub fn highlight(&mut self, tag: &str, now: Instant) -> bool {
        let accepted = self
            .current_question()
            .map(|q| q.accepts(tag))
            .unwrap_or(false);
        if accepted {
            self.highlighted = Some(Highlight {
                tag: tag.to_string(),
                since: now,
            });
        }
        accepted
    }

    /// Commits the pending highlight once it has been visible for
    /// [`SETTLE_DELAY`].
    pub fn settle(&mut self, now: Instant) -> Option<Selection> {
        let ready = self
            .highlighted
            .as_ref()
            .is_some_and(|h| now.saturating_duration_since(h.since) >= SETTLE_DELAY);
        if !ready {
            return None;
        }
        let highlight = self.highlighted.take()?;
        Some(self.select_answer(&highlight.tag))
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    handle_quiz_input_at(session, key, app_state, Instant::now());
}

pub fn handle_quiz_input_at(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    now: Instant,
) {
    if key.code == KeyCode::Esc {
        *app_state = AppState::QuizQuitConfirm;
        return;
    }

    // Input is ignored while a choice is settling.
    if session.highlighted.is_some() {
        return;
    }

    let Some(option_count) = session.current_question().map(|q| q.options.len()) else {
        return;
    };

    let chosen = match key.code {
        KeyCode::Up => {
            session.cursor = session.cursor.saturating_sub(1);
            None
        }
        KeyCode::Down => {
            if session.cursor < option_count.saturating_sub(1) {
                session.cursor += 1;
            }
            None
        }
        KeyCode::Enter => Some(session.cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=option_count).contains(d))
            .map(|d| d - 1),
        _ => None,
    };

    if let Some(index) = chosen {
        session.cursor = index;
        let tag = session
            .current_question()
            .and_then(|q| q.options.get(index))
            .map(|o| o.tag.clone());
        if let Some(tag) = tag {
            session.highlight(&tag, now);
        }
    }
}
