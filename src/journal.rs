use crate::calendar::{days_in_month, first_of_month, shift_month};
use crate::models::{JournalEntry, Mood};
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEditor {
    pub mood: Option<Mood>,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalAction {
    None,
    Back,
    Save(JournalEntry),
    Export,
    Import,
}

#[derive(Debug, Clone)]
pub struct JournalView {
    /// Zero-based month.
    pub month: u32,
    pub year: i32,
    pub selected_day: u32,
    pub editor: Option<EntryEditor>,
}

impl JournalView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: today.month0(),
            year: today.year(),
            selected_day: today.day(),
            editor: None,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        first_of_month(self.month, self.year)
            .map(|first| first + Duration::days(self.selected_day as i64 - 1))
    }

    pub fn change_month(&mut self, delta: i32) {
        let (month, year) = shift_month(self.month, self.year, delta);
        self.month = month;
        self.year = year;
        self.selected_day = self.selected_day.min(days_in_month(month, year)).max(1);
    }

    /// Moves the selection, stepping into neighbouring months at the edges.
    pub fn move_selection(&mut self, days: i64) {
        let Some(target) = self
            .selected_date()
            .and_then(|d| d.checked_add_signed(Duration::days(days)))
        else {
            return;
        };
        self.month = target.month0();
        self.year = target.year();
        self.selected_day = target.day();
    }
}

pub fn handle_journal_input(view: &mut JournalView, key: KeyEvent) -> JournalAction {
    let selected = view.selected_date();
    if let Some(editor) = view.editor.as_mut() {
        return match key.code {
            KeyCode::Esc => {
                view.editor = None;
                JournalAction::None
            }
            KeyCode::Enter => match (editor.mood, selected) {
                (Some(mood), Some(date)) => {
                    let entry = JournalEntry {
                        id: None,
                        date,
                        mood,
                        note: editor.note.trim().to_string(),
                    };
                    view.editor = None;
                    JournalAction::Save(entry)
                }
                _ => JournalAction::None,
            },
            KeyCode::Backspace => {
                if editor.note.pop().is_none() {
                    editor.mood = None;
                }
                JournalAction::None
            }
            KeyCode::Char(c) if editor.mood.is_none() => {
                editor.mood = c
                    .to_digit(10)
                    .and_then(|d| Mood::from_score(d as u8));
                JournalAction::None
            }
            KeyCode::Char(c) => {
                editor.note.push(c);
                JournalAction::None
            }
            _ => JournalAction::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => JournalAction::Back,
        KeyCode::Left => {
            view.move_selection(-1);
            JournalAction::None
        }
        KeyCode::Right => {
            view.move_selection(1);
            JournalAction::None
        }
        KeyCode::Up => {
            view.move_selection(-7);
            JournalAction::None
        }
        KeyCode::Down => {
            view.move_selection(7);
            JournalAction::None
        }
        KeyCode::PageUp | KeyCode::Char('[') => {
            view.change_month(-1);
            JournalAction::None
        }
        KeyCode::PageDown | KeyCode::Char(']') => {
            view.change_month(1);
            JournalAction::None
        }
        KeyCode::Char('n') | KeyCode::Enter => {
            view.editor = Some(EntryEditor::default());
            JournalAction::None
        }
        KeyCode::Char('e') => JournalAction::Export,
        KeyCode::Char('i') => JournalAction::Import,
        _ => JournalAction::None,
    }
}
