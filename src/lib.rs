pub mod app;
pub mod calendar;
pub mod completion_worker;
pub mod config;
pub mod content;
pub mod csv;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod forms;
pub mod journal;
pub mod logger;
pub mod models;
pub mod outcome;
pub mod session;
pub mod theme;
pub mod ui;
pub mod utils;
pub mod validation;


// Re-exports for convenience
pub use app::App;
pub use calendar::{days_in_month, month_grid, MonthGrid};
pub use config::Config;
pub use error::{AppError, Result};
pub use models::{AppState, JournalEntry, Mood, Outcome, OutcomeKind, QuizDefinition};
pub use outcome::{select_outcome, select_outcome_kind};
pub use session::{handle_quiz_input, QuizSession, Selection};
pub use theme::{Theme, ThemePreference, ThemeStore};
