use crate::completion_worker::{spawn_completion_worker, CompletionRequest, CompletionResponse};
use crate::config::Config;
use crate::content::default_quiz;
use crate::csv::{load_journal_csv, write_journal_csv};
use crate::dashboard::{pick_affirmation, DashboardStats};
use crate::error::AppError;
use crate::db::kv::{kv_get, kv_set, KvStore};
use crate::db::{self, journal, profile, quiz_result};
use crate::forms::{handle_profile_input, FormAction, ProfileFormState};
use crate::journal::{handle_journal_input, JournalAction, JournalView};
use crate::logger;
use crate::models::{AppState, JournalEntry, Outcome, OutcomeKind, UserProfile};
use crate::outcome::select_outcome;
use crate::session::{handle_quiz_input, QuizSession, Selection};
use crate::theme::{Theme, ThemeStore};
use crate::validation::validate_profile;
use chrono::NaiveDate;
use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

pub const QUIZ_COMPLETION_KEY: &str = "quiz_completion";

/// The completion cache is kept per user so switching identities does not
/// carry over someone else's result.
pub fn completion_key(user_id: &str) -> String {
    format!("{}:{}", QUIZ_COMPLETION_KEY, user_id)
}

/// Cached locally so the dashboard knows about the last completion even
/// before the worker has stored the full result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCompletionCache {
    pub completed: bool,
    pub outcome: OutcomeKind,
    pub completed_at: u64,
}

pub struct App {
    pub config: Config,
    pub theme: ThemeStore<KvStore>,
    pub state: AppState,
    pub today: NaiveDate,
    pub profile: Option<UserProfile>,
    pub profile_form: ProfileFormState,
    pub quiz: Option<QuizSession>,
    pub outcome: Option<&'static Outcome>,
    pub journal: JournalView,
    pub entries: Vec<JournalEntry>,
    pub stats: DashboardStats,
    pub completion: Option<QuizCompletionCache>,
    pub alert: Option<String>,
    pub status: Option<String>,
    pub affirmation: &'static str,
    pub should_quit: bool,
    theme_changed: Rc<Cell<Option<Theme>>>,
    generation: u64,
    /// Generations whose completion report has not been answered yet.
    pending_reports: HashSet<u64>,
    worker_tx: Option<Sender<CompletionRequest>>,
    worker_rx: Option<Receiver<CompletionResponse>>,
}

impl App {
    /// Opens the database under the configured data dir and starts the
    /// completion worker.
    pub fn new(config: Config, today: NaiveDate) -> crate::Result<Self> {
        let conn = db::init_db(&config.db_path())?;
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (response_tx, response_rx) = crossbeam_channel::unbounded();
        spawn_completion_worker(config.db_path(), response_tx, request_rx);

        let mut app = Self::with_connection(config, conn, today);
        app.attach_worker(request_tx, response_rx);
        Ok(app)
    }

    pub fn with_connection(config: Config, conn: Connection, today: NaiveDate) -> Self {
        let kv = KvStore::new(Rc::new(conn));
        let mut theme = ThemeStore::init(kv, config.system_theme);
        let theme_changed = Rc::new(Cell::new(None));
        let sink = theme_changed.clone();
        theme.subscribe(move |t| {
            logger::info(&format!("Theme changed to {:?}", t));
            sink.set(Some(t));
        });

        let mut app = Self {
            config,
            theme,
            state: AppState::Dashboard,
            today,
            profile: None,
            profile_form: ProfileFormState::default(),
            quiz: None,
            outcome: None,
            journal: JournalView::new(today),
            entries: Vec::new(),
            stats: DashboardStats::compute(&[], today),
            completion: None,
            alert: None,
            status: None,
            affirmation: pick_affirmation(&mut rand::thread_rng()),
            should_quit: false,
            theme_changed,
            generation: 0,
            pending_reports: HashSet::new(),
            worker_tx: None,
            worker_rx: None,
        };
        app.load_profile();
        app.refresh();
        app
    }

    pub fn attach_worker(
        &mut self,
        tx: Sender<CompletionRequest>,
        rx: Receiver<CompletionResponse>,
    ) {
        self.worker_tx = Some(tx);
        self.worker_rx = Some(rx);
    }

    pub fn conn(&self) -> &Connection {
        self.theme.store().conn()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn fail(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{}: {}", context, error);
        logger::error(&message);
        self.alert = Some(message);
    }

    fn raise(&mut self, error: AppError) {
        let message = error.to_string();
        logger::error(&message);
        self.alert = Some(message);
    }

    /// Moves the app to a new calendar day, recomputing date-based stats.
    pub fn set_today(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        logger::info(&format!("Date changed from {} to {}", self.today, today));
        self.today = today;
        self.refresh();
    }

    pub fn sync_system_theme(&mut self, system: Theme) {
        self.theme.set_system_theme(system);
    }

    fn load_profile(&mut self) {
        match profile::get_profile(self.conn(), &self.config.user_id) {
            Ok(Some(p)) => {
                self.profile = Some(p);
                self.state = AppState::Dashboard;
            }
            Ok(None) => {
                self.profile = None;
                self.state = AppState::ProfileSetup;
            }
            Err(e) => {
                self.state = AppState::ProfileSetup;
                self.fail("Profilul nu a putut fi citit", e);
            }
        }
    }

    /// Reloads journal entries, statistics and the completion cache.
    pub fn refresh(&mut self) {
        match journal::all_entries(self.conn(), &self.config.user_id) {
            Ok(entries) => self.entries = entries,
            Err(e) => self.fail("Jurnalul nu a putut fi citit", e),
        }
        self.stats = DashboardStats::compute(&self.entries, self.today);

        let key = completion_key(&self.config.user_id);
        self.completion = match kv_get::<QuizCompletionCache>(self.conn(), &key) {
            Ok(Some(cache)) => Some(cache),
            Ok(None) => quiz_result::latest_quiz_result(
                self.conn(),
                &self.config.user_id,
                crate::content::DEFAULT_QUIZ_ID,
            )
            .ok()
            .flatten()
            .map(|r| QuizCompletionCache {
                completed: true,
                outcome: r.outcome,
                completed_at: r.completed_at,
            }),
            Err(e) => {
                logger::warn(&format!("Ignoring unreadable quiz cache: {}", e));
                None
            }
        };
    }

    pub fn start_quiz(&mut self) {
        let quiz = default_quiz();
        if let Err(e) = quiz.validate() {
            self.fail("Chestionarul nu poate fi pornit", e);
            return;
        }
        self.generation += 1;
        self.quiz = Some(QuizSession::new(quiz, self.generation));
        self.outcome = None;
        self.state = AppState::Quiz;
        logger::info(&format!("Quiz started (generation {})", self.generation));
    }

    pub fn abandon_quiz(&mut self) {
        if self.quiz.take().is_some() {
            logger::info(&format!("Quiz abandoned (generation {})", self.generation));
        }
        self.state = AppState::Dashboard;
    }

    fn complete_quiz(&mut self) {
        let Some(session) = self.quiz.take() else {
            return;
        };
        let tags = session.collected_tags().to_vec();
        let outcome = select_outcome(&tags);
        logger::info(&format!("Quiz outcome: {}", outcome.kind.as_str()));

        let cache = QuizCompletionCache {
            completed: true,
            outcome: outcome.kind,
            completed_at: db::now(),
        };
        let key = completion_key(&self.config.user_id);
        if let Err(e) = kv_set(self.conn(), &key, &cache) {
            logger::error(&format!("Failed to cache quiz completion: {}", e));
        }
        self.completion = Some(cache);

        if let Some(tx) = &self.worker_tx {
            let request = CompletionRequest::Report {
                generation: session.generation,
                user_id: self.config.user_id.clone(),
                quiz_id: session.quiz().id.clone(),
                tags,
                outcome: outcome.kind,
            };
            if tx.send(request).is_ok() {
                self.pending_reports.insert(session.generation);
            } else {
                logger::error("Completion worker is gone; result not stored");
            }
        }

        self.outcome = Some(outcome);
        self.state = AppState::Outcome;
    }

    /// Advances time-based state: commits settled quiz answers, drains worker
    /// responses and picks up theme notifications.
    pub fn tick(&mut self, now: Instant) {
        let settled = self.quiz.as_mut().and_then(|q| q.settle(now));
        if settled == Some(Selection::Completed) {
            self.complete_quiz();
        }
        self.poll_worker();
        if let Some(theme) = self.theme_changed.take() {
            self.status = Some(match theme {
                Theme::Light => "Temă deschisă activată".to_string(),
                Theme::Dark => "Temă întunecată activată".to_string(),
            });
        }
    }

    pub fn poll_worker(&mut self) {
        let Some(rx) = &self.worker_rx else {
            return;
        };
        let responses: Vec<CompletionResponse> = rx.try_iter().collect();
        for response in responses {
            self.handle_completion_response(response);
        }
    }

    /// Applies a worker reply. Replies for completed quizzes always count,
    /// even after a retake; anything else is stale and dropped.
    pub fn handle_completion_response(&mut self, response: CompletionResponse) {
        if !self.pending_reports.remove(&response.generation()) {
            logger::warn(&format!(
                "Ignoring stale completion response for generation {} (current {})",
                response.generation(),
                self.generation
            ));
            return;
        }
        match response {
            CompletionResponse::Saved { result_id, .. } => {
                logger::info(&format!("Quiz result {} stored", result_id));
                if let Some(p) = self.profile.as_mut() {
                    p.quiz_completed = true;
                }
                self.status = Some("Rezultatul a fost salvat".to_string());
            }
            CompletionResponse::Error { error, .. } => {
                self.raise(AppError::Worker(error));
            }
        }
    }

    fn submit_profile(&mut self) {
        let form = &self.profile_form.form;
        if let Err(e) = validate_profile(form) {
            self.raise(e.into());
            return;
        }
        let profile = UserProfile {
            user_id: self.config.user_id.clone(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            newsletter: form.newsletter,
            quiz_completed: false,
            created_at: 0,
        };
        match profile::upsert_profile(self.conn(), &profile) {
            Ok(()) => {
                logger::info(&format!("Profile saved for {}", profile.user_id));
                self.profile_form = ProfileFormState::default();
                self.load_profile();
            }
            Err(e) => self.fail("Profilul nu a putut fi salvat", e),
        }
    }

    fn toggle_newsletter(&mut self) {
        let Some(current) = self.profile.as_ref().map(|p| p.newsletter) else {
            return;
        };
        match profile::update_newsletter(self.conn(), &self.config.user_id, !current) {
            Ok(_) => {
                if let Some(p) = self.profile.as_mut() {
                    p.newsletter = !current;
                }
                self.status = Some(if current {
                    "Dezabonat de la newsletter".to_string()
                } else {
                    "Abonat la newsletter".to_string()
                });
            }
            Err(e) => self.fail("Preferința nu a putut fi salvată", e),
        }
    }

    fn apply_journal_action(&mut self, action: JournalAction) {
        match action {
            JournalAction::None => {}
            JournalAction::Back => self.state = AppState::Dashboard,
            JournalAction::Save(entry) => {
                match journal::add_entry(self.conn(), &self.config.user_id, &entry) {
                    Ok(_) => {
                        self.status = Some("Intrare salvată".to_string());
                        self.refresh();
                    }
                    Err(e) => self.fail("Intrarea nu a putut fi salvată", e),
                }
            }
            JournalAction::Export => {
                let path = self.config.export_path();
                match write_journal_csv(&path, &self.entries) {
                    Ok(()) => {
                        self.status = Some(format!("Jurnal exportat în {}", path.display()))
                    }
                    Err(e) => self.fail("Exportul a eșuat", e),
                }
            }
            JournalAction::Import => {
                let path = self.config.import_path();
                match load_journal_csv(&path) {
                    Ok(imported) => {
                        let mut count = 0;
                        for entry in &imported {
                            match journal::add_entry(self.conn(), &self.config.user_id, entry) {
                                Ok(_) => count += 1,
                                Err(e) => {
                                    self.fail("Importul a eșuat", e);
                                    break;
                                }
                            }
                        }
                        self.status = Some(format!("{} intrări importate", count));
                        self.refresh();
                    }
                    Err(e) => self.fail(&format!("Nu pot citi {}", path.display()), e),
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The alert blocks everything until dismissed.
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }
        self.status = None;

        match self.state {
            AppState::ProfileSetup => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                } else if handle_profile_input(&mut self.profile_form, key) == FormAction::Submit {
                    self.submit_profile();
                }
            }
            AppState::Dashboard => match key.code {
                KeyCode::Char('1') | KeyCode::Char('z') => self.start_quiz(),
                KeyCode::Char('2') | KeyCode::Char('j') => {
                    self.journal = JournalView::new(self.today);
                    self.state = AppState::Journal;
                }
                KeyCode::Char('t') => {
                    self.theme.toggle();
                }
                KeyCode::Char('n') => self.toggle_newsletter(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            AppState::Quiz => {
                if let Some(session) = self.quiz.as_mut() {
                    handle_quiz_input(session, key, &mut self.state);
                }
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('d') => self.abandon_quiz(),
                KeyCode::Char('n') | KeyCode::Esc => self.state = AppState::Quiz,
                _ => {}
            },
            AppState::Outcome => match key.code {
                KeyCode::Char('r') => self.start_quiz(),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
                    self.outcome = None;
                    self.refresh();
                    self.state = AppState::Dashboard;
                }
                _ => {}
            },
            AppState::Journal => {
                let action = handle_journal_input(&mut self.journal, key);
                self.apply_journal_action(action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_test_db;
    use crate::session::SETTLE_DELAY;
    use std::path::PathBuf;

    fn config(dir: PathBuf) -> Config {
        Config {
            data_dir: dir,
            user_id: "tester".to_string(),
            system_theme: Theme::Dark,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn app_with_profile(dir: PathBuf) -> App {
        let conn = open_test_db();
        profile::upsert_profile(
            &conn,
            &UserProfile {
                user_id: "tester".to_string(),
                first_name: "Ana".to_string(),
                last_name: "Pop".to_string(),
                email: "ana@example.ro".to_string(),
                newsletter: false,
                quiz_completed: false,
                created_at: 0,
            },
        )
        .unwrap();
        App::with_connection(config(dir), conn, today())
    }

    fn answer(app: &mut App, digit: char) {
        app.handle_key(key(KeyCode::Char(digit)));
        app.tick(Instant::now() + SETTLE_DELAY);
    }

    #[test]
    fn test_first_launch_requires_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::with_connection(config(dir.path().into()), open_test_db(), today());
        assert_eq!(app.state, AppState::ProfileSetup);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.alert.as_deref(), Some("Câmpul „Prenume” este obligatoriu."));

        // Any other key is swallowed by the alert.
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.profile_form.form.first_name, "");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.alert.is_none());

        for c in "Ana".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "Pop".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "ana@example.ro".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.alert.is_none());
        assert_eq!(app.state, AppState::Dashboard);
        assert_eq!(app.profile.as_ref().unwrap().display_name(), "Ana Pop");
    }

    #[test]
    fn test_quiz_flow_reports_completion() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (response_tx, response_rx) = crossbeam_channel::unbounded();
        app.attach_worker(request_tx, response_rx);

        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.state, AppState::Quiz);

        for digit in ['1', '4', '3', '3'] {
            answer(&mut app, digit);
        }

        assert_eq!(app.state, AppState::Outcome);
        assert_eq!(app.outcome.unwrap().kind, OutcomeKind::StressRelief);
        assert!(app.quiz.is_none());

        let request = request_rx.try_recv().unwrap();
        let CompletionRequest::Report {
            generation, tags, ..
        } = request;
        assert_eq!(generation, app.generation());
        assert_eq!(tags, vec!["stressed", "self-discovery", "rarely", "good-sleep"]);

        let cached: QuizCompletionCache = kv_get(app.conn(), &completion_key("tester"))
            .unwrap()
            .unwrap();
        assert_eq!(cached.outcome, OutcomeKind::StressRelief);

        response_tx
            .send(CompletionResponse::Saved {
                generation,
                result_id: 1,
            })
            .unwrap();
        app.tick(Instant::now());
        assert_eq!(app.status.as_deref(), Some("Rezultatul a fost salvat"));
        assert!(app.profile.as_ref().unwrap().quiz_completed);
    }

    fn attach_channels(app: &mut App) -> Receiver<CompletionRequest> {
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (_response_tx, response_rx) = crossbeam_channel::unbounded();
        app.attach_worker(request_tx, response_rx);
        request_rx
    }

    fn complete_default_quiz(app: &mut App) {
        app.start_quiz();
        for digit in ['1', '4', '3', '3'] {
            answer(app, digit);
        }
        assert_eq!(app.state, AppState::Outcome);
    }

    #[test]
    fn test_stale_worker_response_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        let _requests = attach_channels(&mut app);
        app.start_quiz();
        app.abandon_quiz();
        app.start_quiz();

        // Neither generation ever reported a completion.
        for generation in [1, 2] {
            app.handle_completion_response(CompletionResponse::Error {
                generation,
                error: "timeout".to_string(),
            });
        }
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_failed_save_is_reported_after_retake() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        let _requests = attach_channels(&mut app);
        complete_default_quiz(&mut app);
        let completed = app.generation();

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.state, AppState::Quiz);
        assert_ne!(app.generation(), completed);

        app.handle_completion_response(CompletionResponse::Error {
            generation: completed,
            error: "disk full".to_string(),
        });
        assert_eq!(
            app.alert.as_deref(),
            Some("Salvarea rezultatului a eșuat: disk full")
        );

        // A reply is consumed once.
        app.alert = None;
        app.handle_completion_response(CompletionResponse::Error {
            generation: completed,
            error: "disk full".to_string(),
        });
        assert!(app.alert.is_none());
    }

    #[test]
    fn test_successful_save_after_retake_marks_profile() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        let _requests = attach_channels(&mut app);
        complete_default_quiz(&mut app);
        let completed = app.generation();
        app.handle_key(key(KeyCode::Char('r')));

        app.handle_completion_response(CompletionResponse::Saved {
            generation: completed,
            result_id: 9,
        });
        assert!(app.profile.as_ref().unwrap().quiz_completed);
    }

    #[test]
    fn test_completion_cache_is_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("shared.db");
        let for_user = |user: &str| Config {
            user_id: user.to_string(),
            ..config(dir.path().into())
        };

        let mut alice =
            App::with_connection(for_user("alice"), db::init_db(&db_path).unwrap(), today());
        complete_default_quiz(&mut alice);
        assert_eq!(
            alice.completion.as_ref().map(|c| c.outcome),
            Some(OutcomeKind::StressRelief)
        );

        let bob = App::with_connection(for_user("bob"), db::init_db(&db_path).unwrap(), today());
        assert!(bob.completion.is_none());

        let alice_again =
            App::with_connection(for_user("alice"), db::init_db(&db_path).unwrap(), today());
        assert_eq!(
            alice_again.completion.map(|c| c.outcome),
            Some(OutcomeKind::StressRelief)
        );
    }

    #[test]
    fn test_invalid_profile_alert_uses_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::with_connection(config(dir.path().into()), open_test_db(), today());
        for c in "Ana".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "Pop".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "nu-e-email".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.alert.as_deref(), Some("Adresa de email nu este validă."));
        assert_eq!(app.state, AppState::ProfileSetup);
    }

    #[test]
    fn test_system_theme_change_reaches_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        assert_eq!(app.theme.resolved(), Theme::Dark);

        app.sync_system_theme(Theme::Light);
        app.tick(Instant::now());

        assert_eq!(app.theme.resolved(), Theme::Light);
        assert_eq!(app.status.as_deref(), Some("Temă deschisă activată"));
    }

    #[test]
    fn test_day_rollover_recomputes_stats() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        journal::add_entry(
            app.conn(),
            "tester",
            &JournalEntry {
                id: None,
                date: today(),
                mood: crate::models::Mood::Good,
                note: String::new(),
            },
        )
        .unwrap();
        app.refresh();
        assert_eq!(app.stats.streak, 1);

        let later = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        app.set_today(later);

        assert_eq!(app.today, later);
        assert_eq!(app.stats.streak, 0);
        assert_eq!(app.stats.energy, None);
    }

    #[test]
    fn test_quit_confirmation_discards_progress() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        app.start_quiz();
        answer(&mut app, '2');
        assert_eq!(app.quiz.as_ref().unwrap().collected_tags().len(), 1);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state, AppState::QuizQuitConfirm);
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.state, AppState::Quiz);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.state, AppState::Dashboard);
        assert!(app.quiz.is_none());
    }

    #[test]
    fn test_theme_toggle_is_persisted_and_announced() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        assert_eq!(app.theme.resolved(), Theme::Dark);

        app.handle_key(key(KeyCode::Char('t')));
        app.tick(Instant::now());

        assert_eq!(app.theme.resolved(), Theme::Light);
        assert_eq!(app.status.as_deref(), Some("Temă deschisă activată"));
        let stored: Option<crate::theme::ThemePreference> =
            kv_get(app.conn(), crate::theme::THEME_PREFERENCE_KEY).unwrap();
        assert_eq!(stored, Some(crate::theme::ThemePreference::Light));
    }

    #[test]
    fn test_journal_entry_updates_stats_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());

        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.state, AppState::Journal);
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('5')));
        for c in "Soare".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.stats.energy, Some(100));
        assert_eq!(app.stats.streak, 1);

        app.handle_key(key(KeyCode::Char('e')));
        let exported = load_journal_csv(&app.config.export_path()).unwrap();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].note, "Soare");
    }

    #[test]
    fn test_import_missing_file_raises_alert() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('i')));
        assert!(app.alert.is_some());
    }

    #[test]
    fn test_newsletter_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_profile(dir.path().into());
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.profile.as_ref().unwrap().newsletter);
        let stored = profile::get_profile(app.conn(), "tester").unwrap().unwrap();
        assert!(stored.newsletter);
    }
}
