mod dashboard;
mod journal;
pub mod layout;
mod profile;
mod quiz;
mod summary;

use crate::app::App;
use crate::models::AppState;
use crate::theme::Palette;
use layout::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use dashboard::draw_dashboard;
pub use journal::draw_journal;
pub use layout::{calculate_journal_chunks, calculate_quiz_chunks, calculate_screen_chunks};
pub use profile::draw_profile_form;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_outcome;

pub(crate) fn key_hint(key: &str, color: Color) -> Span<'static> {
    Span::styled(
        key.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// `key label  key label ...` in the palette's accent colour.
pub(crate) fn help_line(hints: &[(&str, &str)], palette: Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(key_hint(key, palette.accent));
        spans.push(Span::from(format!(" {}  ", label)));
    }
    Line::from(spans)
}

fn draw_alert(f: &mut Frame, message: &str, palette: Palette) {
    let area = centered_rect(50, 7, f.area());
    f.render_widget(Clear, area);
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![key_hint("Enter", palette.accent), Span::from(" OK")]),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(palette.text).bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.warning))
                .title("Atenție"),
        );
    f.render_widget(popup, area);
}

pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    f.render_widget(
        Block::default().style(Style::default().fg(palette.text).bg(palette.background)),
        f.area(),
    );

    match app.state {
        AppState::ProfileSetup => draw_profile_form(f, &app.profile_form, palette),
        AppState::Dashboard => draw_dashboard(f, app),
        AppState::Quiz => {
            if let Some(session) = &app.quiz {
                draw_quiz(f, session, palette);
            }
        }
        AppState::QuizQuitConfirm => draw_quit_confirmation(f, palette),
        AppState::Outcome => {
            if let Some(outcome) = app.outcome {
                draw_outcome(f, outcome, palette);
            }
        }
        AppState::Journal => draw_journal(f, app),
    }

    if let Some(message) = &app.alert {
        draw_alert(f, message, palette);
    }
}
