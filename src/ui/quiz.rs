use crate::session::QuizSession;
use crate::theme::Palette;
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::{help_line, key_hint};
use crate::utils::progress_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, palette: Palette) {
    let layout = calculate_quiz_chunks(f.area());
    let Some(question) = session.current_question() else {
        return;
    };

    let (answered, total) = session.progress();
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Întrebarea {} din {}", session.current_index() + 1, total),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} {}%  ({} răspunsuri)",
            progress_bar(session.progress_percent(), 30),
            session.progress_percent(),
            answered
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(session.quiz().title.as_str()),
    );
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(Text::from(question.prompt.as_str()))
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prompt, layout.question_area);

    let highlighted = session.highlighted().map(|h| h.tag.as_str());
    let mut lines = Vec::new();
    for (i, option) in question.options.iter().enumerate() {
        let chosen = highlighted == Some(option.tag.as_str());
        let under_cursor = highlighted.is_none() && i == session.cursor;
        let style = if chosen {
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if under_cursor {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if under_cursor || chosen { "▶" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {}. {}  {}", marker, i + 1, option.icon.glyph(), option.text),
            style,
        )));
        lines.push(Line::from(""));
    }
    let options = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Alege un răspuns"));
    f.render_widget(options, layout.options_area);

    let help = Paragraph::new(help_line(
        &[("↑/↓", "Navighează"), ("Enter/1-9", "Alege"), ("Esc", "Renunță")],
        palette,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Părăsești chestionarul?")
        .style(
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Răspunsurile de până acum se vor pierde.")
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        key_hint("y", palette.success),
        Span::from(" Da, ieși  "),
        key_hint("n", palette.warning),
        Span::from(" Nu, continuă  "),
        key_hint("Ctrl+C", palette.accent),
        Span::from(" Închide aplicația"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
