use crate::models::Outcome;
use crate::theme::Palette;
use crate::ui::help_line;
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_outcome(f: &mut Frame, outcome: &Outcome, palette: Palette) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new(format!("{}  {}", outcome.icon.glyph(), outcome.title))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        outcome.subtitle,
        Style::default().fg(palette.text),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Ce îți recomandăm:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for benefit in outcome.benefits {
        text.push_line(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(palette.success)),
            Span::from(*benefit),
        ]));
    }

    let body = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Rezultatul tău"));
    f.render_widget(body, layout.content_area);

    let help = Paragraph::new(help_line(
        &[("Enter", "Panou principal"), ("r", "Reia chestionarul")],
        palette,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
