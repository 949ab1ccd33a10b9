use crate::forms::{ProfileField, ProfileFormState};
use crate::theme::Palette;
use crate::ui::help_line;
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_profile_form(f: &mut Frame, state: &ProfileFormState, palette: Palette) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Completează-ți profilul")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut lines = Vec::new();
    for field in ProfileField::ALL {
        let focused = state.focused == field;
        let label_style = if focused {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if focused { "▶ " } else { "  " };

        let line = if let Some(value) = state.text_value(field) {
            let mut spans = vec![
                Span::styled(format!("{}{}: ", marker, field.label()), label_style),
                Span::from(value.to_string()),
            ];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
            }
            Line::from(spans)
        } else {
            let checked = state.toggle_value(field).unwrap_or(false);
            let mark = if checked { "[x]" } else { "[ ]" };
            Line::from(Span::styled(
                format!("{}{} {}", marker, mark, field.label()),
                label_style,
            ))
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Profil"));
    f.render_widget(form, layout.content_area);

    let help = Paragraph::new(help_line(
        &[
            ("Tab", "Câmpul următor"),
            ("Spațiu", "Bifează"),
            ("Enter", "Salvează"),
            ("Esc", "Ieșire"),
        ],
        palette,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
