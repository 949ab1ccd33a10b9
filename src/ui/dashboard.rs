use crate::app::App;
use crate::content::outcome_for;
use crate::dashboard::energy_label;
use crate::theme::{Palette, Theme};
use crate::ui::help_line;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{format_timestamp, progress_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn draw_stats(f: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let stats = &app.stats;
    let energy = match stats.energy {
        Some(percent) => format!("{} {}%", progress_bar(percent as u16, 20), percent),
        None => progress_bar(0, 20),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Energie: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(energy, Style::default().fg(palette.success)),
        ]),
        Line::from(Span::styled(
            energy_label(stats.energy),
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(format!("Zile consecutive în jurnal: {}", stats.streak)),
        Line::from(format!("Intrări luna aceasta: {}", stats.month_entries)),
        Line::from(format!("Total intrări: {}", stats.total_entries)),
    ];

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Starea ta"));
    f.render_widget(widget, area);
}

fn draw_overview(f: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("„{}”", app.affirmation),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    match &app.completion {
        Some(cache) if cache.completed => {
            let outcome = outcome_for(cache.outcome);
            lines.push(Line::from(format!(
                "Ultimul rezultat: {} {}",
                outcome.icon.glyph(),
                outcome.title
            )));
            lines.push(Line::from(Span::styled(
                format_timestamp(cache.completed_at, app.today),
                Style::default().fg(palette.muted),
            )));
        }
        _ => lines.push(Line::from(Span::styled(
            "Nu ai completat încă chestionarul. Apasă 1 pentru a începe.",
            Style::default().fg(palette.highlight),
        ))),
    }

    if let Some(profile) = &app.profile {
        lines.push(Line::from(""));
        let newsletter = if profile.newsletter { "da" } else { "nu" };
        lines.push(Line::from(format!("Newsletter: {}", newsletter)));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Pentru tine"));
    f.render_widget(widget, area);
}

pub fn draw_dashboard(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let layout = calculate_screen_chunks(f.area());

    let greeting = match &app.profile {
        Some(profile) => format!("Bună, {}!", profile.first_name),
        None => "Bun venit!".to_string(),
    };
    let title = Paragraph::new(format!("EmoBalance · {}", greeting))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout.content_area);
    draw_stats(f, app, body[0], palette);
    draw_overview(f, app, body[1], palette);

    let theme_hint = match app.theme.resolved() {
        Theme::Light => "Temă întunecată",
        Theme::Dark => "Temă deschisă",
    };
    let mut footer = help_line(
        &[
            ("1", "Chestionar"),
            ("2", "Jurnal"),
            ("t", theme_hint),
            ("n", "Newsletter"),
            ("q", "Ieșire"),
        ],
        palette,
    );
    if let Some(status) = &app.status {
        footer.spans.push(Span::styled(
            format!("  · {}", status),
            Style::default().fg(palette.success),
        ));
    }
    let help = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
