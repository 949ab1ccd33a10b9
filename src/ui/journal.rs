use crate::app::App;
use crate::calendar::{month_grid, month_name, WEEKDAY_SHORT};
use crate::journal::EntryEditor;
use crate::models::Mood;
use crate::theme::Palette;
use crate::ui::help_line;
use crate::ui::layout::calculate_journal_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn draw_calendar(f: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let view = &app.journal;
    let dates: Vec<_> = app.entries.iter().map(|e| e.date).collect();
    let grid = month_grid(view.month, view.year, &dates, app.today);

    let mut lines = vec![Line::from(
        WEEKDAY_SHORT
            .iter()
            .map(|d| Span::styled(format!("{:>3} ", d), Style::default().fg(palette.muted)))
            .collect::<Vec<_>>(),
    )];

    for week in grid.weeks() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                None => Span::from("    "),
                Some(cell) => {
                    let mut style = Style::default().fg(palette.text);
                    if cell.has_entry {
                        style = style.fg(palette.success).add_modifier(Modifier::BOLD);
                    }
                    if cell.is_today {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    if cell.day == view.selected_day {
                        style = style.fg(palette.highlight).add_modifier(Modifier::REVERSED);
                    }
                    let marker = if cell.has_entry { "•" } else { " " };
                    Span::styled(format!("{:>3}{}", cell.day, marker), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!("{} {}", month_name(view.month), view.year);
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn draw_day(f: &mut Frame, app: &App, area: Rect, palette: Palette) {
    let selected = app.journal.selected_date();
    let mut lines = Vec::new();

    let entries: Vec<_> = app
        .entries
        .iter()
        .filter(|e| Some(e.date) == selected)
        .collect();
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nicio intrare pentru această zi.",
            Style::default().fg(palette.muted),
        )));
    }
    for entry in entries {
        lines.push(Line::from(vec![
            Span::from(format!("{} ", entry.mood.icon().glyph())),
            Span::styled(
                entry.mood.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if !entry.note.is_empty() {
            let width = area.width.saturating_sub(4) as usize;
            lines.push(Line::from(format!("  {}", truncate_string(&entry.note, width))));
        }
        lines.push(Line::from(""));
    }

    let title = selected
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn draw_editor(f: &mut Frame, editor: &EntryEditor, area: Rect, palette: Palette) {
    let mut lines = vec![Line::from("Cum te simți azi?"), Line::from("")];
    for mood in Mood::ALL {
        let chosen = editor.mood == Some(mood);
        let style = if chosen {
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.text)
        };
        lines.push(Line::from(Span::styled(
            format!("  {}. {} {}", mood.score(), mood.icon().glyph(), mood.label()),
            style,
        )));
    }
    lines.push(Line::from(""));
    if editor.mood.is_some() {
        lines.push(Line::from(vec![
            Span::styled("Notă: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(editor.note.as_str()),
            Span::styled("▏", Style::default().fg(palette.accent)),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "Apasă 1-5 pentru a alege starea.",
            Style::default().fg(palette.muted),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Intrare nouă"));
    f.render_widget(widget, area);
}

pub fn draw_journal(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let layout = calculate_journal_chunks(f.area());

    let header = Paragraph::new("Jurnal emoțional")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    draw_calendar(f, app, layout.calendar_area, palette);
    match &app.journal.editor {
        Some(editor) => draw_editor(f, editor, layout.detail_area, palette),
        None => draw_day(f, app, layout.detail_area, palette),
    }

    let hints: &[(&str, &str)] = if app.journal.editor.is_some() {
        &[("1-5", "Stare"), ("Enter", "Salvează"), ("Esc", "Anulează")]
    } else {
        &[
            ("←↑↓→", "Zi"),
            ("[ ]", "Lună"),
            ("n", "Intrare nouă"),
            ("e", "Export"),
            ("i", "Import"),
            ("Esc", "Înapoi"),
        ]
    };
    let mut footer = help_line(hints, palette);
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
