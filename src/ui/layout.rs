use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub struct ScreenLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

pub struct JournalLayout {
    pub header_area: Rect,
    pub calendar_area: Rect,
    pub detail_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        help_area: chunks[3],
    }
}

/// Header, body and a one-line help footer; shared by the simpler screens.
pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

pub fn calculate_journal_chunks(area: Rect) -> JournalLayout {
    let screen = calculate_screen_chunks(area);
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(screen.content_area);

    JournalLayout {
        header_area: screen.header_area,
        calendar_area: body[0],
        detail_area: body[1],
        footer_area: screen.footer_area,
    }
}

/// A rectangle of the given size centred in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
