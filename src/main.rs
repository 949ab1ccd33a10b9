use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use emobalance::{logger, ui, App, Config};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(50);

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        app.set_today(chrono::Local::now().date_naive());
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                // The OS theme is only re-read when the terminal regains focus.
                Event::FocusGained => app.sync_system_theme(Config::load().system_theme),
                _ => {}
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let config = Config::load();
    std::fs::create_dir_all(&config.data_dir)?;
    logger::init(&config.log_path());
    logger::info(&format!(
        "Starting EmoBalance for {} (data dir {})",
        config.user_id,
        config.data_dir.display()
    ));

    let today = chrono::Local::now().date_naive();
    let mut app = match App::new(config, today) {
        Ok(app) => app,
        Err(e) => {
            logger::error(&format!("Startup failed: {}", e));
            eprintln!("EmoBalance nu a putut porni: {}", e);
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::error(&format!("Terminal error: {}", e));
    }
    logger::info("EmoBalance exiting");
    result
}
