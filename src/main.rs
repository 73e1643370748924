use anyhow::Result;
use cabinet::{app::App, config, key_handlers, logging, ui};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    let _logger = logging::init_logging(&config::get_config().log_level)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app_arc = Arc::new(Mutex::new(App::new()));
    let result = run_app(&mut terminal, app_arc).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_arc: Arc<Mutex<App>>,
) -> Result<()> {
    loop {
        {
            let mut app = app_arc.lock().await;
            app.status_indicator.update_spinner();
            terminal.draw(|f| ui::draw(f, &mut app))?;
            if app.should_quit {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let mut app = app_arc.lock().await;
                    key_handlers::handle_key(&mut app, app_arc.clone(), key);
                }
            }
        }
    }
}
