use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use findbar::App;
use findbar::config;
use findbar::findbar::IconAtlas;
use findbar::source::read_page;

/// Terminal page viewer with a find-in-page toolbar
#[derive(Parser, Debug)]
#[command(version, about = "Terminal page viewer with a find-in-page toolbar")]
struct Args {
    /// Text file to display (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Start with the case-sensitivity checkbox checked
    #[arg(short = 'c', long)]
    case_sensitive: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/findbar-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/findbar-debug.log")
            .expect("Failed to open /tmp/findbar-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== FINDBAR DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config;
    if args.case_sensitive {
        config.findbar.case_sensitive = true;
    }

    // Read the page before touching the terminal so errors print normally
    let page = read_page(args.input.as_deref())?;

    let icons = IconAtlas::new();
    let mut app = App::new(&page.title, &page.text, &config, &icons);
    app.warning = config_result.warning;

    let terminal = init_terminal()?;
    let result = run(terminal, app);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!(
        "=== FINDBAR DEBUG SESSION ENDED ({} icons alive) ===",
        icons.live_count()
    );

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
