mod app;
mod ui;

use std::fs;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use optfilter_core::Page;

#[derive(Debug, Parser)]
#[command(name = "optfilter-tui", version, about = "optfilter TUI")]
struct Args {
    /// Page file: a JSON page document or one option label per line
    input: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Container holding the control; overrides the config file
    #[arg(long)]
    container: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = optfilter_config::load(args.config).with_context(|| "load config")?;
    let container = args.container.unwrap_or_else(|| config.container.clone());
    let page = load_page(&args.input, &container)?;

    let mut app = App::new(page, container, config.settings());
    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &mut app)
}

fn load_page(path: &Path, container: &str) -> Result<Page> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read page {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        return serde_json::from_str(&text)
            .with_context(|| format!("parse page {}", path.display()));
    }
    Ok(Page::from_lines(container, &text))
}

fn run_app(terminal: &mut TerminalGuard, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.terminal_mut().draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
