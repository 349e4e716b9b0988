//! kubedeck - a read-only Kubernetes console for the terminal.
//!
//! All data comes from inline sample records; there is no cluster
//! connection and nothing is ever mutated.

use std::{
    io,
    time::{Duration, Instant},
};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use kubedeck::{
    log::setup_logger,
    resources::ResourceKind,
    ui::app::App,
    Result,
};

#[derive(Parser)]
#[command(name = "kubedeck")]
#[command(about = "Read-only Kubernetes console for the terminal, backed by sample data")]
#[command(version)]
struct Cli {
    /// Resource page to open (pods, deployments, nodes, ...)
    #[arg(long, default_value = "pods")]
    view: String,

    /// Directory for the log file
    #[arg(long, default_value = ".")]
    log_dir: std::path::PathBuf,

    /// Redraw interval in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Print a resource kind's processed rows as JSON and exit
    #[arg(long)]
    dump: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(kind) = &cli.dump {
        let kind: ResourceKind = kind.parse()?;
        println!("{}", kind.dump_rows(chrono::Utc::now())?);
        return Ok(());
    }

    setup_logger(&cli.log_dir)?;
    tracing::info!(view = %cli.view, "starting");

    let initial: ResourceKind = cli.view.parse()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, initial, Duration::from_millis(cli.tick_ms));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    initial: ResourceKind,
    tick: Duration,
) -> Result<()> {
    let mut app = App::new(initial)?;
    let mut last_draw = Instant::now();
    let mut dirty = true;

    while app.running {
        if dirty || last_draw.elapsed() >= tick {
            let mut draw_result = Ok(());
            terminal.draw(|f| {
                draw_result = app.draw(f, f.area());
            })?;
            draw_result?;
            last_draw = Instant::now();
            dirty = false;
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Resize(_, _) => {
                    terminal.autoresize()?;
                    dirty = true;
                }
                ev => {
                    if app.on_event(&ev)? {
                        dirty = true;
                    }
                }
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}
