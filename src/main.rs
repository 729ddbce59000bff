//! Orbis - A terminal-based browser for world country data.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use orbis::app::{App, Theme};
use orbis::config::{Config, DatasetSource};
use orbis::data::{DEFAULT_URL, DEFAULT_TIMEOUT};
use orbis::query::{Intent, RankingMode, SelectionState, CONTINENTS, SUBREGIONS};
use orbis::{ui, util};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orbis")]
#[command(about = "A terminal-based browser for world country data", long_about = None)]
struct Args {
    /// REST endpoint returning the country list
    #[arg(long, default_value = DEFAULT_URL, conflicts_with = "file")]
    url: String,

    /// Read the country list from a local JSON file instead of the network
    #[arg(long)]
    file: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Initial continent filter
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(CONTINENTS.iter().copied()))]
    continent: Option<String>,

    /// Initial subregion filter
    #[arg(
        long,
        conflicts_with = "continent",
        value_parser = clap::builder::PossibleValuesParser::new(SUBREGIONS.iter().copied())
    )]
    subregion: Option<String>,

    /// Initial ranking mode
    #[arg(long, value_enum, default_value_t = RankArg::None)]
    rank: RankArg,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Print the derived view as tab-separated lines and exit
    #[arg(long)]
    list: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Ranking mode as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RankArg {
    None,
    Alphabetical,
    TopPopulation,
    TopArea,
}

impl From<RankArg> for RankingMode {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::None => RankingMode::None,
            RankArg::Alphabetical => RankingMode::Alphabetical,
            RankArg::TopPopulation => RankingMode::TopPopulation,
            RankArg::TopArea => RankingMode::TopArea,
        }
    }
}

/// Theme as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::GruvboxDark,
            ThemeArg::Light => Theme::GruvboxLight,
        }
    }
}

impl Args {
    fn config(&self) -> Config {
        let source = match &self.file {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Http {
                url: self.url.clone(),
                timeout: Duration::from_secs(self.timeout),
            },
        };

        let mut selection = SelectionState::new();
        if let Some(continent) = &self.continent {
            selection = selection.apply(Intent::Continent(continent.clone()));
        }
        if let Some(subregion) = &self.subregion {
            selection = selection.apply(Intent::Subregion(subregion.clone()));
        }
        selection = selection.apply(Intent::Rank(self.rank.into()));

        Config {
            source,
            theme: self.theme.into(),
            selection,
            ..Config::default()
        }
    }
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting Orbis");
    }

    let config = args.config();

    // The dataset is loaded exactly once; without it there is nothing to show
    let dataset = config
        .provider()
        .load_all_countries()
        .map_err(|e| {
            tracing::error!("Error loading dataset: {}", e);
            e
        })
        .context("Failed to load country dataset")?;

    let mut app = App::new(dataset, &config);

    if args.list {
        let view = app.view();
        let mut stdout = io::stdout().lock();
        util::write_listing(&mut stdout, &view)?;
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Orbis exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.cursor_up();
            },
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.cursor_down();
            },

            // Vim navigation
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.goto_first();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            },
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => app.goto_last(),
            (KeyModifiers::CONTROL, KeyCode::Char('f')) | (KeyModifiers::NONE, KeyCode::PageDown) => {
                app.page_down();
            },
            (KeyModifiers::CONTROL, KeyCode::Char('b')) | (KeyModifiers::NONE, KeyCode::PageUp) => {
                app.page_up();
            },

            // Filters
            (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_continent(1),
            (KeyModifiers::SHIFT, KeyCode::Char('C')) => app.cycle_continent(-1),
            (KeyModifiers::NONE, KeyCode::Char('s')) => app.cycle_subregion(1),
            (KeyModifiers::SHIFT, KeyCode::Char('S')) => app.cycle_subregion(-1),

            // Ranking
            (KeyModifiers::NONE, KeyCode::Char('a')) => app.set_ranking(RankingMode::Alphabetical),
            (KeyModifiers::NONE, KeyCode::Char('p')) => app.set_ranking(RankingMode::TopPopulation),
            (KeyModifiers::NONE, KeyCode::Char('r')) => app.set_ranking(RankingMode::TopArea),
            (KeyModifiers::NONE, KeyCode::Char('n')) => app.set_ranking(RankingMode::None),
            (KeyModifiers::NONE, KeyCode::Char('x')) => app.clear(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_current(),
            (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_card(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.show_help();
            },

            _ => {}
        }
        pending_g = false;
    }
}
