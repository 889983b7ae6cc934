mod logging;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_core::model::GameMode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{QuizLoop, SessionError, SurfaceError};
use storage::JsonQuestionSource;
use tracing::{debug, info};
use ui::{AfterGame, MenuChoice, TerminalSurface};

use crate::logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "quiz")]
#[command(about = "Free-text quiz on the history of computing", long_about = None)]
struct Cli {
    /// Directory holding history.json and computers.json
    #[arg(long, env = "QUIZ_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Start straight away in this mode (history or computers)
    #[arg(short, long)]
    mode: Option<GameMode>,

    /// Seed for the question shuffle, for reproducible games
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, env = "QUIZ_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Log output format (text, json or pretty)
    #[arg(long, env = "QUIZ_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

enum Flow {
    Menu,
    Quit,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let source = JsonQuestionSource::new(&cli.data_dir);
    let quiz = QuizLoop::new(source);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(data_dir = %cli.data_dir.display(), seed = ?cli.seed, "quiz starting");

    let mut surface = TerminalSurface::new(io::stdin().lock(), io::stdout().lock());
    let mut preselected = cli.mode;

    loop {
        let mode = match preselected.take() {
            Some(mode) => mode,
            None => match surface.choose_mode() {
                Ok(MenuChoice::Play(mode)) => mode,
                Ok(MenuChoice::Quit) | Err(SurfaceError::Closed) => return Ok(()),
                Err(err) => return Err(err).context("start menu failed"),
            },
        };

        match play_mode(&quiz, mode, &mut surface, &mut rng)? {
            Flow::Menu => continue,
            Flow::Quit => return Ok(()),
        }
    }
}

/// Play `mode` until the player leaves for the menu or quits.
fn play_mode<R, W>(
    quiz: &QuizLoop<JsonQuestionSource>,
    mode: GameMode,
    surface: &mut TerminalSurface<R, W>,
    rng: &mut StdRng,
) -> anyhow::Result<Flow>
where
    R: io::BufRead,
    W: io::Write,
{
    loop {
        match quiz.play(mode, surface, rng) {
            Ok(report) => debug!(score = report.score, tier = ?report.tier, "game over"),
            Err(SessionError::Surface(SurfaceError::Closed)) => return Ok(Flow::Quit),
            Err(err @ SessionError::SourceUnavailable(_)) => {
                return Err(err).with_context(|| format!("cannot start a {mode} game"));
            }
            Err(err) => return Err(err.into()),
        }

        match surface.choose_after_game() {
            Ok(AfterGame::Replay) => {}
            Ok(AfterGame::Menu) => return Ok(Flow::Menu),
            Ok(AfterGame::Quit) | Err(SurfaceError::Closed) => return Ok(Flow::Quit),
            Err(err) => return Err(err.into()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    LoggingConfig::new(cli.log_format, cli.log_level.clone(), cli.verbose).init();

    if let Err(err) = run(cli) {
        // Binary glue: report once and exit.
        eprintln!("Error: {err:#}");
        std::process::exit(2);
    }
}
