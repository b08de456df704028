use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chess_core::{GameState, Side};
use greedy_engine::{EngineConfig, EngineError, Game};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    White,
    Black,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::White => Side::White,
            SideArg::Black => Side::Black,
        }
    }
}

/// Play chess against a greedy one-ply engine.
#[derive(Debug, Parser)]
#[command(name = "greedy_play", version)]
struct Args {
    /// Side you play; asked on stdin when omitted
    #[arg(long, value_enum)]
    side: Option<SideArg>,

    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let state = match &args.fen {
        Some(fen) => GameState::from_fen(fen).context("parsing --fen")?,
        None => GameState::startpos(),
    };
    debug!(?config, fen = %state.to_fen(), "starting game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    let human_side = match args.side {
        Some(side) => side.into(),
        None => prompt_side(&mut lines, &mut stdout)?,
    };
    let mut game = Game::from_state(state, human_side, config);

    while !game.is_over() {
        writeln!(stdout, "\n{}", game.state().board().unicode())?;

        if game.is_human_turn() {
            write!(stdout, "Your move ({human_side}): ")?;
            stdout.flush()?;

            let Some(line) = lines.next() else {
                writeln!(stdout)?;
                return Ok(());
            };
            let line = line?;
            let notation = line.trim();
            match notation {
                "" => continue,
                "quit" => return Ok(()),
                _ => {}
            }

            match game.play_human_move(notation) {
                Ok(_) => {}
                Err(err @ EngineError::IllegalMove { .. }) => {
                    writeln!(stdout, "{err}, try again")?;
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let played = game.play_ai_move()?;
            writeln!(stdout, "Engine plays {} (score {:.2})", played.san, played.score)?;
        }
    }

    writeln!(stdout, "\n{}", game.state().board().unicode())?;
    if let Some(outcome) = game.outcome() {
        writeln!(stdout, "Game over: {outcome}")?;
    }
    Ok(())
}

fn prompt_side(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    stdout: &mut impl Write,
) -> Result<Side> {
    write!(stdout, "Play as white or black? ")?;
    stdout.flush()?;

    let line = lines.next().context("no side given")??;
    match line.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Side::White),
        "black" | "b" => Ok(Side::Black),
        other => bail!("unknown side '{other}'"),
    }
}
