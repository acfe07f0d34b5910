// Command-line driver for level files.
// Records are separated by lines starting with ';'.
// Tiles: '#' wall, 'P' agent, 'C' crate, 'X' goal, '!' crate on goal, '?' agent on goal, ' ' floor.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sokoban_grid::{DecodeMode, Direction, LevelCatalog, SavedGame, Session, SessionEvent};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sokoban", about = "Inspect and replay Sokoban level files")]
struct Cli {
    /// Level file: one level per record, records separated by ';' lines
    file: PathBuf,

    /// Keep the levels read before an unreadable line instead of failing
    #[arg(long)]
    lenient: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every level with its size
    List,
    /// Print one level as loaded
    Show {
        #[arg(short, long, default_value_t = 0)]
        level: usize,
    },
    /// Replay a move script (N/S/E/W or U/D/R/L) and print the result
    Play {
        #[arg(short, long, default_value_t = 0)]
        level: usize,
        #[arg(short, long, default_value = "")]
        moves: String,
        /// Continue from a saved game instead of a fresh level
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Write the final state as a saved game
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the whole catalog as JSON
    Export,
}

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        error!(error = %err, "sokoban failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if cli.lenient { DecodeMode::Lenient } else { DecodeMode::Strict };
    let catalog = load_catalog(&cli.file, mode)?;
    info!(levels = catalog.len(), file = %cli.file.display(), "catalog loaded");

    match cli.command {
        Command::List => {
            for (index, level) in catalog.iter().enumerate() {
                println!("{:>4}  {}x{}", index, level.width(), level.height());
            }
        }
        Command::Show { level } => {
            let grid = catalog.select_level(level)?;
            print!("{}", grid);
        }
        Command::Play { level, moves, resume, save } => {
            let session = match resume {
                Some(path) => {
                    let saved: SavedGame = serde_json::from_reader(BufReader::new(File::open(path)?))?;
                    Session::restore(catalog, &saved)?
                }
                None => Session::new(catalog, level)?,
            };
            let session = run_moves(session, &moves)?;

            print!("{}", session.grid());
            println!("{}", session.status_line());
            println!("won: {}", session.grid().game_won());

            if let Some(path) = save {
                serde_json::to_writer_pretty(File::create(&path)?, &session.save())?;
                info!(path = %path.display(), "game saved");
            }
        }
        Command::Export => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}

fn load_catalog(path: &Path, mode: DecodeMode) -> Result<LevelCatalog, Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(LevelCatalog::from_reader(reader, mode)?)
}

/// Plays the script until it ends or the catalog is finished.
fn run_moves(mut session: Session, moves: &str) -> Result<Session, Box<dyn std::error::Error>> {
    for (index, c) in moves.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let direction = Direction::from_char(c).ok_or_else(|| format!("unknown move '{}' at position {}", c, index))?;
        match session.play(direction) {
            SessionEvent::Blocked(err) => warn!(?direction, %err, "move blocked"),
            SessionEvent::Moved(_) => {}
            SessionEvent::LevelWon { level, moves } => {
                println!("level {} solved in {} moves", level + 1, moves);
            }
            SessionEvent::CatalogCompleted { level, moves } => {
                println!("level {} solved in {} moves, no levels left", level + 1, moves);
                break;
            }
            SessionEvent::Finished => break,
        }
    }
    Ok(session)
}
