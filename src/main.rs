use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::game::GameLoop;
use flappy::input::TerminalInput;
use flappy::logging;
use flappy::ui::{restore_terminal, TerminalRenderer};
use flappy::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Parsed command line.
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config PATH  Read settings from PATH instead of the default config file");
    println!("  --seed N       Use a fixed seed for pipe placement");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nControls: Space/Up/Enter flap, R restart after a crash, Q/Esc quit");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => fail("--config needs a path"),
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = Some(seed),
                _ => fail("--seed needs a non-negative integer"),
            },
            other => fail(&format!("Unknown argument: {}", other)),
        }
    }

    args
}

/// Take over the terminal, run the game and hand the terminal back.
///
/// Returns the score of the last session.
fn play(config: &GameConfig, rng: StdRng) -> io::Result<u32> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = match stdout
        .execute(EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())))
    {
        Ok(terminal) => terminal,
        Err(e) => {
            // No backend yet; restore through stdout directly
            if let Err(restore) = restore_terminal(&mut stdout) {
                error!(error = %restore, "failed to restore terminal");
            }
            return Err(e);
        }
    };

    let mut game = GameLoop::new(
        config.bird_size(),
        config.frame_interval(),
        rng,
        TerminalInput,
        TerminalRenderer::new(terminal),
    );
    let result = game.run();
    let restored = game.renderer_mut().restore();

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    result.and(restored)?;
    Ok(game.session().score)
}

fn main() -> io::Result<()> {
    let args = parse_args();

    let mut config = match GameConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&format!("Could not load config: {}", e)),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }
    info!(version = %build_info::version_line(), ?config, "starting");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let score = play(&config, rng)?;
    println!("Final score: {}", score);
    Ok(())
}
