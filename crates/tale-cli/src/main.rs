//! Console frontend for Tale, playing the bundled Moral Protocol story.

mod story;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tale_core::DEFAULT_SAVE_PATH;
use tale_engine::{Console, EngineConfig, Game, StdinSource};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::story::MoralProtocol;

#[derive(Parser)]
#[command(
    name = "moral-protocol",
    about = "Moral Protocol, a short interactive fiction",
    version
)]
struct Cli {
    /// Save file used by the `save` and `load` commands
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Seconds to wait between narrated characters
    #[arg(long, default_value = "0.03", allow_negative_numbers = true)]
    speed: f64,

    /// Print narration instantly
    #[arg(long)]
    fast: bool,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let delay = if cli.fast {
        Duration::ZERO
    } else {
        Duration::try_from_secs_f64(cli.speed)
            .map_err(|e| format!("invalid --speed {}: {e}", cli.speed))?
    };

    tracing::debug!(save = %cli.save.display(), ?delay, "starting moral-protocol");

    let config = EngineConfig::default().with_save_path(&cli.save);
    let mut game = Game::new(
        config,
        Console::new().with_delay(delay),
        StdinSource::new(),
    );
    game.play(&MoralProtocol).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
