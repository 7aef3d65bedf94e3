use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kakscroll_core::{Direction, Extent, ScrollRequest};

mod commands;

#[derive(Parser)]
#[command(name = "kakscroll")]
#[command(author, version, about = "Smooth scrolling for Kakoune")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate one scroll in the calling Kakoune client
    ///
    /// Meant to be launched backgrounded from the integration script so the
    /// editor never blocks on the animation; see `kakscroll script`.
    Scroll {
        /// Scroll direction: `d` (down) or `u` (up)
        #[arg(value_parser = parse_direction)]
        direction: Direction,
        /// Extent flag: `1` scrolls half a screen, `0` a full screen
        #[arg(value_parser = parse_extent)]
        extent: Extent,
        /// Count prefix from the editor; 0 behaves as 1
        count: u32,
        /// Per-tick time budget in milliseconds
        duration: f64,
        /// Lines per tick; 0 selects inertial pacing
        speed: u32,
    },
    /// Print the Kakoune integration script (launcher command + mappings)
    Script,
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    match s {
        "d" | "down" => Ok(Direction::Down),
        "u" | "up" => Ok(Direction::Up),
        other => Err(format!("expected `d` or `u`, got `{other}`")),
    }
}

fn parse_extent(s: &str) -> Result<Extent, String> {
    match s {
        "0" => Ok(Extent::Full),
        "1" => Ok(Extent::Half),
        other => Err(format!("expected `0` (full) or `1` (half), got `{other}`")),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr: the `script` subcommand's stdout is consumed by
    // `evaluate-commands %sh{ kakscroll script }` and must stay clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scroll {
            direction,
            extent,
            count,
            duration,
            speed,
        } => commands::scroll::run(ScrollRequest {
            direction,
            extent,
            count,
            tick_duration_ms: duration,
            tick_size: speed,
        }),
        Commands::Script => commands::script::run(),
    }
}
