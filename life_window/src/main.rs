// main.rs - Game of Life front door: parameters in, window or headless loop out

use std::time::Duration;

use clap::{Parser, Subcommand};
use life_engine::{patterns, query_pairs, LaunchParams, ParamsError, Simulation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod headless;
mod ui;

#[derive(Parser)]
#[command(name = "life")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal grid", long_about = None)]
struct Cli {
    /// Board rows (non-numeric values fall back to the default)
    #[arg(long, global = true)]
    length: Option<String>,

    /// Board columns (non-numeric values fall back to the default)
    #[arg(long, global = true)]
    width: Option<String>,

    /// Probability in [0, 1] that a cell starts alive
    #[arg(long, global = true)]
    density: Option<String>,

    /// Parameters as a query string, e.g. "length=200&width=120&density=0.3".
    /// Individual flags take precedence.
    #[arg(long, global = true)]
    query: Option<String>,

    /// Use the 1000x1000 defaults instead of 300x300
    #[arg(long, global = true)]
    legacy: bool,

    /// Random seed for a reproducible starting layout
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Start from a named pattern (e.g. "glider", "pulsar") instead of random cells
    #[arg(long, global = true)]
    pattern: Option<String>,

    /// Milliseconds between generations while playing (at least 1)
    #[arg(
        long,
        global = true,
        default_value = "5",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the simulation in a window (default)
    Window,
    /// Run without a window and log progress
    Headless {
        /// Number of generations to run before stopping
        #[arg(short, long, default_value = "1000")]
        generations: u64,
    },
}

impl Cli {
    fn launch_params(&self) -> LaunchParams {
        let defaults = if self.legacy { LaunchParams::LEGACY } else { LaunchParams::DENSITY_AWARE };

        let flags = [
            ("length", self.length.as_deref()),
            ("width", self.width.as_deref()),
            ("density", self.density.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)));
        let query = query_pairs(self.query.as_deref().unwrap_or_default());

        LaunchParams::from_pairs(flags.chain(query), defaults)
    }

    fn pattern(&self) -> Result<Option<&'static patterns::Pattern>, ParamsError> {
        self.pattern
            .as_deref()
            .map(|name| {
                patterns::find(name).ok_or_else(|| ParamsError::UnknownPattern(name.into()))
            })
            .transpose()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let params = cli.launch_params();
    let config = params
        .validate()
        .inspect_err(|err| warn!(%err, ?params, "rejecting launch parameters"))?;
    let pattern = cli
        .pattern()
        .inspect_err(|err| warn!(%err, "rejecting launch parameters"))?;
    let interval = Duration::from_millis(cli.interval_ms);

    info!(
        length = config.length,
        width = config.width,
        density = config.density,
        seed = ?cli.seed,
        pattern = ?pattern.map(|p| p.name),
        "starting"
    );

    match cli.command.unwrap_or(Commands::Window) {
        Commands::Window => app::run_window(config, cli.seed, pattern, interval)?,
        Commands::Headless { generations } => {
            let runtime = tokio::runtime::Runtime::new()?;
            let board = match pattern {
                Some(pattern) => config.build_pattern(pattern),
                None => config.build(cli.seed),
            };
            let simulation = Simulation::new(board);
            let simulation = runtime.block_on(headless::run(simulation, generations, interval))?;
            info!(
                generation = simulation.generation(),
                population = simulation.board().population(),
                "finished"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("life").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_gives_density_aware_defaults() {
        assert_eq!(parse(&[]).launch_params(), LaunchParams::DENSITY_AWARE);
    }

    #[test]
    fn legacy_switches_defaults() {
        assert_eq!(parse(&["--legacy"]).launch_params(), LaunchParams::LEGACY);
    }

    #[test]
    fn flags_override_query() {
        let cli = parse(&["--query", "?length=50&width=60", "--length", "70"]);
        let params = cli.launch_params();
        assert_eq!((params.length, params.width), (70, 60));
    }

    #[test]
    fn bad_flag_falls_back_to_default() {
        let params = parse(&["--width", "wide", "--density", "0.4"]).launch_params();
        assert_eq!(params.width, 300);
        assert_eq!(params.density, 0.4);
    }

    #[test]
    fn headless_subcommand_parses_generations() {
        let cli = parse(&["headless", "-g", "12", "--seed", "3"]);
        assert!(matches!(cli.command, Some(Commands::Headless { generations: 12 })));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let args = ["life", "headless", "--interval-ms", "0"];
        assert!(Cli::try_parse_from(args).is_err());
        assert_eq!(parse(&["--interval-ms", "1"]).interval_ms, 1);
    }

    #[test]
    fn pattern_name_is_resolved() {
        let cli = parse(&["--pattern", "GLIDER"]);
        assert_eq!(cli.pattern().unwrap().map(|p| p.name), Some("Glider"));
        assert!(parse(&[]).pattern().unwrap().is_none());
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let cli = parse(&["--pattern", "spaceship"]);
        assert!(matches!(
            cli.pattern(),
            Err(ParamsError::UnknownPattern(name)) if name == "spaceship"
        ));
    }
}
