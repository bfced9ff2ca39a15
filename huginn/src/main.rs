use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing_subscriber::EnvFilter;

use huginn::{motion::Command, prelude::*, scenario};

/// Replay world snapshots through the basic move behavior.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory containing `behavior.toml` and `formation.toml`.
    ///
    /// Relative paths are resolved against the working directory, e.g.
    /// `huginn/config` from the workspace root.
    #[arg(long)]
    config_dir: PathBuf,

    /// Directory with config overlays, e.g. for a single player.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Print outcomes as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// World snapshots to replay, in JSON.
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,
}

fn load_config<T: Config>(cli: &Cli) -> huginn::Result<T> {
    match &cli.overlay {
        Some(overlay) => T::load_with_overlay(&cli.config_dir, overlay),
        None => T::load(&cli.config_dir),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    miette::set_panic_hook();

    let cli = Cli::parse();

    let behavior = BasicMove::new(load_config::<BehaviorConfig>(&cli)?);
    let strategy = FormationStrategy::new(load_config::<FormationConfig>(&cli)?);

    for path in &cli.scenarios {
        let snapshot = scenario::load(path)?;
        let outcome = scenario::replay(&behavior, &strategy, &snapshot)?;

        if cli.json {
            println!("{}", serde_json::to_string(&outcome).into_diagnostic()?);
            continue;
        }

        println!("{}: {}", path.display(), outcome.choice.as_ref());
        for command in &outcome.commands {
            match command {
                Command::Dash { target, power } => {
                    println!("  {command} to ({:.1}, {:.1}) at {power:.0}", target.x, target.y);
                }
                Command::Neck(action) => println!("  {command} {}", action.as_ref()),
                _ => println!("  {command}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_required() {
        let error = Cli::try_parse_from(["huginn", "tackle.json"]).unwrap_err();

        assert_eq!(error.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_config_dir_and_scenarios() {
        let cli = Cli::try_parse_from([
            "huginn",
            "--config-dir",
            "huginn/config",
            "--json",
            "tackle.json",
            "intercept.json",
        ])
        .unwrap();

        assert_eq!(cli.config_dir, PathBuf::from("huginn/config"));
        assert!(cli.overlay.is_none());
        assert!(cli.json);
        assert_eq!(
            cli.scenarios,
            [PathBuf::from("tackle.json"), PathBuf::from("intercept.json")]
        );
    }
}
