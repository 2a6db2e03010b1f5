//! Bracket simulator CLI
//!
//! Play a single-elimination bracket with Elo updates and export every round.

use anyhow::{Context, Result};
use bracket_core::regions_for;
use clap::Parser;
use std::path::PathBuf;
use tournament::{
    logging, write_outputs, SimConfig, TeamList, TournamentSimulator, TournamentSummary,
};

#[derive(Parser)]
#[command(name = "bracket-sim")]
#[command(about = "Simulate a single-elimination bracket with Elo ratings", long_about = None)]
struct Cli {
    /// Team list JSON: {"teams": [{"name": ..., "elo": ...}, ...]}
    #[arg(long)]
    input: PathBuf,

    /// Output CSV path (team, rating, round)
    #[arg(long)]
    output: PathBuf,

    /// TOML file with simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Rating points exchanged per match
    #[arg(long)]
    k_factor: Option<f64>,

    /// Bonus for the first team of each pair
    #[arg(long, allow_negative_numbers = true)]
    home_advantage: Option<f64>,

    /// Teams per region for --show-bracket
    #[arg(long)]
    region_size: Option<usize>,

    /// Also write a JSON summary of every round
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Log first-round matchups grouped by region
    #[arg(long, default_value = "false")]
    show_bracket: bool,

    /// Print a round-by-round report to stdout
    #[arg(long, default_value = "false")]
    report: bool,

    /// Log every match
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl Cli {
    /// Config file values with command-line overrides applied
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(k_factor) = self.k_factor {
            config.k_factor = k_factor;
        }
        if let Some(home_advantage) = self.home_advantage {
            config.home_advantage = home_advantage;
        }
        if let Some(region_size) = self.region_size {
            config.region_size = region_size;
        }
        Ok(config)
    }
}

fn show_bracket(field: &TeamList, region_size: usize) -> Result<()> {
    let regions = regions_for(&field.names(), region_size).context("grouping regions")?;
    for (number, region) in regions.iter().enumerate() {
        tracing::info!(region = number + 1, matchups = region.len(), "region");
        for matchup in region {
            tracing::info!("  {}", matchup);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "info" });

    let config = cli.sim_config()?;
    let field = TeamList::load(&cli.input)
        .with_context(|| format!("loading teams from {}", cli.input.display()))?;

    tracing::info!(
        teams = field.len(),
        k_factor = config.k_factor,
        home_advantage = config.home_advantage,
        seed = ?config.seed,
        "field loaded"
    );

    if cli.show_bracket {
        show_bracket(&field, config.region_size)?;
    }

    let elo = config
        .elo_system(&field.teams)
        .context("building rating store")?;
    let mut simulator = TournamentSimulator::new(elo, config.rng());
    let log = simulator
        .simulate(&field.names())
        .context("simulating tournament")?;

    write_outputs(&log, &config, &cli.output, cli.summary.as_deref())
        .with_context(|| format!("writing results to {}", cli.output.display()))?;

    if cli.report {
        println!("{}", TournamentSummary::new(&log, &config).generate_report());
    }

    if let Some(champion) = log.champion() {
        tracing::info!(
            champion = champion.team.as_str(),
            rating = champion.rating,
            rounds = log.len() - 1,
            "tournament complete"
        );
    }

    Ok(())
}
