//! Run the agent against a scripted opponent and report the outcome.
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow resets and value updates.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rps_agent::{run_duel, AgentConfig, Move, Opponent, QAgent};

#[derive(Parser)]
#[command(author, version, about = "Duel the Q-learning agent against a scripted opponent", long_about = None)]
struct Args {
    /// rock | paper | scissors | beat-last | frequency | random | cycle:<moves> (e.g. cycle:RRPS)
    #[arg(short, long, default_value = "random", value_parser = parse_opponent)]
    opponent: Opponent,

    /// Rounds to play
    #[arg(short, long, default_value_t = 1000)]
    rounds: u32,

    /// Seed for the agent and the opponent
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// JSON file overriding learning parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full round-by-round result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_opponent(s: &str) -> Result<Opponent, String> {
    match s.to_ascii_lowercase().as_str() {
        "beat-last" => Ok(Opponent::BeatLast),
        "frequency" => Ok(Opponent::Frequency),
        "random" => Ok(Opponent::Random),
        other => {
            if let Some(pattern) = other.strip_prefix("cycle:") {
                let moves = pattern
                    .chars()
                    .map(|c| c.to_string().parse::<Move>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| e.to_string())?;
                Ok(Opponent::Cycle(moves))
            } else {
                other.parse::<Move>()
                    .map(Opponent::Constant)
                    .map_err(|e| e.to_string())
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AgentConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => AgentConfig::default(),
    };
    log::info!("config: {:?}", config);

    let mut agent = QAgent::new(config, args.seed)?;
    let result = run_duel(&mut agent, &args.opponent, args.rounds, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("opponent: {}", args.opponent.describe());
        println!(
            "rounds: {}  wins: {}  losses: {}  ties: {}  win rate: {:.1}%",
            result.round_count,
            result.wins,
            result.losses,
            result.ties,
            result.win_rate() * 100.0
        );
    }

    Ok(())
}
