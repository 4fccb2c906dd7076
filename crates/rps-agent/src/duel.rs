//! Duel execution against scripted opponents
//!
//! Opponents are deliberately simple, exploitable bots. They exist so the
//! agent can be exercised end to end (tests, CLI, WASM replay).

use serde::{Deserialize, Serialize};
use crate::action::Move;
use crate::agent::{QAgent, Signal};
use crate::error::AgentError;
use crate::policy::Choice;
use crate::random::SeededRng;
use crate::reward;

/// Scripted opponent behavior
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Same move every round.
    Constant(Move),
    /// Repeat a fixed sequence.
    Cycle(Vec<Move>),
    /// Play whatever beats the agent's previous move. Opens with Rock.
    BeatLast,
    /// Counter the agent's most frequent move so far. Opens with Rock.
    Frequency,
    /// Uniformly random.
    Random,
}

impl Opponent {
    /// Next move given the agent's moves from earlier rounds
    fn next_move(&self, agent_history: &[Move], round: u32, rng: &mut SeededRng) -> Move {
        match self {
            Opponent::Constant(m) => *m,
            Opponent::Cycle(moves) => moves[round as usize % moves.len()],
            Opponent::BeatLast => agent_history
                .last()
                .map_or(Move::Rock, |m| m.beaten_by()),
            Opponent::Frequency => {
                if agent_history.is_empty() {
                    return Move::Rock;
                }
                let mut counts = [0usize; 3];
                for m in agent_history {
                    counts[m.index()] += 1;
                }
                // Ties go to the earliest move
                let mut favorite = Move::Rock;
                for m in Move::ALL {
                    if counts[m.index()] > counts[favorite.index()] {
                        favorite = m;
                    }
                }
                favorite.beaten_by()
            }
            Opponent::Random => Move::ALL[rng.next_range(3) as usize],
        }
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            Opponent::Constant(m) => format!("Always plays {}.", m),
            Opponent::Cycle(moves) => {
                let pattern: String = moves.iter().map(|m| m.symbol()).collect();
                format!("Repeats the sequence {}.", pattern)
            }
            Opponent::BeatLast => "Plays what beats your previous move.".to_string(),
            Opponent::Frequency => "Counters your most frequent move.".to_string(),
            Opponent::Random => "Plays uniformly at random.".to_string(),
        }
    }
}

/// Result of a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub agent_move: Move,
    pub opponent_move: Move,
    /// Agent's reward for the round
    pub reward: i8,
    pub choice: Choice,
}

/// Result of a complete duel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelResult {
    pub rounds: Vec<RoundRecord>,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub round_count: u32,
}

impl DuelResult {
    /// Share of rounds the agent won
    pub fn win_rate(&self) -> f64 {
        if self.round_count == 0 {
            return 0.0;
        }
        self.wins as f64 / self.round_count as f64
    }
}

/// Run a complete duel as a fresh match
///
/// # Arguments
/// * `agent` - Agent under test; its learned state is reset by the first round
/// * `opponent` - Scripted opponent
/// * `rounds` - Number of rounds to play
/// * `seed` - Seed for the opponent's random draws
pub fn run_duel(
    agent: &mut QAgent,
    opponent: &Opponent,
    rounds: u32,
    seed: u64,
) -> Result<DuelResult, AgentError> {
    if let Opponent::Cycle(moves) = opponent {
        if moves.is_empty() {
            return Err(AgentError::EmptyCycle);
        }
    }

    let mut rng = SeededRng::new(seed, 1);
    let mut agent_history: Vec<Move> = Vec::with_capacity(rounds as usize);
    let mut records: Vec<RoundRecord> = Vec::with_capacity(rounds as usize);
    let mut previous: Option<Move> = None;
    let (mut wins, mut losses, mut ties) = (0u32, 0u32, 0u32);

    for round in 0..rounds {
        // Both sides commit before seeing this round's moves
        let opponent_move = opponent.next_move(&agent_history, round, &mut rng);
        let choice = agent.step(Signal::from(previous))?;
        let agent_move = choice.action();

        let r = reward(agent_move, opponent_move);
        match r {
            1 => wins += 1,
            -1 => losses += 1,
            _ => ties += 1,
        }

        records.push(RoundRecord {
            round,
            agent_move,
            opponent_move,
            reward: r,
            choice,
        });

        agent_history.push(agent_move);
        previous = Some(opponent_move);
    }

    log::debug!(
        "duel vs {:?}: {} wins, {} losses, {} ties over {} rounds",
        opponent, wins, losses, ties, rounds
    );

    Ok(DuelResult {
        rounds: records,
        wins,
        losses,
        ties,
        round_count: rounds,
    })
}
