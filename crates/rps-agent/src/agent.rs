//! Match-scoped learning agent
//!
//! `QAgent` owns everything learned during one match: the value table,
//! the exploration rate and both move histories. A [`Signal::NewMatch`]
//! wipes all of it before the round is processed.

use crate::action::Move;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::policy::{self, Choice, Regime};
use crate::random::SeededRng;
use crate::reward;
use crate::state::{self, State};
use crate::table::ValueTable;

/// Per-round input from the match harness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// First round against a new opponent; no previous move exists.
    NewMatch,
    /// The opponent's move from the previous round.
    Opponent(Move),
}

impl Signal {
    /// Interpret a harness symbol
    ///
    /// `None` and the empty string both mean a new match.
    pub fn from_symbol(symbol: Option<&str>) -> Result<Signal, AgentError> {
        match symbol {
            None => Ok(Signal::NewMatch),
            Some(s) if s.is_empty() => Ok(Signal::NewMatch),
            Some(s) => Ok(Signal::Opponent(s.parse()?)),
        }
    }
}

impl From<Option<Move>> for Signal {
    fn from(previous: Option<Move>) -> Self {
        match previous {
            None => Signal::NewMatch,
            Some(m) => Signal::Opponent(m),
        }
    }
}

/// Online Q-learning Rock-Paper-Scissors player
#[derive(Clone, Debug)]
pub struct QAgent {
    config: AgentConfig,
    seed: u64,
    rng: SeededRng,
    table: ValueTable,
    exploration: f64,
    own_history: Vec<Move>,
    opponent_history: Vec<Move>,
    in_match: bool,
    matches_started: u32,
    last_choice: Option<Choice>,
}

impl QAgent {
    /// Create an agent with a validated configuration
    ///
    /// Every match reseeds the agent's random stream from `seed`.
    pub fn new(config: AgentConfig, seed: u64) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Agent with the default learning parameters
    pub fn with_seed(seed: u64) -> Self {
        Self::build(AgentConfig::default(), seed)
    }

    fn build(config: AgentConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: SeededRng::new(seed, 0),
            table: ValueTable::new(),
            exploration: config.initial_exploration,
            own_history: Vec::new(),
            opponent_history: Vec::new(),
            in_match: false,
            matches_started: 0,
            last_choice: None,
        }
    }

    /// Play one round
    ///
    /// Order within a call: reset (new match) or record the opponent move,
    /// update the value table, choose, record our move, decay exploration.
    ///
    /// # Errors
    /// `MatchNotStarted` if an opponent move arrives before any new-match
    /// signal. The agent is left untouched in that case.
    pub fn play(&mut self, signal: Signal) -> Result<Move, AgentError> {
        self.step(signal).map(Choice::action)
    }

    /// Like [`QAgent::play`], also reporting which rule picked the move
    pub fn step(&mut self, signal: Signal) -> Result<Choice, AgentError> {
        match signal {
            Signal::NewMatch => self.reset(),
            Signal::Opponent(m) => {
                if !self.in_match {
                    return Err(AgentError::MatchNotStarted);
                }
                self.opponent_history.push(m);
            }
        }

        let current = match self.regime() {
            Regime::Bootstrap => None,
            Regime::Learned => self.learn(),
        };

        let choice = policy::choose(&self.table, current, self.exploration, &mut self.rng);

        self.own_history.push(choice.action());
        self.exploration = self.config.exploration_after(self.own_history.len());
        self.last_choice = Some(choice);

        Ok(choice)
    }

    /// Play one round from a harness symbol (`None`/`""` = new match)
    pub fn play_symbol(&mut self, previous: Option<&str>) -> Result<Move, AgentError> {
        let signal = Signal::from_symbol(previous)?;
        self.play(signal)
    }

    fn reset(&mut self) {
        self.table.clear();
        self.exploration = self.config.initial_exploration;
        self.own_history.clear();
        self.opponent_history.clear();
        self.rng = SeededRng::new(self.seed, 0);
        self.in_match = true;
        self.last_choice = None;
        self.matches_started += 1;

        log::debug!("match {}: learned state reset", self.matches_started);
    }

    /// Update from the last round's outcome and return the current state
    fn learn(&mut self) -> Option<State> {
        let transition = state::encode(&self.own_history, &self.opponent_history)?;
        let own_last = *self.own_history.last()?;
        let opponent_last = *self.opponent_history.last()?;

        if self.opponent_history.len() == self.config.bootstrap_window {
            log::debug!(
                "match {}: learning engaged after {} rounds",
                self.matches_started,
                self.own_history.len()
            );
        }

        self.table.update(
            transition.previous,
            own_last,
            reward(own_last, opponent_last),
            transition.current,
            self.config.learning_rate,
            self.config.discount,
        );

        Some(transition.current)
    }

    /// Selection rule in force for the recorded opponent history
    pub fn regime(&self) -> Regime {
        Regime::for_history(self.opponent_history.len(), self.config.bootstrap_window)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn value_table(&self) -> &ValueTable {
        &self.table
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration
    }

    pub fn own_history(&self) -> &[Move] {
        &self.own_history
    }

    pub fn opponent_history(&self) -> &[Move] {
        &self.opponent_history
    }

    /// Rounds completed in the current match
    pub fn rounds_played(&self) -> usize {
        self.own_history.len()
    }

    /// How the most recent move was selected
    pub fn last_choice(&self) -> Option<Choice> {
        self.last_choice
    }
}
