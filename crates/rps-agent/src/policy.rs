//! Action selection: random bootstrap, then epsilon-greedy over the value table

use serde::{Deserialize, Serialize};
use crate::action::{Move, ACTION_COUNT};
use crate::random::SeededRng;
use crate::state::State;
use crate::table::ValueTable;

/// Which selection rule is in force for the current round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// Too little history to form a state. Play uniformly at random.
    Bootstrap,
    /// Learning engaged. Explore with the exploration rate, otherwise exploit.
    Learned,
}

impl Regime {
    /// Regime for a round given how many opponent moves have been recorded
    pub fn for_history(opponent_moves: usize, bootstrap_window: usize) -> Self {
        if opponent_moves < bootstrap_window {
            Regime::Bootstrap
        } else {
            Regime::Learned
        }
    }
}

/// A selected move and the rule that produced it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Bootstrap(Move),
    Explore(Move),
    Exploit(Move),
}

impl Choice {
    pub fn action(self) -> Move {
        match self {
            Choice::Bootstrap(m) | Choice::Explore(m) | Choice::Exploit(m) => m,
        }
    }
}

fn random_move(rng: &mut SeededRng) -> Move {
    Move::ALL[rng.next_range(ACTION_COUNT as u32) as usize]
}

/// Pick this round's move
///
/// # Arguments
/// * `table` - Current value estimates
/// * `current` - Current state; `None` selects the bootstrap rule
/// * `exploration` - Probability of a random move in the learned regime
/// * `rng` - Source for every random draw
pub fn choose(
    table: &ValueTable,
    current: Option<State>,
    exploration: f64,
    rng: &mut SeededRng,
) -> Choice {
    let choice = match current {
        None => Choice::Bootstrap(random_move(rng)),
        Some(state) => {
            if rng.next_unit() < exploration {
                Choice::Explore(random_move(rng))
            } else {
                Choice::Exploit(table.best_action(state))
            }
        }
    };

    log::trace!("choice {:?} (exploration {:.3})", choice, exploration);
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    #[test]
    fn test_regime_boundary() {
        assert_eq!(Regime::for_history(0, 4), Regime::Bootstrap);
        assert_eq!(Regime::for_history(3, 4), Regime::Bootstrap);
        assert_eq!(Regime::for_history(4, 4), Regime::Learned);
        assert_eq!(Regime::for_history(50, 4), Regime::Learned);
    }

    #[test]
    fn test_bootstrap_is_uniform() {
        let table = ValueTable::new();
        let mut rng = SeededRng::new(42, 0);
        let mut counts = [0u32; ACTION_COUNT];
        let samples = 30_000;

        for _ in 0..samples {
            match choose(&table, None, 0.0, &mut rng) {
                Choice::Bootstrap(m) => counts[m.index()] += 1,
                other => panic!("unexpected {:?}", other),
            }
        }

        for count in counts {
            let share = count as f64 / samples as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.02, "share {} not ~1/3", share);
        }
    }

    #[test]
    fn test_zero_exploration_always_exploits() {
        let mut table = ValueTable::new();
        let state = State::new(Rock, Rock, Rock);
        table.update(state, Paper, 1, state, 0.5, 0.005);
        let mut rng = SeededRng::new(1, 0);

        for _ in 0..100 {
            assert_eq!(choose(&table, Some(state), 0.0, &mut rng), Choice::Exploit(Paper));
        }
    }

    #[test]
    fn test_full_exploration_always_explores() {
        let table = ValueTable::new();
        let state = State::new(Rock, Rock, Rock);
        let mut rng = SeededRng::new(1, 0);

        for _ in 0..100 {
            assert!(matches!(choose(&table, Some(state), 1.0, &mut rng), Choice::Explore(_)));
        }
    }

    #[test]
    fn test_exploration_frequency() {
        let table = ValueTable::new();
        let state = State::new(Paper, Scissors, Rock);
        let mut rng = SeededRng::new(9, 2);
        let samples = 20_000;

        let explored = (0..samples)
            .filter(|_| matches!(choose(&table, Some(state), 0.3, &mut rng), Choice::Explore(_)))
            .count();

        let share = explored as f64 / samples as f64;
        assert!((share - 0.3).abs() < 0.02, "explore share {} not ~0.3", share);
    }

    #[test]
    fn test_choice_action() {
        assert_eq!(Choice::Bootstrap(Rock).action(), Rock);
        assert_eq!(Choice::Explore(Paper).action(), Paper);
        assert_eq!(Choice::Exploit(Scissors).action(), Scissors);
    }
}
