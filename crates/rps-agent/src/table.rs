//! Value table and temporal-difference update

use serde::{Deserialize, Serialize};
use crate::action::{Move, ACTION_COUNT};
use crate::state::{State, STATE_COUNT};

/// Estimated values indexed by (state, action)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueTable {
    values: [[f64; ACTION_COUNT]; STATE_COUNT],
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueTable {
    /// All-zero table
    pub fn new() -> Self {
        Self { values: [[0.0; ACTION_COUNT]; STATE_COUNT] }
    }

    pub fn get(&self, state: State, action: Move) -> f64 {
        self.values[state.index()][action.index()]
    }

    /// Action values for one state, in [`Move::ALL`] order
    pub fn row(&self, state: State) -> &[f64; ACTION_COUNT] {
        &self.values[state.index()]
    }

    /// Highest value available from a state
    pub fn max_value(&self, state: State) -> f64 {
        self.row(state)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the highest value; ties go to the earliest action
    pub fn best_action(&self, state: State) -> Move {
        let row = self.row(state);
        let mut best = 0;
        for (i, value) in row.iter().enumerate().skip(1) {
            if *value > row[best] {
                best = i;
            }
        }
        Move::ALL[best]
    }

    /// Apply one TD step and return the new value
    ///
    /// V[s,a] += alpha * (r + gamma * max V[ns,·] - V[s,a])
    pub fn update(
        &mut self,
        previous: State,
        action: Move,
        reward: i8,
        current: State,
        learning_rate: f64,
        discount: f64,
    ) -> f64 {
        let future = self.max_value(current);
        let cell = &mut self.values[previous.index()][action.index()];
        let old = *cell;
        *cell = old + learning_rate * (reward as f64 + discount * future - old);

        log::trace!(
            "update V[{}, {}]: reward {} future {:.4} {:.4} -> {:.4}",
            previous, action, reward, future, old, *cell
        );

        *cell
    }

    /// Zero every entry
    pub fn clear(&mut self) {
        self.values = [[0.0; ACTION_COUNT]; STATE_COUNT];
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().flatten().all(|v| *v == 0.0)
    }

    /// Rows in state index order
    pub fn rows(&self) -> &[[f64; ACTION_COUNT]; STATE_COUNT] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;

    const ALPHA: f64 = 0.5;
    const GAMMA: f64 = 0.005;

    #[test]
    fn test_new_table_is_zero() {
        let table = ValueTable::new();
        assert!(table.is_zero());
        assert_eq!(table.rows().len(), 27);
    }

    #[test]
    fn test_update_from_zero() {
        let mut table = ValueTable::new();
        let s = State::new(Rock, Rock, Rock);
        let ns = State::new(Rock, Paper, Rock);

        let v = table.update(s, Paper, 1, ns, ALPHA, GAMMA);
        assert_eq!(v, 0.5);
        assert_eq!(table.get(s, Paper), 0.5);
        assert_eq!(table.get(s, Rock), 0.0);
    }

    #[test]
    fn test_update_bootstraps_from_next_state() {
        let mut table = ValueTable::new();
        let s = State::new(Rock, Rock, Rock);
        let ns = State::new(Paper, Paper, Rock);

        table.update(ns, Scissors, 1, s, ALPHA, GAMMA);
        assert_eq!(table.max_value(ns), 0.5);

        let v = table.update(s, Paper, -1, ns, ALPHA, GAMMA);
        let expected = 0.5 * (-1.0 + GAMMA * 0.5);
        assert!((v - expected).abs() < 1e-12, "{} != {}", v, expected);
    }

    #[test]
    fn test_repeated_reward_converges() {
        let mut table = ValueTable::new();
        let s = State::new(Paper, Paper, Rock);
        // Self-loop: fixed point of v = v + a(r + g*v - v) is r / (1 - g)
        for _ in 0..200 {
            table.update(s, Paper, 1, s, ALPHA, GAMMA);
        }
        let fixed_point = 1.0 / (1.0 - GAMMA);
        assert!((table.get(s, Paper) - fixed_point).abs() < 1e-9);
    }

    #[test]
    fn test_best_action_first_max_wins() {
        let mut table = ValueTable::new();
        let s = State::new(Scissors, Rock, Paper);
        assert_eq!(table.best_action(s), Rock);

        table.update(s, Scissors, 1, s, ALPHA, 0.0);
        assert_eq!(table.best_action(s), Scissors);

        table.update(s, Paper, 1, s, ALPHA, 0.0);
        // Paper and Scissors tie at 0.5; Paper comes first
        assert_eq!(table.best_action(s), Paper);
    }

    #[test]
    fn test_best_action_with_negative_values() {
        let mut table = ValueTable::new();
        let s = State::new(Rock, Rock, Rock);
        table.update(s, Rock, -1, s, ALPHA, 0.0);
        assert_eq!(table.best_action(s), Paper);
        assert_eq!(table.max_value(s), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut table = ValueTable::new();
        let s = State::new(Rock, Rock, Rock);
        table.update(s, Rock, 1, s, ALPHA, GAMMA);
        assert!(!table.is_zero());
        table.clear();
        assert!(table.is_zero());
    }
}
