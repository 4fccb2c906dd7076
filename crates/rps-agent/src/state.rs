//! State encoding over recent match history
//!
//! A state is the triple (own move two rounds ago, own last move,
//! opponent's last move). The space is the 9 ordered own-move pairs
//! RR, RP, RS, PR, PP, PS, SR, SP, SS each extended by R, P, S, giving
//! 27 states with a fixed index order.

use core::fmt;

use serde::{Deserialize, Serialize};
use crate::action::{Move, ACTION_COUNT};

/// Number of distinct states
pub const STATE_COUNT: usize = ACTION_COUNT * ACTION_COUNT * ACTION_COUNT;

/// Encoded recent-history triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub own_before: Move,
    pub own_last: Move,
    pub opponent_last: Move,
}

impl State {
    pub fn new(own_before: Move, own_last: Move, opponent_last: Move) -> Self {
        Self { own_before, own_last, opponent_last }
    }

    /// Stable index in `0..STATE_COUNT`
    pub fn index(&self) -> usize {
        self.own_before.index() * ACTION_COUNT * ACTION_COUNT
            + self.own_last.index() * ACTION_COUNT
            + self.opponent_last.index()
    }

    /// Inverse of [`State::index`]
    pub fn from_index(index: usize) -> Option<State> {
        if index >= STATE_COUNT {
            return None;
        }
        Some(State {
            own_before: Move::from_index(index / (ACTION_COUNT * ACTION_COUNT))?,
            own_last: Move::from_index(index / ACTION_COUNT % ACTION_COUNT)?,
            opponent_last: Move::from_index(index % ACTION_COUNT)?,
        })
    }

    /// Every state in index order
    pub fn all() -> impl Iterator<Item = State> {
        (0..STATE_COUNT).filter_map(State::from_index)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.own_before, self.own_last, self.opponent_last)
    }
}

/// States one round apart, as consumed by the value update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub previous: State,
    pub current: State,
}

/// Derive the previous and current states from the histories
///
/// Needs at least three own moves and two opponent moves; returns `None`
/// when the history is too short to form both states.
///
/// # Arguments
/// * `own` - Our past moves, oldest first
/// * `opponent` - Opponent's past moves, oldest first
pub fn encode(own: &[Move], opponent: &[Move]) -> Option<Transition> {
    let [.., own_3, own_2, own_1] = own else {
        return None;
    };
    let [.., opp_2, opp_1] = opponent else {
        return None;
    };

    Some(Transition {
        previous: State::new(*own_3, *own_2, *opp_2),
        current: State::new(*own_2, *own_1, *opp_1),
    })
}
