use std::ops::Add;

mod game_trait;

pub use game_trait::*;

/// Node accounting for one decision request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states visited through successor generation.
    pub states_visited: u64,
    /// Number of leaf evaluations.
    pub evals: u64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        evals: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.evals += c.evals;
    }

    pub fn summary(&self) -> String {
        format!("visited={} evals={}", self.states_visited, self.evals)
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// The action chosen for the maximizing agent, with its backed-up value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision<A> {
    pub action: A,
    pub value: Score,
    pub counter: SearchCounter,
}

/// Failure modes at a decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionError {
    /// The maximizing agent has no legal action at the root state.
    #[error("no legal action for the maximizing agent at the root state")]
    NoLegalActions,
}

/// A search strategy that picks one action for the maximizing agent.
pub trait GameTreeSearch<G: Game> {
    fn decide(&mut self, position: &G) -> Result<Decision<G::Action>, DecisionError>;
}
