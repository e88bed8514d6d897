#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

#[macro_export]
#[doc(hidden)]
macro_rules! impl_display_from_debug {
    (@single $Type: ident) => {
        impl ::std::fmt::Display for $Type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
    ($($Type: ident)+) => {
        $(impl_display_from_debug!(@single $Type);)+
    };
}

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Single-agent state-space search capability: problems, costs, heuristics.
pub mod problem;

/// Multi-agent game capability and the game tree search contract.
pub mod game_tree_search;

/// Grid coordinates and the perception capability consumed by evaluators.
pub mod grid;

/// State evaluation functions.
pub mod eval;

/// Reflex action-choice policy.
pub mod reflex;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` crate
pub use rand;

/// Re-exports the `rustc-hash` crate
pub use rustc_hash;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::data_structures::frontier::{FifoQueue, MinPriorityQueue, Stack};
    pub use crate::data_structures::{ActionList, SuccessorList, Vector};
    pub use crate::eval::{FeatureEvaluator, ScoreEvaluator, StateEvaluator};
    pub use crate::game_tree_search::{
        AgentIndex, Decision, DecisionError, Game, GameTreeSearch, Score, SearchCounter, MAX_AGENT,
    };
    pub use crate::grid::{GridPerception, Pos};
    pub use crate::problem::{
        null_heuristic, Cost, Heuristic, SearchError, SearchProblem, Successor,
    };
    pub use crate::reflex::ReflexPolicy;
}

#[cfg(test)]
mod tests;
