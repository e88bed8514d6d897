use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::data_structures::SuccessorList;
use crate::impl_display_from_debug;

/// A step, path or heuristic cost.
///
/// Wraps `f64` with a total order so costs can key the priority frontier.
/// Costs are expected to be non-negative; the engines assume but do not
/// verify this.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Cost {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Cost;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl From<f64> for Cost {
    #[inline]
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl_display_from_debug!(Cost);

/// Successor triple produced by expanding a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

/// Capability contract for a single-agent state-space search problem.
///
/// Concrete worlds satisfy this by composition; the search engines depend on
/// nothing else about the world.
pub trait SearchProblem {
    type State: Clone + Debug + Eq + Hash;
    type Action: Copy + Debug + Eq;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Enumerate the `(state, action, cost)` successor triples of `state`.
    fn successors(&self, state: &Self::State) -> SuccessorList<Successor<Self::State, Self::Action>>;

    /// Total cost of a legal action sequence applied from the start state.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Cost;
}

/// Lower-bound estimate of the remaining cost from a state to a goal.
///
/// Admissibility and consistency are the caller's responsibility; the
/// engines assume but do not verify them.
pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

impl<P: SearchProblem, F> Heuristic<P> for F
where
    F: Fn(&P::State, &P) -> Cost,
{
    #[inline]
    fn estimate(&self, state: &P::State, problem: &P) -> Cost {
        self(state, problem)
    }
}

/// The trivial heuristic; reduces A* to uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> Cost {
    Cost::ZERO
}

/// Failure modes of the generic search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The frontier was exhausted without popping a goal state.
    #[error("no path to a goal state exists")]
    NoPathFound,
}
