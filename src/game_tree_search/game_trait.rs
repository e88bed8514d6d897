use std::cmp::Ordering;
use std::fmt::Debug;

use crate::data_structures::ActionList;
use crate::impl_display_from_debug;

/// Index of an agent within a game state.
pub type AgentIndex = usize;

/// The maximizing (controlled) agent. Every other index is an adversary.
pub const MAX_AGENT: AgentIndex = 0;

/// A game state evaluation.
///
/// Wraps `f64` with a total order. [`Score::INF`] and [`Score::NEG_INF`] are
/// the win/loss sentinels and compare above/below every finite score.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    /// Win sentinel.
    pub const INF: Score = Score(f64::INFINITY);

    /// Loss sentinel.
    pub const NEG_INF: Score = Score(f64::NEG_INFINITY);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Debug for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sc({:+})", self.0)
    }
}

impl_display_from_debug!(Score);

/// Capability contract for a turn-based multi-agent game state.
///
/// States are immutable snapshots: [`Game::successor`] returns a new value
/// and never mutates `self`. Applying an action outside
/// [`Game::legal_actions`] is a contract violation on the world's side.
pub trait Game: Clone + Debug {
    type Action: Copy + Debug + Eq;

    /// Total number of agents, including the maximizing agent.
    fn num_agents(&self) -> usize;

    fn legal_actions(&self, agent: AgentIndex) -> ActionList<Self::Action>;

    fn successor(&self, agent: AgentIndex, action: Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Current game score, as displayed to the player.
    fn score(&self) -> Score;
}
