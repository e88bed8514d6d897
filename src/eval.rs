use crate::game_tree_search::{Game, Score};
use crate::grid::GridPerception;

/// Leaf-value oracle consumed by the game tree search engines and by the
/// reflex policy.
pub trait StateEvaluator<G: Game> {
    fn evaluate(&self, state: &G) -> Score;
}

/// Evaluates a state by its game score alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<G: Game> StateEvaluator<G> for ScoreEvaluator {
    #[inline]
    fn evaluate(&self, state: &G) -> Score {
        state.score()
    }
}

/// Hand-crafted grid-world evaluation.
///
/// Rewards closing in on the nearest goal item, penalizes proximity to live
/// adversaries and leftover goal and bonus items. Returns the loss sentinel
/// when a live adversary is within `danger_radius` cells and the win
/// sentinel once no goal items remain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureEvaluator {
    pub goal_distance_weight: f64,
    pub adversary_distance_weight: f64,
    pub remaining_goal_weight: f64,
    pub bonus_item_weight: f64,
    pub danger_radius: u32,
}

impl FeatureEvaluator {
    pub const DEFAULT: Self = Self {
        goal_distance_weight: 20.0,
        adversary_distance_weight: 10.0,
        remaining_goal_weight: 30.0,
        bonus_item_weight: 100.0,
        danger_radius: 3,
    };
}

impl Default for FeatureEvaluator {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<G: GridPerception> StateEvaluator<G> for FeatureEvaluator {
    fn evaluate(&self, state: &G) -> Score {
        let pos = state.agent_position();

        let nearest_threat = state
            .adversary_positions()
            .iter()
            .zip(state.adversary_scared_timers().iter())
            .filter(|(_, &timer)| timer == 0)
            .map(|(&adversary, _)| pos.manhattan_distance(adversary))
            .min();
        if let Some(distance) = nearest_threat {
            if distance <= self.danger_radius {
                return Score::NEG_INF;
            }
        }

        let goals = state.goal_positions();
        let Some(nearest_goal) = goals.iter().map(|&goal| pos.manhattan_distance(goal)).min()
        else {
            return Score::INF;
        };

        let threat_term = nearest_threat
            .map(|distance| self.adversary_distance_weight / distance as f64)
            .unwrap_or(0.0);
        let value = self.goal_distance_weight / nearest_goal.max(1) as f64
            - threat_term
            - self.remaining_goal_weight * goals.len() as f64
            - self.bonus_item_weight * state.bonus_positions().len() as f64;
        Score::new(value)
    }
}
