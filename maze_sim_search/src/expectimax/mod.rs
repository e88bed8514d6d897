use maze_sim::eval::StateEvaluator;
use maze_sim::game_tree_search::{Decision, DecisionError, Game, GameTreeSearch};

use crate::minimax::search::decide_root;
use crate::minimax::types::AdversaryModel;
use crate::minimax::SearchConfig;

/// Expectimax to a fixed depth.
///
/// Adversaries are modeled as choosing uniformly at random among their legal
/// moves, so adversary nodes back up the arithmetic mean of their successor
/// values instead of the minimum.
#[derive(Debug)]
pub struct ExpectimaxSearch<E> {
    pub config: SearchConfig,
    pub evaluator: E,
}

impl<E> ExpectimaxSearch<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: Game, E: StateEvaluator<G>> GameTreeSearch<G> for ExpectimaxSearch<E> {
    fn decide(&mut self, position: &G) -> Result<Decision<G::Action>, DecisionError> {
        decide_root(position, self.config, &self.evaluator, AdversaryModel::Uniform)
    }
}
