use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::data_structures::Vector;
use crate::eval::StateEvaluator;
use crate::game_tree_search::{
    Decision, DecisionError, Game, GameTreeSearch, Score, SearchCounter, MAX_AGENT,
};

/// Chooses an action by scoring each successor state with an evaluation
/// function, one ply deep.
///
/// Ties are broken uniformly at random; two policies seeded identically make
/// identical choices.
#[derive(Debug)]
pub struct ReflexPolicy<E> {
    pub evaluator: E,
    rng: SmallRng,
}

impl<E> ReflexPolicy<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(evaluator: E, seed: u64) -> Self {
        Self {
            evaluator,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<G: Game, E: StateEvaluator<G>> GameTreeSearch<G> for ReflexPolicy<E> {
    fn decide(&mut self, position: &G) -> Result<Decision<G::Action>, DecisionError> {
        let actions = position.legal_actions(MAX_AGENT);
        if actions.is_empty() {
            return Err(DecisionError::NoLegalActions);
        }

        let mut counter = SearchCounter::ZERO;
        let mut scored: Vector<(G::Action, Score)> = Vector::new();
        for &action in &actions {
            let successor = position.successor(MAX_AGENT, action);
            counter.states_visited += 1;
            counter.evals += 1;
            scored.push((action, self.evaluator.evaluate(&successor)));
        }

        let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
            return Err(DecisionError::NoLegalActions);
        };
        let best_actions: Vector<G::Action> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(action, _)| action)
            .collect();
        let action = best_actions[self.rng.gen_range(0..best_actions.len())];
        Ok(Decision {
            action,
            value: best,
            counter,
        })
    }
}
