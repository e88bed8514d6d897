use maze_sim::data_structures::ActionList;
use maze_sim::eval::StateEvaluator;
use maze_sim::game_tree_search::{
    AgentIndex, Decision, DecisionError, Game, GameTreeSearch, Score, SearchCounter, MAX_AGENT,
};

use crate::minimax::types::{AdversaryModel, Role, SearchConfig};

/// Next agent to move and the depth of its node. The depth counter advances
/// exactly once per round, on the transition away from the last agent index.
#[inline]
pub(crate) fn next_turn(num_agents: usize, agent: AgentIndex, depth: u32) -> (AgentIndex, u32) {
    if agent + 1 == num_agents {
        (MAX_AGENT, depth + 1)
    } else {
        (agent + 1, depth)
    }
}

/// One recursive traversal of the game tree, parameterized by the adversary
/// model. Node roles are derived from the agent index.
pub(crate) struct TreeWalk<'a, E> {
    evaluator: &'a E,
    depth_limit: u32,
    model: AdversaryModel,
    pub(crate) counter: SearchCounter,
}

impl<'a, E> TreeWalk<'a, E> {
    pub(crate) fn new(evaluator: &'a E, config: SearchConfig, model: AdversaryModel) -> Self {
        Self {
            evaluator,
            depth_limit: config.depth as u32,
            model,
            counter: SearchCounter::ZERO,
        }
    }

    pub(crate) fn value<G>(
        &mut self,
        state: &G,
        agent: AgentIndex,
        depth: u32,
        window: (Score, Score),
    ) -> Score
    where
        G: Game,
        E: StateEvaluator<G>,
    {
        if state.is_win() || state.is_lose() || depth > self.depth_limit {
            self.counter.evals += 1;
            return self.evaluator.evaluate(state);
        }
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // Nothing to expand; treat like a terminal leaf.
            self.counter.evals += 1;
            return self.evaluator.evaluate(state);
        }
        let (next_agent, next_depth) = next_turn(state.num_agents(), agent, depth);
        match self.model.role_of(agent) {
            Role::Max => self.max_value(state, &actions, agent, next_agent, next_depth, window),
            Role::Min => self.min_value(state, &actions, agent, next_agent, next_depth, window),
            Role::Chance => self.mean_value(state, &actions, agent, next_agent, next_depth, window),
        }
    }

    fn max_value<G>(
        &mut self,
        state: &G,
        actions: &ActionList<G::Action>,
        agent: AgentIndex,
        next_agent: AgentIndex,
        next_depth: u32,
        (mut alpha, beta): (Score, Score),
    ) -> Score
    where
        G: Game,
        E: StateEvaluator<G>,
    {
        let mut best = Score::NEG_INF;
        for &action in actions {
            let successor = state.successor(agent, action);
            self.counter.states_visited += 1;
            let value = self.value(&successor, next_agent, next_depth, (alpha, beta));
            best = best.max(value);
            if self.model.prunes() {
                if best > beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
        }
        best
    }

    fn min_value<G>(
        &mut self,
        state: &G,
        actions: &ActionList<G::Action>,
        agent: AgentIndex,
        next_agent: AgentIndex,
        next_depth: u32,
        (alpha, mut beta): (Score, Score),
    ) -> Score
    where
        G: Game,
        E: StateEvaluator<G>,
    {
        let mut best = Score::INF;
        for &action in actions {
            let successor = state.successor(agent, action);
            self.counter.states_visited += 1;
            let value = self.value(&successor, next_agent, next_depth, (alpha, beta));
            best = best.min(value);
            if self.model.prunes() {
                if best < alpha {
                    return best;
                }
                beta = beta.min(best);
            }
        }
        best
    }

    fn mean_value<G>(
        &mut self,
        state: &G,
        actions: &ActionList<G::Action>,
        agent: AgentIndex,
        next_agent: AgentIndex,
        next_depth: u32,
        window: (Score, Score),
    ) -> Score
    where
        G: Game,
        E: StateEvaluator<G>,
    {
        let mut total = 0.0;
        for &action in actions {
            let successor = state.successor(agent, action);
            self.counter.states_visited += 1;
            total += self.value(&successor, next_agent, next_depth, window).value();
        }
        Score::new(total / actions.len() as f64)
    }
}

/// Top-level decision: evaluate every legal root action of the maximizing
/// agent and keep the strictly greatest value. The first action wins ties.
pub(crate) fn decide_root<G, E>(
    position: &G,
    config: SearchConfig,
    evaluator: &E,
    model: AdversaryModel,
) -> Result<Decision<G::Action>, DecisionError>
where
    G: Game,
    E: StateEvaluator<G>,
{
    let actions = position.legal_actions(MAX_AGENT);
    if actions.is_empty() {
        return Err(DecisionError::NoLegalActions);
    }

    let mut walk = TreeWalk::new(evaluator, config, model);
    let num_agents = position.num_agents();
    let (next_agent, next_depth) = next_turn(num_agents, MAX_AGENT, 1);
    let mut best: Option<(G::Action, Score)> = None;
    let mut alpha = Score::NEG_INF;
    let beta = Score::INF;
    for &action in &actions {
        let successor = position.successor(MAX_AGENT, action);
        walk.counter.states_visited += 1;
        let value = walk.value(&successor, next_agent, next_depth, (alpha, beta));
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
        if model.prunes() {
            if let Some((_, best_value)) = best {
                alpha = alpha.max(best_value);
            }
        }
    }
    let Some((action, value)) = best else {
        return Err(DecisionError::NoLegalActions);
    };
    Ok(Decision {
        action,
        value,
        counter: walk.counter,
    })
}

/// Full-width minimax to a fixed depth.
#[derive(Debug)]
pub struct MinimaxSearch<E> {
    pub config: SearchConfig,
    pub evaluator: E,
}

impl<E> MinimaxSearch<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: Game, E: StateEvaluator<G>> GameTreeSearch<G> for MinimaxSearch<E> {
    fn decide(&mut self, position: &G) -> Result<Decision<G::Action>, DecisionError> {
        decide_root(
            position,
            self.config,
            &self.evaluator,
            AdversaryModel::Minimizing { prune: false },
        )
    }
}

/// Minimax with alpha-beta pruning.
///
/// Chooses the same action and root value as [`MinimaxSearch`] while
/// skipping provably irrelevant subtrees.
#[derive(Debug)]
pub struct AlphaBetaSearch<E> {
    pub config: SearchConfig,
    pub evaluator: E,
}

impl<E> AlphaBetaSearch<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }
}

impl<G: Game, E: StateEvaluator<G>> GameTreeSearch<G> for AlphaBetaSearch<E> {
    fn decide(&mut self, position: &G) -> Result<Decision<G::Action>, DecisionError> {
        decide_root(
            position,
            self.config,
            &self.evaluator,
            AdversaryModel::Minimizing { prune: true },
        )
    }
}
