mod generator;
use generator::*;

use proptest::prelude::*;

use maze_sim::eval::ScoreEvaluator;
use maze_sim::game_tree_search::GameTreeSearch;
use maze_sim::problem::{null_heuristic, SearchProblem};

use crate::graph::{
    astar_search, breadth_first_search, depth_first_search, replay, uniform_cost_search,
};
use crate::{AlphaBetaSearch, ExpectimaxSearch, MinimaxSearch, SearchConfig};

const CASES: u32 = 128;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn reachability_agrees_across_strategies(problem in arb_dag_problem()) {
        let ucs = uniform_cost_search(&problem);
        let bfs = breadth_first_search(&problem);
        let dfs = depth_first_search(&problem);
        prop_assert_eq!(ucs.is_ok(), bfs.is_ok());
        prop_assert_eq!(ucs.is_ok(), dfs.is_ok());
    }

    #[test]
    fn every_returned_plan_replays_to_a_goal(problem in arb_dag_problem()) {
        let plans = [
            depth_first_search(&problem),
            breadth_first_search(&problem),
            uniform_cost_search(&problem),
            astar_search(&problem, null_heuristic),
        ];
        for plan in plans.into_iter().flatten() {
            let reached = replay(&problem, &plan.actions);
            prop_assert_eq!(Some(true), reached.map(|s| problem.is_goal_state(&s)));
        }
    }

    #[test]
    fn ucs_cost_is_minimal_among_returned_plans(problem in arb_dag_problem()) {
        if let Ok(ucs) = uniform_cost_search(&problem) {
            if let Ok(bfs) = breadth_first_search(&problem) {
                prop_assert!(ucs.cost <= bfs.cost);
            }
            if let Ok(dfs) = depth_first_search(&problem) {
                prop_assert!(ucs.cost <= dfs.cost);
            }
            let astar = astar_search(&problem, null_heuristic);
            prop_assert_eq!(Some(ucs.cost), astar.ok().map(|p| p.cost));
        }
    }

    #[test]
    fn alpha_beta_matches_minimax_and_visits_no_more_nodes(
        game in arb_takeaway(),
        depth in 1u8..4,
    ) {
        let config = SearchConfig { depth };
        let plain = MinimaxSearch::new(config, ScoreEvaluator).decide(&game);
        let pruned = AlphaBetaSearch::new(config, ScoreEvaluator).decide(&game);
        match (plain, pruned) {
            (Ok(plain), Ok(pruned)) => {
                prop_assert_eq!(plain.action, pruned.action);
                prop_assert_eq!(plain.value, pruned.value);
                prop_assert!(pruned.counter.states_visited <= plain.counter.states_visited);
            }
            (plain, pruned) => prop_assert_eq!(plain, pruned),
        }
    }

    #[test]
    fn decisions_are_idempotent(game in arb_takeaway(), depth in 1u8..4) {
        let config = SearchConfig { depth };
        let mut minimax = MinimaxSearch::new(config, ScoreEvaluator);
        prop_assert_eq!(minimax.decide(&game), minimax.decide(&game));
        let mut expectimax = ExpectimaxSearch::new(config, ScoreEvaluator);
        prop_assert_eq!(expectimax.decide(&game), expectimax.decide(&game));
    }
}
