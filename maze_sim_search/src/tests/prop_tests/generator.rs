use itertools::Itertools;
use proptest::prelude::*;

use maze_sim::data_structures::SuccessorList;
use maze_sim::problem::{Cost, SearchProblem, Successor};

use super::super::fixtures::Takeaway;

/// Random directed acyclic graph over `n` numbered states. Edges only run
/// from lower to higher ids, so every strategy terminates; actions are edge
/// indices.
#[derive(Debug, Clone)]
pub struct DagProblem {
    pub n: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

impl SearchProblem for DagProblem {
    type State = usize;
    type Action = usize;

    fn start_state(&self) -> usize {
        0
    }

    fn is_goal_state(&self, state: &usize) -> bool {
        *state == self.n - 1
    }

    fn successors(&self, state: &usize) -> SuccessorList<Successor<usize, usize>> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, &(from, _, _))| from == *state)
            .map(|(index, &(_, to, cost))| Successor {
                state: to,
                action: index,
                cost: Cost::new(cost),
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[usize]) -> Cost {
        let mut state = 0;
        let mut total = Cost::ZERO;
        for &index in actions {
            let Some(&(from, to, cost)) = self.edges.get(index) else {
                return Cost::new(f64::INFINITY);
            };
            if from != state {
                return Cost::new(f64::INFINITY);
            }
            state = to;
            total += Cost::new(cost);
        }
        total
    }
}

pub fn arb_dag_problem() -> impl Strategy<Value = DagProblem> {
    (3usize..9).prop_flat_map(|n| {
        let pairs: Vec<(usize, usize)> = (0..n).tuple_combinations().collect();
        let k = pairs.len();
        (
            proptest::collection::vec(proptest::bool::weighted(0.5), k),
            proptest::collection::vec(1.0f64..10.0, k),
        )
            .prop_map(move |(keep, costs)| {
                let edges = pairs
                    .iter()
                    .zip(keep.iter())
                    .zip(costs.iter())
                    .filter(|&((_, &keep), _)| keep)
                    .map(|((&(from, to), _), &cost)| (from, to, cost))
                    .collect();
                DagProblem { n, edges }
            })
    })
}

pub fn arb_takeaway() -> impl Strategy<Value = Takeaway> {
    (0u32..16, 1usize..4).prop_map(|(stones, num_agents)| Takeaway {
        stones,
        num_agents,
        last_mover: None,
    })
}
