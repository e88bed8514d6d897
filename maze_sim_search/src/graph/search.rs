use std::hash::{Hash, Hasher};

use maze_sim::data_structures::frontier::{FifoQueue, MinPriorityQueue, Stack};
use maze_sim::data_structures::ActionList;
use maze_sim::problem::{null_heuristic, Cost, Heuristic, SearchError, SearchProblem, Successor};
use maze_sim::rustc_hash::FxHashSet;

use crate::graph::types::{ExpansionCounter, SearchPlan};

/// Frontier entry: a reached state and the action sequence that reached it.
///
/// Equality and hashing project onto the state, so the priority frontier
/// decrease-keys by state and swaps in the cheaper path together with the
/// lower priority.
#[derive(Debug, Clone)]
struct PathNode<S, A> {
    state: S,
    path: ActionList<A>,
}

impl<S: PartialEq, A> PartialEq for PathNode<S, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for PathNode<S, A> {}

impl<S: Hash, A> Hash for PathNode<S, A> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

trait Frontier<T> {
    fn push(&mut self, entry: T);
    fn pop(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for Stack<T> {
    #[inline]
    fn push(&mut self, entry: T) {
        Stack::push(self, entry);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }
}

impl<T> Frontier<T> for FifoQueue<T> {
    #[inline]
    fn push(&mut self, entry: T) {
        FifoQueue::push(self, entry);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        FifoQueue::pop(self)
    }
}

/// Search the deepest nodes in the search tree first.
pub fn depth_first_search<P: SearchProblem>(
    problem: &P,
) -> Result<SearchPlan<P::Action>, SearchError> {
    uninformed_search(problem, Stack::new())
}

/// Search the shallowest nodes in the search tree first.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
) -> Result<SearchPlan<P::Action>, SearchError> {
    uninformed_search(problem, FifoQueue::new())
}

/// Search the node of least total path cost first.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &P,
) -> Result<SearchPlan<P::Action>, SearchError> {
    best_first_search(problem, null_heuristic)
}

/// Search the node with the lowest combined path cost and heuristic
/// estimate first.
pub fn astar_search<P: SearchProblem, H: Heuristic<P>>(
    problem: &P,
    heuristic: H,
) -> Result<SearchPlan<P::Action>, SearchError> {
    best_first_search(problem, heuristic)
}

/// Shared skeleton of the uninformed strategies. The goal test happens at
/// pop time: the first goal state popped wins.
fn uninformed_search<P, F>(
    problem: &P,
    mut frontier: F,
) -> Result<SearchPlan<P::Action>, SearchError>
where
    P: SearchProblem,
    F: Frontier<PathNode<P::State, P::Action>>,
{
    let mut counter = ExpansionCounter::ZERO;
    let mut closed: FxHashSet<P::State> = FxHashSet::default();
    frontier.push(PathNode {
        state: problem.start_state(),
        path: ActionList::new(),
    });

    while let Some(node) = frontier.pop() {
        if problem.is_goal_state(&node.state) {
            let cost = problem.cost_of_actions(&node.path);
            return Ok(SearchPlan {
                actions: node.path,
                cost,
                counter,
            });
        }
        if !closed.insert(node.state.clone()) {
            continue;
        }
        counter.expanded += 1;
        for Successor { state, action, .. } in problem.successors(&node.state) {
            let mut path = node.path.clone();
            path.push(action);
            counter.generated += 1;
            frontier.push(PathNode { state, path });
        }
    }
    Err(SearchError::NoPathFound)
}

/// Shared skeleton of the cost-ordered strategies. Priorities are recomputed
/// from the full candidate path, and a cheaper rediscovery of a queued state
/// lowers its priority in place.
fn best_first_search<P, H>(
    problem: &P,
    heuristic: H,
) -> Result<SearchPlan<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let mut counter = ExpansionCounter::ZERO;
    let mut closed: FxHashSet<P::State> = FxHashSet::default();
    let mut frontier: MinPriorityQueue<PathNode<P::State, P::Action>, Cost> =
        MinPriorityQueue::new();

    let start = problem.start_state();
    let start_priority = heuristic.estimate(&start, problem);
    frontier.push(
        PathNode {
            state: start,
            path: ActionList::new(),
        },
        start_priority,
    );

    while let Some((node, _)) = frontier.pop() {
        if problem.is_goal_state(&node.state) {
            let cost = problem.cost_of_actions(&node.path);
            return Ok(SearchPlan {
                actions: node.path,
                cost,
                counter,
            });
        }
        if !closed.insert(node.state.clone()) {
            continue;
        }
        counter.expanded += 1;
        for Successor { state, action, .. } in problem.successors(&node.state) {
            if closed.contains(&state) {
                continue;
            }
            let mut path = node.path.clone();
            path.push(action);
            let priority =
                problem.cost_of_actions(&path) + heuristic.estimate(&state, problem);
            counter.generated += 1;
            frontier.push(PathNode { state, path }, priority);
        }
    }
    Err(SearchError::NoPathFound)
}

/// Replay `actions` through the problem's successor function from the start
/// state. Returns the reached state when every action is legal in sequence.
pub fn replay<P: SearchProblem>(problem: &P, actions: &[P::Action]) -> Option<P::State> {
    let mut state = problem.start_state();
    for &action in actions {
        let successor = problem
            .successors(&state)
            .into_iter()
            .find(|s| s.action == action)?;
        state = successor.state;
    }
    Some(state)
}
