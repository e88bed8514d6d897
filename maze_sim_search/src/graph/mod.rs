pub mod search;
pub mod types;

pub use crate::graph::search::{
    astar_search, breadth_first_search, depth_first_search, replay, uniform_cost_search,
};
pub use crate::graph::types::{ExpansionCounter, SearchPlan};
