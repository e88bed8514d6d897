pub mod search;
pub mod types;

pub use crate::minimax::search::{AlphaBetaSearch, MinimaxSearch};
pub use crate::minimax::types::SearchConfig;
