use crate::data_structures::Vector;
use crate::game_tree_search::Game;
use crate::impl_display_from_debug;

/// Grid cell coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance between two cells.
    #[inline]
    pub fn manhattan_distance(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl_display_from_debug!(Pos);

/// Read-only accessors a grid-world evaluation function consumes.
///
/// Concrete worlds satisfy this by composition; only evaluators that need
/// positional features require it.
pub trait GridPerception: Game {
    fn agent_position(&self) -> Pos;

    fn adversary_positions(&self) -> Vector<Pos>;

    /// Remaining moves for which each adversary stays scared, index-aligned
    /// with [`GridPerception::adversary_positions`]. Zero means live.
    fn adversary_scared_timers(&self) -> Vector<u32>;

    /// Cells still holding a goal item.
    fn goal_positions(&self) -> Vector<Pos>;

    /// Cells holding an uncollected bonus item.
    fn bonus_positions(&self) -> Vector<Pos>;
}
