use std::ops::Add;

use maze_sim::data_structures::ActionList;
use maze_sim::problem::Cost;

/// Node accounting for one search invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionCounter {
    /// States expanded (successors generated from them).
    pub expanded: u64,
    /// Successor entries generated and offered to the frontier.
    pub generated: u64,
}

impl ExpansionCounter {
    pub const ZERO: ExpansionCounter = ExpansionCounter {
        expanded: 0,
        generated: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &ExpansionCounter) {
        self.expanded += c.expanded;
        self.generated += c.generated;
    }

    pub fn summary(&self) -> String {
        format!("expanded={} generated={}", self.expanded, self.generated)
    }
}

impl Add for ExpansionCounter {
    type Output = ExpansionCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// A solved search: the action sequence leading from the start state to a
/// goal state, with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan<A> {
    pub actions: ActionList<A>,
    pub cost: Cost,
    pub counter: ExpansionCounter,
}
